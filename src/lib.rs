//! Lexer and list parser for the dialekt tag filter language
//!
//! ```
//! use dialekt::{Tag, parse_list};
//!
//! let tags = parse_list(r#"linux "release notes""#).unwrap();
//! assert_eq!(tags, vec![Tag::new("linux"), Tag::new("release notes")]);
//!
//! let err = parse_list("linux AND docs").unwrap_err();
//! assert_eq!(err.to_string(), "unexpected AND operator, expected tag");
//! ```

pub mod ast;
pub mod parser;

pub use ast::Tag;
pub use parser::{
    LexError, Lexer, ParseError, Token, TokenKind, parse_list, parse_list_from_reader, tokenize,
};
