//! Lexing and parsing of tag filter queries
//!
//! A query is a sequence of tags, wildcard patterns, the keywords `AND`, `OR`
//! and `NOT`, and parentheses:
//!
//! ```text
//! foo                      a tag
//! "foo bar"                a quoted tag, may contain spaces and parentheses
//! "say \"hi\""             backslash escapes the next character inside quotes
//! foo*  *foo  f*o          patterns, split into segments around each `*`
//! foo AND (bar OR NOT baz) keywords are case-insensitive
//! ```
//!
//! [`Lexer`] turns a query into [`Token`]s on demand. [`parse_list`] is the
//! simplest consumer and accepts plain tags only.

mod error;
mod expect;
mod lexer;
mod list;
mod source;
mod token;

pub use error::{ExpectedKinds, LexError, ParseError};
pub use expect::expect;
pub use lexer::{Lexer, tokenize};
pub use list::{parse_list, parse_list_from_reader, parse_list_with};
pub use source::{ReaderSource, Source, StrSource};
pub use token::{Token, TokenKind};
