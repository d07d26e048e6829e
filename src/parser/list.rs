use super::error::ParseError;
use super::expect::expect;
use super::lexer::Lexer;
use super::source::Source;
use super::token::TokenKind;
use crate::ast::Tag;
use log::debug;
use std::io::Read;

/// Parse a whitespace separated sequence of tags
///
/// Any keyword, pattern or parenthesis fails the whole parse.
pub fn parse_list(input: &str) -> Result<Vec<Tag>, ParseError> {
    parse_list_with(Lexer::for_str(input))
}

/// Parse a tag list decoded from a byte reader
pub fn parse_list_from_reader<R: Read>(reader: R) -> Result<Vec<Tag>, ParseError> {
    parse_list_with(Lexer::from_reader(reader))
}

/// Parse a tag list from an existing lexer, pulling one token at a time
pub fn parse_list_with<S: Source>(mut lexer: Lexer<S>) -> Result<Vec<Tag>, ParseError> {
    let mut tags = Vec::new();

    while let Some(token) = lexer.next_token()? {
        let token = expect(Some(&token), &[TokenKind::Tag]).inspect_err(|e| {
            debug!("tag list rejected: {e}");
        })?;
        if let Some(name) = token.tag_name() {
            tags.push(Tag::new(name));
        }
    }

    Ok(tags)
}
