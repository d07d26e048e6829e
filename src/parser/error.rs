use super::token::TokenKind;
use std::fmt;
use thiserror::Error;

/// Fatal errors raised while tokenizing a query
#[derive(Debug, Error)]
pub enum LexError {
    #[error("invalid UTF-8 sequence at byte {offset}")]
    InvalidEncoding { offset: usize },

    #[error(
        "unexpected end of input, unterminated quoted string starting at line {line}, column {column}"
    )]
    UnterminatedQuote {
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error("failed to read query input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the parsers consuming the token stream
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: ExpectedKinds },

    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        expected: ExpectedKinds,
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error(transparent)]
    Lex(#[from] LexError),
}

/// The token kinds acceptable at some point of a parse
///
/// Displays as `a`, `a or b`, `a, b or c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedKinds(pub Vec<TokenKind>);

impl ExpectedKinds {
    pub fn kinds(&self) -> &[TokenKind] {
        &self.0
    }
}

impl From<&[TokenKind]> for ExpectedKinds {
    fn from(kinds: &[TokenKind]) -> Self {
        ExpectedKinds(kinds.to_vec())
    }
}

impl fmt::Display for ExpectedKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.len();
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(if i + 1 == count { " or " } else { ", " })?;
            }
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}
