use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// The kinds of tokens produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// The `AND` keyword
    And,
    /// The `OR` keyword
    Or,
    /// The `NOT` keyword
    Not,
    /// A literal tag name
    Tag,
    /// A tag name containing one or more wildcards
    Pattern,
    /// An opening parenthesis
    OpenGroup,
    /// A closing parenthesis
    CloseGroup,
}

impl TokenKind {
    /// Human readable name used in diagnostics
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::And => "AND operator",
            TokenKind::Or => "OR operator",
            TokenKind::Not => "NOT operator",
            TokenKind::Tag => "tag",
            TokenKind::Pattern => "pattern",
            TokenKind::OpenGroup => "opening parenthesis",
            TokenKind::CloseGroup => "closing parenthesis",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A classified, positioned unit of query input
///
/// `segments` holds the literal text of tags and patterns. A tag has exactly
/// one segment; a pattern with N wildcards has N+1 segments. Keywords and
/// parentheses have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub segments: Vec<String>,
    /// Byte offset of the first character (inclusive)
    pub start_offset: usize,
    /// Byte offset after the last character (exclusive)
    pub end_offset: usize,
    /// 1-based line of the first character
    pub line: usize,
    /// 1-based column of the first character, counted in characters
    pub column: usize,
}

impl Token {
    /// The name of a tag token, `None` for every other kind
    pub fn tag_name(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Tag => self.segments.first().map(String::as_str),
            _ => None,
        }
    }

    /// Byte range covered by this token in the source
    pub fn span(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind, self.line, self.column
        )
    }
}
