//! Query tokenizer
//!
//! The lexer is a small state machine stepped lazily: every call to
//! [`Lexer::next_token`] runs the machine from `Begin` until exactly one token
//! is complete or the input is exhausted. Nothing is scanned ahead of the
//! caller except a single character of lookahead.

use super::error::LexError;
use super::source::{ReaderSource, Source, StrSource};
use super::token::{Token, TokenKind};
use log::{debug, trace};
use std::collections::HashMap;
use std::io::Read;
use std::iter::FusedIterator;
use std::sync::LazyLock;

const WILDCARD: char = '*';
const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// Keywords recognised in unquoted, wildcard-free words (lowercase keys)
static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    HashMap::from([
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("not", TokenKind::Not),
    ])
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    offset: usize,
    line: usize,
    column: usize,
}

#[derive(Debug, Clone, Copy)]
struct Located {
    ch: char,
    pos: Position,
}

/// Reads characters from a source and stamps each with its position
///
/// Line accounting happens when the character *after* a line break is read,
/// which lets a CR followed by LF count as a single break.
#[derive(Debug)]
struct Cursor<S> {
    source: S,
    peeked: Option<Located>,
    next_offset: usize,
    line: usize,
    column: usize,
    prev: Option<char>,
    exhausted: bool,
}

impl<S: Source> Cursor<S> {
    fn new(source: S) -> Self {
        Self {
            source,
            peeked: None,
            next_offset: 0,
            line: 1,
            column: 0,
            prev: None,
            exhausted: false,
        }
    }

    fn peek(&mut self) -> Result<Option<Located>, LexError> {
        if self.peeked.is_none() {
            self.peeked = self.read()?;
        }
        Ok(self.peeked)
    }

    /// Consume the character returned by the last `peek`
    fn bump(&mut self) {
        self.peeked = None;
    }

    fn advance(&mut self) -> Result<Option<Located>, LexError> {
        match self.peeked.take() {
            Some(located) => Ok(Some(located)),
            None => self.read(),
        }
    }

    /// Byte offset just past the last consumed character
    fn consumed_offset(&self) -> usize {
        match self.peeked {
            Some(located) => located.pos.offset,
            None => self.next_offset,
        }
    }

    fn read(&mut self) -> Result<Option<Located>, LexError> {
        if self.exhausted {
            return Ok(None);
        }
        let Some(ch) = self.source.next_char()? else {
            self.exhausted = true;
            return Ok(None);
        };

        match self.prev {
            Some('\n') => self.new_line(),
            Some('\r') if ch != '\n' => self.new_line(),
            _ => self.column += 1,
        }

        let pos = Position {
            offset: self.next_offset,
            line: self.line,
            column: self.column,
        };
        self.next_offset += ch.len_utf8();
        self.prev = Some(ch);

        Ok(Some(Located { ch, pos }))
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}

enum State {
    Begin,
    QuotedString(Position),
    UnquotedString(Position),
}

enum Step {
    Next(State),
    Emit(Token),
    Finish,
}

/// Pull-based tokenizer over a character [`Source`]
///
/// Yields tokens through [`Lexer::next_token`] or the [`Iterator`] impl. Once
/// the end of input or an error has been reported, the lexer only ever
/// reports end of stream.
#[derive(Debug)]
pub struct Lexer<S> {
    cursor: Cursor<S>,
    finished: bool,
}

impl<S: Source> Lexer<S> {
    pub fn new(source: S) -> Self {
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Scan the next token
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.finished {
            return Ok(None);
        }

        let mut state = State::Begin;
        loop {
            let step = match state {
                State::Begin => self.begin(),
                State::QuotedString(start) => self.quoted_string(start),
                State::UnquotedString(start) => self.unquoted_string(start),
            };

            match step {
                Ok(Step::Next(next)) => state = next,
                Ok(Step::Emit(token)) => {
                    trace!(
                        "token {:?} {:?} at {}:{}",
                        token.kind,
                        token.span(),
                        token.line,
                        token.column
                    );
                    return Ok(Some(token));
                }
                Ok(Step::Finish) => {
                    self.finished = true;
                    return Ok(None);
                }
                Err(e) => {
                    debug!("tokenization failed: {e}");
                    self.finished = true;
                    return Err(e);
                }
            }
        }
    }

    fn begin(&mut self) -> Result<Step, LexError> {
        while let Some(c) = self.cursor.peek()? {
            match c.ch {
                ch if ch.is_whitespace() => self.cursor.bump(),
                '(' => {
                    self.cursor.bump();
                    return Ok(Step::Emit(self.symbol(TokenKind::OpenGroup, c)));
                }
                ')' => {
                    self.cursor.bump();
                    return Ok(Step::Emit(self.symbol(TokenKind::CloseGroup, c)));
                }
                QUOTE => {
                    self.cursor.bump();
                    return Ok(Step::Next(State::QuotedString(c.pos)));
                }
                _ => return Ok(Step::Next(State::UnquotedString(c.pos))),
            }
        }

        Ok(Step::Finish)
    }

    fn quoted_string(&mut self, start: Position) -> Result<Step, LexError> {
        let mut segments = Vec::new();
        let mut buf = String::new();

        loop {
            let c = self.must_advance(start)?;
            match c.ch {
                QUOTE => {
                    segments.push(buf);
                    return Ok(Step::Emit(self.string_token(start, segments)));
                }
                WILDCARD => segments.push(std::mem::take(&mut buf)),
                ESCAPE => buf.push(self.must_advance(start)?.ch),
                ch => buf.push(ch),
            }
        }
    }

    fn unquoted_string(&mut self, start: Position) -> Result<Step, LexError> {
        let mut segments = Vec::new();
        let mut buf = String::new();

        while let Some(c) = self.cursor.peek()? {
            if c.ch.is_whitespace() || matches!(c.ch, '(' | ')' | QUOTE) {
                break;
            }
            self.cursor.bump();

            if c.ch == WILDCARD {
                segments.push(std::mem::take(&mut buf));
            } else {
                buf.push(c.ch);
            }
        }

        if segments.is_empty() {
            if let Some(&kind) = KEYWORDS.get(buf.to_lowercase().as_str()) {
                let end = self.cursor.consumed_offset();
                return Ok(Step::Emit(make_token(kind, Vec::new(), start, end)));
            }
        }

        segments.push(buf);
        Ok(Step::Emit(self.string_token(start, segments)))
    }

    fn must_advance(&mut self, quote: Position) -> Result<Located, LexError> {
        self.cursor
            .advance()?
            .ok_or(LexError::UnterminatedQuote {
                offset: quote.offset,
                line: quote.line,
                column: quote.column,
            })
    }

    fn string_token(&self, start: Position, segments: Vec<String>) -> Token {
        let kind = if segments.len() == 1 {
            TokenKind::Tag
        } else {
            TokenKind::Pattern
        };
        make_token(kind, segments, start, self.cursor.consumed_offset())
    }

    fn symbol(&self, kind: TokenKind, c: Located) -> Token {
        make_token(kind, Vec::new(), c.pos, self.cursor.consumed_offset())
    }
}

impl<'a> Lexer<StrSource<'a>> {
    /// Lexer over an in-memory query string
    pub fn for_str(input: &'a str) -> Self {
        Self::new(StrSource::new(input))
    }
}

impl<R: Read> Lexer<ReaderSource<R>> {
    /// Lexer decoding UTF-8 from a byte reader
    pub fn from_reader(reader: R) -> Self {
        Self::new(ReaderSource::new(reader))
    }
}

impl<S: Source> Iterator for Lexer<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<S: Source> FusedIterator for Lexer<S> {}

fn make_token(kind: TokenKind, segments: Vec<String>, start: Position, end: usize) -> Token {
    Token {
        kind,
        segments,
        start_offset: start.offset,
        end_offset: end,
        line: start.line,
        column: start.column,
    }
}

/// Tokenize a whole query string
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::for_str(input).collect()
}
