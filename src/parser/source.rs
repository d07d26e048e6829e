//! Character sources feeding the lexer
//!
//! The lexer reads one character at a time through the [`Source`] trait, so it
//! can scan an in-memory string or decode UTF-8 straight off any byte reader.

use super::error::LexError;
use std::io::{BufReader, ErrorKind, Read};
use std::str::Chars;

/// A stream of characters consumed one at a time
pub trait Source {
    /// Read the next character, `Ok(None)` once the input is exhausted
    fn next_char(&mut self) -> Result<Option<char>, LexError>;
}

/// Source over an in-memory string
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
        }
    }
}

impl Source for StrSource<'_> {
    fn next_char(&mut self) -> Result<Option<char>, LexError> {
        Ok(self.chars.next())
    }
}

/// Source decoding UTF-8 from a byte reader
///
/// Input is buffered internally. Malformed or truncated sequences fail with
/// [`LexError::InvalidEncoding`] pointing at the first byte of the sequence.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: BufReader<R>,
    offset: usize,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            offset: 0,
        }
    }

    /// Read a single byte, `Ok(None)` at end of input
    fn read_byte(&mut self) -> Result<Option<u8>, LexError> {
        let mut byte = [0u8; 1];
        match self.reader.read_exact(&mut byte) {
            Ok(()) => Ok(Some(byte[0])),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(LexError::Io(e)),
        }
    }
}

impl<R: Read> Source for ReaderSource<R> {
    fn next_char(&mut self) -> Result<Option<char>, LexError> {
        let start = self.offset;
        let invalid = || LexError::InvalidEncoding { offset: start };

        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = sequence_width(lead).ok_or_else(invalid)?;

        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self.read_byte()?.ok_or_else(invalid)?;
        }

        let decoded = std::str::from_utf8(&buf[..width]).map_err(|_| invalid())?;
        let ch = decoded.chars().next().ok_or_else(invalid)?;
        self.offset += width;
        Ok(Some(ch))
    }
}

/// Encoded length of a UTF-8 sequence given its lead byte
fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
