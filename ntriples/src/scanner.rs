//! In-place decoding of the terms of one line.

use crate::error::{NTriplesError, NTriplesErrorKind};
use crate::utils::{code_point_to_char, convert_hexa_byte, is_space, utf8_sequence_len};
use ntline_api::parser::TextPosition;
use std::cmp::min;

/// A read cursor over one physical line, without its terminator.
///
/// Terms are decoded in place: the decoded bytes of a term are written over
/// its source bytes, the write index never passing the read index.
pub struct LineCursor<'a> {
    bytes: &'a mut [u8],
    offset: usize,
    end: usize,
    line: u64,
    line_start: u64,
}

impl<'a> LineCursor<'a> {
    /// `line` is the 1-based line number and `line_start` the document offset of the first byte of `bytes`.
    pub fn new(bytes: &'a mut [u8], line: u64, line_start: u64) -> Self {
        let end = bytes.len();
        Self {
            bytes,
            offset: 0,
            end,
            line,
            line_start,
        }
    }

    /// Restricts the cursor to the line content without its surrounding whitespace.
    pub fn trim(&mut self) {
        while self.end > self.offset && is_space(self.bytes[self.end - 1]) {
            self.end -= 1;
        }
        self.skip_whitespace();
    }

    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    pub fn peek(&self, ahead: usize) -> Option<u8> {
        let i = self.offset + ahead;
        if i < self.end {
            Some(self.bytes[i])
        } else {
            None
        }
    }

    pub fn advance(&mut self, count: usize) {
        self.offset = min(self.offset + count, self.end);
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !is_space(c) {
                break;
            }
            self.offset += 1;
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn remaining(&self) -> &[u8] {
        &self.bytes[self.offset..self.end]
    }

    pub fn position_at(&self, offset: usize) -> TextPosition {
        TextPosition::new(
            self.line,
            offset as u64,
            self.line_start + offset as u64,
        )
    }

    pub fn position(&self) -> TextPosition {
        self.position_at(self.offset)
    }

    pub fn error(&self, kind: NTriplesErrorKind) -> NTriplesError {
        NTriplesError::new(kind, self.position())
    }

    pub fn error_at(&self, kind: NTriplesErrorKind, offset: usize) -> NTriplesError {
        NTriplesError::new(kind, self.position_at(offset))
    }

    /// The decoded bytes of a scanned term.
    pub fn term(&self, term: ScannedTerm) -> &[u8] {
        &self.bytes[term.start..term.end]
    }

    pub fn term_mut(&mut self, term: ScannedTerm) -> &mut [u8] {
        &mut self.bytes[term.start..term.end]
    }

    /// Gives up the cursor and freezes the decoded line.
    pub fn into_bytes(self) -> &'a [u8] {
        self.bytes
    }
}

/// The byte set a term is made of.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum TermClass {
    Iri,
    BlankNodeId,
    QuotedString,
    LanguageTag,
}

impl TermClass {
    fn accepts(self, c: u8, first: bool) -> bool {
        match self {
            TermClass::Iri | TermClass::QuotedString => true,
            TermClass::BlankNodeId => {
                c.is_ascii_alphanumeric()
                    || c == b'_'
                    || c == b':'
                    || (!first && (c == b'-' || c == b'.'))
            }
            TermClass::LanguageTag => {
                c.is_ascii_alphabetic() || (!first && (c.is_ascii_digit() || c == b'-'))
            }
        }
    }
}

/// The decoded range of a term inside of the line.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct ScannedTerm {
    pub start: usize,
    pub end: usize,
}

impl ScannedTerm {
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Reads one term starting at the cursor and decodes it in place.
///
/// If `terminator` is set the term must end with it and the terminator is consumed.
/// Otherwise the term ends on the first byte not in `class`, which is left to the caller.
/// Multi byte UTF-8 characters are copied through and do not count as the first byte of the term.
pub fn scan_term(
    cursor: &mut LineCursor<'_>,
    terminator: Option<u8>,
    class: TermClass,
) -> Result<ScannedTerm, NTriplesError> {
    debug_assert!(
        terminator.is_none() || matches!(class, TermClass::Iri | TermClass::QuotedString),
        "only IRIs and quoted strings end with a terminator"
    );
    let start = cursor.offset;
    let mut write = start;
    // ASCII bytes and escapes read so far
    let mut position = 0;
    loop {
        let c = match cursor.current() {
            Some(c) => c,
            None => {
                return match terminator {
                    Some(terminator) => {
                        Err(cursor.error(NTriplesErrorKind::UnterminatedTerm(terminator)))
                    }
                    None => Ok(ScannedTerm { start, end: write }),
                }
            }
        };

        if c >= 0x80 {
            let len = utf8_sequence_len(cursor.remaining())
                .ok_or_else(|| cursor.error(NTriplesErrorKind::InvalidUtf8(c)))?;
            let read = cursor.offset;
            cursor.bytes.copy_within(read..read + len, write);
            write += len;
            cursor.offset += len;
            continue;
        }

        if Some(c) == terminator {
            cursor.offset += 1;
            return Ok(ScannedTerm { start, end: write });
        }

        if !class.accepts(c, position == 0) {
            return Ok(ScannedTerm { start, end: write });
        }
        position += 1;

        if c == b'\\' {
            let (decoded, len) = read_escape(cursor)?;
            let mut utf8 = [0; 4];
            let encoded = decoded.encode_utf8(&mut utf8).as_bytes();
            cursor.bytes[write..write + encoded.len()].copy_from_slice(encoded);
            write += encoded.len();
            cursor.offset += len;
            continue;
        }

        cursor.bytes[write] = c;
        write += 1;
        cursor.offset += 1;
    }
}

/// Decodes the escape sequence at the cursor and returns the character with the source length.
fn read_escape(cursor: &LineCursor<'_>) -> Result<(char, usize), NTriplesError> {
    let escape = cursor
        .peek(1)
        .ok_or_else(|| cursor.error(NTriplesErrorKind::BackslashAtEndOfLine))?;
    let decoded = match escape {
        b'"' | b'\\' | b'<' | b'>' | b'{' | b'}' | b'|' | b'^' | b'`' => char::from(escape),
        b'b' => '\u{8}',
        b'f' => '\u{C}',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'u' => return read_hexa_escape(cursor, escape, 4),
        b'U' => return read_hexa_escape(cursor, escape, 8),
        _ => {
            return Err(cursor.error_at(
                NTriplesErrorKind::IllegalEscape(escape),
                cursor.offset + 1,
            ))
        }
    };
    Ok((decoded, 2))
}

fn read_hexa_escape(
    cursor: &LineCursor<'_>,
    escape: u8,
    digits: usize,
) -> Result<(char, usize), NTriplesError> {
    let mut point = 0u32;
    for i in 0..digits {
        let digit = cursor
            .peek(2 + i)
            .ok_or_else(|| cursor.error(NTriplesErrorKind::EscapeOverEndOfLine(escape)))?;
        let value = convert_hexa_byte(digit).ok_or_else(|| {
            cursor.error_at(
                NTriplesErrorKind::IllegalHexDigit { escape, digit },
                cursor.offset + 2 + i,
            )
        })?;
        point = point * 16 + u32::from(value);
    }
    let decoded = code_point_to_char(point)
        .ok_or_else(|| cursor.error(NTriplesErrorKind::IllegalCodePoint(point)))?;
    Ok((decoded, 2 + digits))
}
