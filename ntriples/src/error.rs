use ntline_api::parser::{ParseError, TextPosition};
use oxiri::IriParseError;
use std::error::Error;
use std::fmt;
use std::io;

/// Error that might be returned during parsing.
///
/// It might wrap an IO error or be a parsing error.
/// Any error kills the parsing session.
#[derive(Debug)]
pub struct NTriplesError {
    pub(crate) kind: NTriplesErrorKind,
    pub(crate) position: Option<TextPosition>,
}

#[derive(Debug)]
#[non_exhaustive]
pub enum NTriplesErrorKind {
    Io(io::Error),
    OutOfMemory,
    InvalidUtf8(u8),
    UnterminatedTerm(u8),
    BackslashAtEndOfLine,
    EscapeOverEndOfLine(u8),
    IllegalHexDigit { escape: u8, digit: u8 },
    IllegalCodePoint(u32),
    IllegalEscape(u8),
    BadIriCharacters(String),
    InvalidIri { iri: String, error: IriParseError },
    InvalidDatatypeIri { iri: String, error: IriParseError },
    MissingLanguage,
    EmptyLanguageTag,
    MissingDatatype,
    IllegalBlankNodeId,
    MissingBlankNodeId,
    UnexpectedByte { found: u8, expected: &'static str },
    UnknownTermType(u8),
    UnexpectedEndOfLine,
    MissingDot,
    JunkAfterDot,
    TooManyTerms,
    JunkAtEndOfInput,
    SessionTerminated,
}

impl NTriplesError {
    pub(crate) fn new(kind: NTriplesErrorKind, position: TextPosition) -> Self {
        Self {
            kind,
            position: Some(position),
        }
    }

    pub fn kind(&self) -> &NTriplesErrorKind {
        &self.kind
    }
}

struct DisplayByte(u8);

impl fmt::Display for DisplayByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii() {
            write!(f, "{}", char::from(self.0).escape_debug())
        } else {
            write!(f, "\\x{:02X}", self.0)
        }
    }
}

impl fmt::Display for NTriplesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NTriplesErrorKind::Io(error) => return fmt::Display::fmt(error, f),
            NTriplesErrorKind::OutOfMemory => write!(f, "out of memory"),
            NTriplesErrorKind::InvalidUtf8(c) => {
                write!(f, "UTF-8 encoding error at character 0x{:02X}", c)
            }
            NTriplesErrorKind::UnterminatedTerm(expected) => write!(
                f,
                "missing terminating '{}' before end of line",
                DisplayByte(*expected)
            ),
            NTriplesErrorKind::BackslashAtEndOfLine => write!(f, "\\ at end of line"),
            NTriplesErrorKind::EscapeOverEndOfLine(escape) => {
                write!(f, "\\{} escape over end of line", DisplayByte(*escape))
            }
            NTriplesErrorKind::IllegalHexDigit { escape, digit } => write!(
                f,
                "illegal hex digit '{}' in Unicode escape \\{}",
                DisplayByte(*digit),
                DisplayByte(*escape)
            ),
            NTriplesErrorKind::IllegalCodePoint(point) => write!(
                f,
                "illegal Unicode character with code point #x{:X} (max #x10FFFF)",
                point
            ),
            NTriplesErrorKind::IllegalEscape(c) => {
                write!(f, "illegal string escape \\{}", DisplayByte(*c))
            }
            NTriplesErrorKind::BadIriCharacters(iri) => {
                write!(f, "URI '{}' contains bad character(s)", iri)
            }
            NTriplesErrorKind::InvalidIri { iri, error } => {
                write!(f, "URI '{}' is not a valid absolute IRI: {}", iri, error)
            }
            NTriplesErrorKind::InvalidDatatypeIri { iri, error } => write!(
                f,
                "datatype URI '{}' is not a valid absolute IRI: {}",
                iri, error
            ),
            NTriplesErrorKind::MissingLanguage => write!(f, "missing language after \"string\"@"),
            NTriplesErrorKind::EmptyLanguageTag => write!(f, "invalid empty language tag"),
            NTriplesErrorKind::MissingDatatype => write!(
                f,
                "missing datatype URI-ref in \"string\"^^<URI-ref> after ^^"
            ),
            NTriplesErrorKind::IllegalBlankNodeId => {
                write!(f, "illegal bNodeID - _ not followed by :")
            }
            NTriplesErrorKind::MissingBlankNodeId => write!(f, "bad or missing bNodeID after _:"),
            NTriplesErrorKind::UnexpectedByte { found, expected } => {
                write!(f, "saw '{}', expected {}", DisplayByte(*found), expected)
            }
            NTriplesErrorKind::UnknownTermType(c) => {
                write!(f, "unknown term type starting with '{}'", DisplayByte(*c))
            }
            NTriplesErrorKind::UnexpectedEndOfLine => write!(f, "unexpected end of line"),
            NTriplesErrorKind::MissingDot => write!(f, "missing terminating \".\""),
            NTriplesErrorKind::JunkAfterDot => write!(f, "junk after terminating \".\""),
            NTriplesErrorKind::TooManyTerms => write!(f, "N-Triples only allows 3 terms"),
            NTriplesErrorKind::JunkAtEndOfInput => write!(f, "junk at end of input"),
            NTriplesErrorKind::SessionTerminated => {
                write!(f, "parsing session already terminated")
            }
        }?;
        if let Some(position) = self.position {
            write!(f, " on {}", position)?;
        }
        Ok(())
    }
}

impl Error for NTriplesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            NTriplesErrorKind::Io(error) => Some(error),
            NTriplesErrorKind::InvalidIri { error, .. }
            | NTriplesErrorKind::InvalidDatatypeIri { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl ParseError for NTriplesError {
    fn textual_position(&self) -> Option<TextPosition> {
        self.position
    }
}

impl From<io::Error> for NTriplesError {
    fn from(error: io::Error) -> Self {
        Self {
            kind: NTriplesErrorKind::Io(error),
            position: None,
        }
    }
}

impl From<NTriplesError> for io::Error {
    fn from(error: NTriplesError) -> Self {
        match error.kind {
            NTriplesErrorKind::Io(error) => error,
            _ => io::Error::new(io::ErrorKind::InvalidData, error),
        }
    }
}
