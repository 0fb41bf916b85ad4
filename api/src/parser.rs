//! Interfaces for push based RDF parsers.
//!
//! A push parser is fed with byte chunks of any size by its caller.
//! It calls a [`QuadHandler`] for each statement, default graph boundary and warning it finds.

use crate::model::Quad;
use std::error::Error;
use std::fmt;
use std::io::{self, Read};
use std::marker::PhantomData;

/// Size of the chunks read by [`PushParser::parse_read`].
pub const READ_CHUNK_SIZE: usize = 8192;

/// A position in a parsed document.
///
/// `line` starts at 1, `column` is the 0-based byte offset in the current line
/// and `byte` the 0-based byte offset from the start of the document.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub struct TextPosition {
    line: u64,
    column: u64,
    byte: u64,
}

impl TextPosition {
    pub const fn new(line: u64, column: u64, byte: u64) -> Self {
        Self { line, column, byte }
    }

    /// The line number, starting at 1.
    pub const fn line_number(&self) -> u64 {
        self.line
    }

    /// The byte offset inside of the current line, starting at 0.
    pub const fn column_number(&self) -> u64 {
        self.column
    }

    /// The byte offset from the start of the document, starting at 0.
    pub const fn byte_offset(&self) -> u64 {
        self.byte
    }
}

impl Default for TextPosition {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} column {} (byte {})",
            self.line, self.column, self.byte
        )
    }
}

/// Error returned by a parser.
pub trait ParseError: Error {
    /// Position of the error in the parsed document, if it has one.
    fn textual_position(&self) -> Option<TextPosition>;
}

/// Boundary of the default graph.
///
/// A parser emits [`GraphEvent::Start`] just before its first statement and
/// [`GraphEvent::End`] at the end of the input if and only if it emitted a start.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum GraphEvent {
    Start,
    End,
}

/// A non fatal problem found while parsing.
///
/// Warnings never change the outcome of a parsing step.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct ParseWarning {
    kind: WarningKind,
    position: TextPosition,
}

#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[non_exhaustive]
pub enum WarningKind {
    /// A `rdf:_N` container membership property with a malformed or non positive `N`.
    IllegalOrdinal { iri: String },
    /// A literal with both a language tag and a datatype. The language tag is dropped.
    LanguageWithDatatype { language: String },
    /// A literal used as graph name. The graph name is dropped.
    LiteralGraphName,
    /// A language tag that is not a well-formed BCP47 tag.
    MalformedLanguageTag { tag: String, reason: String },
}

impl ParseWarning {
    pub fn new(kind: WarningKind, position: TextPosition) -> Self {
        Self { kind, position }
    }

    pub fn kind(&self) -> &WarningKind {
        &self.kind
    }

    pub fn position(&self) -> TextPosition {
        self.position
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::IllegalOrdinal { iri } => {
                write!(f, "illegal ordinal value in property '{}'", iri)
            }
            WarningKind::LanguageWithDatatype { language } => write!(
                f,
                "typed literal used with language '{}' - ignoring the language",
                language
            ),
            WarningKind::LiteralGraphName => write!(f, "ignoring N-Quads literal graph names"),
            WarningKind::MalformedLanguageTag { tag, reason } => {
                write!(f, "language tag '{}' is not well-formed: {}", tag, reason)
            }
        }?;
        write!(f, " on {}", self.position)
    }
}

/// Receives the output of a [`PushParser`].
///
/// Returning an error from `handle_quad` or `handle_graph_event` aborts the parsing.
pub trait QuadHandler {
    type Error: Error;

    /// Called for each parsed statement.
    fn handle_quad(&mut self, quad: Quad<'_>) -> Result<(), Self::Error>;

    /// Called when the default graph starts or ends.
    fn handle_graph_event(&mut self, event: GraphEvent) -> Result<(), Self::Error> {
        let _ = event;
        Ok(())
    }

    /// Called for each non fatal problem.
    fn handle_warning(&mut self, warning: &ParseWarning) {
        let _ = warning;
    }
}

/// A parser fed with byte chunks.
///
/// `push_chunk` should be called with `is_end` set to `false` as long as there is data,
/// then exactly once with `is_end` set to `true`.
/// After an error the parser is dead and all subsequent calls fail.
pub trait PushParser {
    type Error: ParseError;

    /// Appends `chunk` to the parser input and parses all the statements that are now complete.
    fn push_chunk<H: QuadHandler>(
        &mut self,
        chunk: &[u8],
        is_end: bool,
        handler: &mut H,
    ) -> Result<(), H::Error>
    where
        H::Error: From<Self::Error>;

    /// Returns `true` if the end of the input has been pushed or if the parser failed.
    fn is_end(&self) -> bool;

    /// Pushes the complete content of `read` in chunks of [`READ_CHUNK_SIZE`] bytes.
    fn parse_read<R: Read, H: QuadHandler>(&mut self, mut read: R, handler: &mut H) -> Result<(), H::Error>
    where
        H::Error: From<Self::Error> + From<io::Error>,
    {
        let mut buffer = vec![0; READ_CHUNK_SIZE];
        loop {
            let len = match read.read(&mut buffer) {
                Ok(0) => return self.push_chunk(&[], true, handler),
                Ok(len) => len,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into()),
            };
            self.push_chunk(&buffer[..len], false, handler)?;
        }
    }

    /// Parses the complete content of `read` and calls `on_quad` each time a new statement is read.
    ///
    /// Default graph events and warnings are ignored.
    fn parse_all<R: Read, E>(
        &mut self,
        read: R,
        on_quad: &mut impl FnMut(Quad<'_>) -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: Error + From<Self::Error> + From<io::Error>,
    {
        self.parse_read(
            read,
            &mut QuadFn {
                on_quad,
                error: PhantomData,
            },
        )
    }
}

struct QuadFn<'a, F, E> {
    on_quad: &'a mut F,
    error: PhantomData<fn() -> E>,
}

impl<'a, F: FnMut(Quad<'_>) -> Result<(), E>, E: Error> QuadHandler for QuadFn<'a, F, E> {
    type Error = E;

    fn handle_quad(&mut self, quad: Quad<'_>) -> Result<(), E> {
        (self.on_quad)(quad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display_has_position() {
        let warning = ParseWarning::new(WarningKind::LiteralGraphName, TextPosition::new(3, 7, 42));
        assert_eq!(
            warning.to_string(),
            "ignoring N-Quads literal graph names on line 3 column 7 (byte 42)"
        );
        assert_eq!(warning.position().line_number(), 3);
    }

    #[test]
    fn default_position_is_document_start() {
        let position = TextPosition::default();
        assert_eq!(position.line_number(), 1);
        assert_eq!(position.column_number(), 0);
        assert_eq!(position.byte_offset(), 0);
    }
}
