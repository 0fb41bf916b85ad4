//! Implementation of N-Triples and N-Quads RDF syntax

use crate::error::NTriplesError;
use crate::line_parser::LineParser;
use crate::sniff::{nquads_score, ntriples_score};
use crate::syntax::{LineSyntax, NQUADS_DESCRIPTION, NTRIPLES_DESCRIPTION};
use ntline_api::parser::{PushParser, QuadHandler, TextPosition};
use ntline_api::syntax::{SyntaxDescription, SyntaxRecognizer};

/// A [N-Triples](https://www.w3.org/TR/n-triples/) push parser.
///
/// It implements the `PushParser` trait.
/// The emitted quads never have a graph name.
///
/// Its memory consumption is linear in the size of the longest line of the file.
///
/// Count the number of of people using the `PushParser` API:
/// ```
/// use ntline::{NTriplesError, NTriplesParser};
/// use ntline_api::parser::PushParser;
/// use ntline_api::model::NamedNode;
///
/// let file = b"<http://example.com/foo> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://schema.org/Person> .
/// <http://example.com/foo> <http://schema.org/name> \"Foo\" .
/// <http://example.com/bar> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://schema.org/Person> .
/// <http://example.com/bar> <http://schema.org/name> \"Bar\" .
/// ";
///
/// let rdf_type = NamedNode { iri: "http://www.w3.org/1999/02/22-rdf-syntax-ns#type" };
/// let schema_person = NamedNode { iri: "http://schema.org/Person" };
/// let mut count = 0;
/// NTriplesParser::new().parse_all(file.as_ref(), &mut |t| -> Result<(), NTriplesError> {
///     if t.predicate == rdf_type && t.object == schema_person.into() {
///         count += 1;
///     }
///     Ok(())
/// }).unwrap();
/// assert_eq!(2, count)
/// ```
#[derive(Debug)]
pub struct NTriplesParser {
    inner: LineParser,
}

impl NTriplesParser {
    pub fn new() -> Self {
        Self {
            inner: LineParser::new(LineSyntax::NTriples),
        }
    }

    /// Position of the first byte not parsed yet.
    pub fn position(&self) -> TextPosition {
        self.inner.position()
    }
}

impl Default for NTriplesParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PushParser for NTriplesParser {
    type Error = NTriplesError;

    fn push_chunk<H: QuadHandler>(
        &mut self,
        chunk: &[u8],
        is_end: bool,
        handler: &mut H,
    ) -> Result<(), H::Error>
    where
        H::Error: From<NTriplesError>,
    {
        self.inner.push_chunk(chunk, is_end, handler)
    }

    fn is_end(&self) -> bool {
        self.inner.is_end()
    }
}

impl SyntaxRecognizer for NTriplesParser {
    const DESCRIPTION: SyntaxDescription = NTRIPLES_DESCRIPTION;

    fn recognize_syntax(sample: &[u8], suffix: Option<&str>, media_type: Option<&str>) -> u32 {
        ntriples_score(sample, suffix, media_type)
    }
}

/// A [N-Quads](https://www.w3.org/TR/n-quads/) push parser.
///
/// It implements the `PushParser` trait.
///
/// Its memory consumption is linear in the size of the longest line of the file.
///
/// Count the number of of people using the `PushParser` API:
/// ```
/// use ntline::{NQuadsParser, NTriplesError};
/// use ntline_api::parser::PushParser;
/// use ntline_api::model::NamedNode;
///
/// let file = b"<http://example.com/foo> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://schema.org/Person> <http://example.com/> .
/// <http://example.com/foo> <http://schema.org/name> \"Foo\" <http://example.com/> .
/// <http://example.com/bar> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://schema.org/Person> .
/// <http://example.com/bar> <http://schema.org/name> \"Bar\" .
/// ";
///
/// let rdf_type = NamedNode { iri: "http://www.w3.org/1999/02/22-rdf-syntax-ns#type" };
/// let schema_person = NamedNode { iri: "http://schema.org/Person" };
/// let mut count = 0;
/// NQuadsParser::new().parse_all(file.as_ref(), &mut |t| -> Result<(), NTriplesError> {
///     if t.predicate == rdf_type && t.object == schema_person.into() {
///         count += 1;
///     }
///     Ok(())
/// }).unwrap();
/// assert_eq!(2, count)
/// ```
#[derive(Debug)]
pub struct NQuadsParser {
    inner: LineParser,
}

impl NQuadsParser {
    pub fn new() -> Self {
        Self {
            inner: LineParser::new(LineSyntax::NQuads),
        }
    }

    /// Position of the first byte not parsed yet.
    pub fn position(&self) -> TextPosition {
        self.inner.position()
    }
}

impl Default for NQuadsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PushParser for NQuadsParser {
    type Error = NTriplesError;

    fn push_chunk<H: QuadHandler>(
        &mut self,
        chunk: &[u8],
        is_end: bool,
        handler: &mut H,
    ) -> Result<(), H::Error>
    where
        H::Error: From<NTriplesError>,
    {
        self.inner.push_chunk(chunk, is_end, handler)
    }

    fn is_end(&self) -> bool {
        self.inner.is_end()
    }
}

impl SyntaxRecognizer for NQuadsParser {
    const DESCRIPTION: SyntaxDescription = NQUADS_DESCRIPTION;

    fn recognize_syntax(sample: &[u8], suffix: Option<&str>, media_type: Option<&str>) -> u32 {
        nquads_score(sample, suffix, media_type)
    }
}
