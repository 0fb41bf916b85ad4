//! Parsing of one N-Triples or N-Quads line.

use crate::error::{NTriplesError, NTriplesErrorKind};
use crate::iri::{has_bad_iri_characters, is_illegal_ordinal, validate_absolute_iri};
use crate::scanner::{scan_term, LineCursor, ScannedTerm, TermClass};
use crate::syntax::LineSyntax;
use log::warn;
use ntline_api::model::*;
use ntline_api::parser::{ParseWarning, TextPosition, WarningKind};
use oxilangtag::LanguageTag;
use std::str;
use std::vec;

/// Turns lines into statements.
///
/// The only state kept between lines is the literal graph name warning flag
/// and the warnings not yet collected by the caller.
#[derive(Debug)]
pub struct LineGrammar {
    syntax: LineSyntax,
    warned_literal_graph: bool,
    warnings: Vec<ParseWarning>,
}

#[derive(Clone, Copy)]
enum NodeSpan {
    Iri(ScannedTerm),
    Blank(ScannedTerm),
}

#[derive(Clone, Copy)]
struct LiteralSpan {
    value: ScannedTerm,
    language: Option<ScannedTerm>,
    datatype: Option<ScannedTerm>,
}

#[derive(Clone, Copy)]
enum ObjectSpan {
    Node(NodeSpan),
    Literal(LiteralSpan),
}

impl LineGrammar {
    pub fn new(syntax: LineSyntax) -> Self {
        Self {
            syntax,
            warned_literal_graph: false,
            warnings: Vec::new(),
        }
    }

    pub fn syntax(&self) -> LineSyntax {
        self.syntax
    }

    /// Returns the warnings emitted since the last call.
    pub fn drain_warnings(&mut self) -> vec::Drain<'_, ParseWarning> {
        self.warnings.drain(..)
    }

    /// Parses one physical line, without its terminator.
    ///
    /// Blank and comment lines give `Ok(None)`.
    /// The terms of the returned statement point into `line`, which is decoded in place.
    pub fn parse_line<'a>(
        &mut self,
        line: &'a mut [u8],
        line_number: u64,
        line_start: u64,
    ) -> Result<Option<Quad<'a>>, NTriplesError> {
        let mut cursor = LineCursor::new(line, line_number, line_start);
        cursor.trim();
        match cursor.current() {
            None | Some(b'#') => return Ok(None),
            Some(_) => (),
        }

        let subject = match lookahead(&cursor, b"<_", "<URIref> or _:bnodeID")? {
            b'<' => NodeSpan::Iri(self.parse_iri(&mut cursor)?),
            _ => NodeSpan::Blank(parse_blank_node(&mut cursor)?),
        };
        cursor.skip_whitespace();

        lookahead(&cursor, b"<", "<URIref>")?;
        let predicate = self.parse_iri(&mut cursor)?;
        cursor.skip_whitespace();

        let object = match lookahead(&cursor, b"<_\"x", "<URIref>, _:bnodeID or \"literal\"")? {
            b'<' => ObjectSpan::Node(NodeSpan::Iri(self.parse_iri(&mut cursor)?)),
            b'_' => ObjectSpan::Node(NodeSpan::Blank(parse_blank_node(&mut cursor)?)),
            b'"' => ObjectSpan::Literal(self.parse_literal(&mut cursor)?),
            c => return Err(cursor.error(NTriplesErrorKind::UnknownTermType(c))),
        };
        cursor.skip_whitespace();

        let mut graph_name = None;
        let mut extra_term = None;
        match cursor.current() {
            Some(b'.') => (),
            None => return Err(cursor.error(NTriplesErrorKind::MissingDot)),
            Some(_) => {
                let start = cursor.offset();
                extra_term = Some(start);
                let (allowed, expected) = match self.syntax {
                    LineSyntax::NQuads => (
                        &b"<_\""[..],
                        "<URIref>, _:bnodeID or \"literal\"",
                    ),
                    LineSyntax::NTriples => (&b"<_"[..], "<URIref> or _:bnodeID"),
                };
                graph_name = match lookahead(&cursor, allowed, expected)? {
                    b'<' => Some(NodeSpan::Iri(self.parse_iri(&mut cursor)?)),
                    b'_' => Some(NodeSpan::Blank(parse_blank_node(&mut cursor)?)),
                    _ => {
                        self.parse_literal(&mut cursor)?;
                        if !self.warned_literal_graph {
                            self.warned_literal_graph = true;
                            self.warn(WarningKind::LiteralGraphName, cursor.position_at(start));
                        }
                        None
                    }
                };
                cursor.skip_whitespace();
                if cursor.current() != Some(b'.') {
                    return Err(cursor.error(NTriplesErrorKind::MissingDot));
                }
            }
        }

        cursor.advance(1);
        cursor.skip_whitespace();
        if cursor.current().map_or(false, |c| c != b'#') {
            return Err(cursor.error(NTriplesErrorKind::JunkAfterDot));
        }
        if let Some(start) = extra_term {
            if self.syntax.max_terms() < 4 {
                return Err(cursor.error_at(NTriplesErrorKind::TooManyTerms, start));
            }
        }

        let resolver = Resolver {
            position: cursor.position(),
            bytes: cursor.into_bytes(),
        };
        Ok(Some(Quad {
            subject: resolver.node(subject)?,
            predicate: resolver.named_node(predicate)?,
            object: resolver.object(object)?,
            graph_name: graph_name.map(|g| resolver.node(g)).transpose()?,
        }))
    }

    fn warn(&mut self, kind: WarningKind, position: TextPosition) {
        let warning = ParseWarning::new(kind, position);
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    fn parse_iri(&mut self, cursor: &mut LineCursor<'_>) -> Result<ScannedTerm, NTriplesError> {
        let start = cursor.offset();
        cursor.advance(1); // <
        let term = scan_term(cursor, Some(b'>'), TermClass::Iri)?;
        if has_bad_iri_characters(cursor.term(term)) {
            return Err(cursor.error_at(
                NTriplesErrorKind::BadIriCharacters(
                    String::from_utf8_lossy(cursor.term(term)).into_owned(),
                ),
                start,
            ));
        }
        let iri = term_str(cursor, term, start)?;
        if is_illegal_ordinal(iri) {
            let warning = WarningKind::IllegalOrdinal {
                iri: iri.to_owned(),
            };
            self.warn(warning, cursor.position_at(start));
        }
        if let Err(error) = validate_absolute_iri(iri) {
            return Err(cursor.error_at(
                NTriplesErrorKind::InvalidIri {
                    iri: iri.to_owned(),
                    error,
                },
                start,
            ));
        }
        Ok(term)
    }

    fn parse_literal(&mut self, cursor: &mut LineCursor<'_>) -> Result<LiteralSpan, NTriplesError> {
        cursor.advance(1); // "
        let value = scan_term(cursor, Some(b'"'), TermClass::QuotedString)?;

        let mut language = None;
        if cursor.current() == Some(b'@') {
            cursor.advance(1);
            if cursor.current().is_none() {
                return Err(cursor.error(NTriplesErrorKind::MissingLanguage));
            }
            let start = cursor.offset();
            let tag = scan_term(cursor, None, TermClass::LanguageTag)?;
            if tag.is_empty() {
                return Err(cursor.error(NTriplesErrorKind::EmptyLanguageTag));
            }
            cursor.term_mut(tag).make_ascii_lowercase();
            let tag_str = term_str(cursor, tag, start)?;
            if let Err(error) = LanguageTag::parse(tag_str) {
                let warning = WarningKind::MalformedLanguageTag {
                    tag: tag_str.to_owned(),
                    reason: error.to_string(),
                };
                self.warn(warning, cursor.position_at(start));
            }
            language = Some(tag);
        }

        let mut datatype = None;
        if cursor.current() == Some(b'^') && cursor.peek(1) == Some(b'^') {
            cursor.advance(2);
            if cursor.current() != Some(b'<') {
                return Err(cursor.error(NTriplesErrorKind::MissingDatatype));
            }
            let start = cursor.offset();
            cursor.advance(1);
            let iri = scan_term(cursor, Some(b'>'), TermClass::Iri)?;
            let iri_str = term_str(cursor, iri, start)?;
            if let Err(error) = validate_absolute_iri(iri_str) {
                return Err(cursor.error_at(
                    NTriplesErrorKind::InvalidDatatypeIri {
                        iri: iri_str.to_owned(),
                        error,
                    },
                    start,
                ));
            }
            datatype = Some(iri);
        }

        if let (Some(tag), Some(_)) = (language, datatype) {
            let warning = WarningKind::LanguageWithDatatype {
                language: String::from_utf8_lossy(cursor.term(tag)).into_owned(),
            };
            self.warn(warning, cursor.position());
            language = None;
        }

        Ok(LiteralSpan {
            value,
            language,
            datatype,
        })
    }
}

/// Checks the first byte of the next term.
fn lookahead(cursor: &LineCursor<'_>, allowed: &[u8], expected: &'static str) -> Result<u8, NTriplesError> {
    match cursor.current() {
        None => Err(cursor.error(NTriplesErrorKind::UnexpectedEndOfLine)),
        Some(c) if allowed.contains(&c) => Ok(c),
        Some(found) => Err(cursor.error(NTriplesErrorKind::UnexpectedByte { found, expected })),
    }
}

fn parse_blank_node(cursor: &mut LineCursor<'_>) -> Result<ScannedTerm, NTriplesError> {
    cursor.advance(1); // _
    if cursor.current() != Some(b':') {
        return Err(cursor.error(NTriplesErrorKind::IllegalBlankNodeId));
    }
    cursor.advance(1);
    let id = scan_term(cursor, None, TermClass::BlankNodeId)?;
    if id.is_empty() {
        return Err(cursor.error(NTriplesErrorKind::MissingBlankNodeId));
    }
    Ok(id)
}

fn term_str<'c>(
    cursor: &'c LineCursor<'_>,
    term: ScannedTerm,
    start: usize,
) -> Result<&'c str, NTriplesError> {
    to_str(cursor.term(term), cursor.position_at(start))
}

fn to_str(bytes: &[u8], position: TextPosition) -> Result<&str, NTriplesError> {
    str::from_utf8(bytes).map_err(|error| {
        NTriplesError::new(
            NTriplesErrorKind::InvalidUtf8(bytes[error.valid_up_to()]),
            position,
        )
    })
}

/// Builds the model terms once the line is completely decoded.
struct Resolver<'a> {
    bytes: &'a [u8],
    position: TextPosition,
}

impl<'a> Resolver<'a> {
    fn str(&self, term: ScannedTerm) -> Result<&'a str, NTriplesError> {
        to_str(&self.bytes[term.start..term.end], self.position)
    }

    fn named_node(&self, term: ScannedTerm) -> Result<NamedNode<'a>, NTriplesError> {
        Ok(NamedNode {
            iri: self.str(term)?,
        })
    }

    fn node(&self, span: NodeSpan) -> Result<NamedOrBlankNode<'a>, NTriplesError> {
        Ok(match span {
            NodeSpan::Iri(iri) => self.named_node(iri)?.into(),
            NodeSpan::Blank(id) => BlankNode { id: self.str(id)? }.into(),
        })
    }

    fn object(&self, span: ObjectSpan) -> Result<Term<'a>, NTriplesError> {
        Ok(match span {
            ObjectSpan::Node(node) => self.node(node)?.into(),
            ObjectSpan::Literal(literal) => {
                let value = self.str(literal.value)?;
                match (literal.datatype, literal.language) {
                    (Some(datatype), _) => Literal::Typed {
                        value,
                        datatype: self.named_node(datatype)?,
                    },
                    (None, Some(language)) => Literal::LanguageTaggedString {
                        value,
                        language: self.str(language)?,
                    },
                    (None, None) => Literal::Simple { value },
                }
                .into()
            }
        })
    }
}
