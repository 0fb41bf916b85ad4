use ntline::*;
use ntline_api::model::*;
use ntline_api::parser::*;
use ntline_api::syntax::SyntaxRecognizer;
use std::error::Error;
use std::fmt;
use std::io::{self, Read};

#[derive(Debug)]
enum RecorderError {
    Parse(NTriplesError),
    Io(io::Error),
    Stop,
}

impl fmt::Display for RecorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecorderError::Parse(e) => fmt::Display::fmt(e, f),
            RecorderError::Io(e) => fmt::Display::fmt(e, f),
            RecorderError::Stop => write!(f, "stopped by the handler"),
        }
    }
}

impl Error for RecorderError {}

impl From<NTriplesError> for RecorderError {
    fn from(error: NTriplesError) -> Self {
        RecorderError::Parse(error)
    }
}

impl From<io::Error> for RecorderError {
    fn from(error: io::Error) -> Self {
        RecorderError::Io(error)
    }
}

#[derive(Default)]
struct Recorder {
    quads: Vec<String>,
    graph_names: Vec<Option<String>>,
    events: Vec<GraphEvent>,
    warnings: Vec<ParseWarning>,
    stop_after: Option<usize>,
}

impl QuadHandler for Recorder {
    type Error = RecorderError;

    fn handle_quad(&mut self, quad: Quad<'_>) -> Result<(), RecorderError> {
        if self.stop_after == Some(self.quads.len()) {
            return Err(RecorderError::Stop);
        }
        self.quads.push(quad.to_string());
        self.graph_names.push(quad.graph_name.map(|g| g.to_string()));
        Ok(())
    }

    fn handle_graph_event(&mut self, event: GraphEvent) -> Result<(), RecorderError> {
        self.events.push(event);
        Ok(())
    }

    fn handle_warning(&mut self, warning: &ParseWarning) {
        self.warnings.push(warning.clone());
    }
}

fn parse(parser: &mut impl PushParser<Error = NTriplesError>, data: &str) -> (Recorder, Result<(), RecorderError>) {
    let mut recorder = Recorder::default();
    let result = parser
        .push_chunk(data.as_bytes(), false, &mut recorder)
        .and_then(|()| parser.push_chunk(&[], true, &mut recorder));
    (recorder, result)
}

fn parse_ntriples(data: &str) -> (Recorder, Result<(), RecorderError>) {
    parse(&mut NTriplesParser::new(), data)
}

fn parse_nquads(data: &str) -> (Recorder, Result<(), RecorderError>) {
    parse(&mut NQuadsParser::new(), data)
}

fn parse_error(result: Result<(), RecorderError>) -> NTriplesError {
    match result {
        Err(RecorderError::Parse(error)) => error,
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn single_triple() {
    let (recorder, result) = parse_ntriples(
        "<http://example.com/s> <http://example.com/p> <http://example.com/o> .\n",
    );
    result.unwrap();
    assert_eq!(
        recorder.quads,
        vec!["<http://example.com/s> <http://example.com/p> <http://example.com/o> ."]
    );
    assert_eq!(recorder.graph_names, vec![None]);
    assert_eq!(recorder.events, vec![GraphEvent::Start, GraphEvent::End]);
    assert!(recorder.warnings.is_empty());
}

#[test]
fn quads_with_and_without_graph_name() {
    let (recorder, result) = parse_nquads(
        "<http://example.com/s> <http://example.com/p> <http://example.com/o> <http://example.com/g> .\n\
         _:s <http://example.com/p> \"o\" .\n\
         _:s <http://example.com/p> \"o\" _:g .\n",
    );
    result.unwrap();
    assert_eq!(
        recorder.graph_names,
        vec![
            Some("<http://example.com/g>".to_owned()),
            None,
            Some("_:g".to_owned())
        ]
    );
    assert_eq!(recorder.events, vec![GraphEvent::Start, GraphEvent::End]);
}

#[test]
fn four_terms() {
    let line = "<http://example.com/s> <http://example.com/p> <http://example.com/o> <http://example.com/g> .\n";

    let (recorder, result) = parse_ntriples(line);
    let error = parse_error(result);
    assert!(matches!(error.kind(), NTriplesErrorKind::TooManyTerms));
    assert_eq!(
        error.to_string(),
        "N-Triples only allows 3 terms on line 1 column 69 (byte 69)"
    );
    assert!(recorder.quads.is_empty());

    let (recorder, result) = parse_nquads(line);
    result.unwrap();
    assert_eq!(
        recorder.graph_names,
        vec![Some("<http://example.com/g>".to_owned())]
    );
}

#[test]
fn string_escapes() {
    let mut parser = NTriplesParser::new();
    let mut values = Vec::new();
    parser
        .parse_all(
            r#"<http://example.com/s> <http://example.com/p> "a\nb\tc\\d\"e" .
<http://example.com/s> <http://example.com/p> "A" .
<http://example.com/s> <http://example.com/p> "\U00000041" .
<http://example.com/s> <http://example.com/p> "été" .
"#
            .as_bytes(),
            &mut |quad| -> Result<(), NTriplesError> {
                if let Term::Literal(literal) = quad.object {
                    values.push(literal.value().to_owned());
                }
                Ok(())
            },
        )
        .unwrap();
    assert_eq!(values, vec!["a\nb\tc\\d\"e", "A", "A", "été"]);
}

#[test]
fn iri_escapes() {
    let (recorder, result) = parse_ntriples(
        "<http://example.com/\\u00E9> <http://example.com/p> <http://example.com/\\U0001F600> .\n",
    );
    result.unwrap();
    assert_eq!(
        recorder.quads,
        vec!["<http://example.com/é> <http://example.com/p> <http://example.com/😀> ."]
    );
}

#[test]
fn language_tags_are_lowercased() {
    let mut parser = NTriplesParser::new();
    let mut languages = Vec::new();
    parser
        .parse_all(
            "<http://example.com/s> <http://example.com/p> \"x\"@EN .\n<http://example.com/s> <http://example.com/p> \"x\"@en-GB .\n".as_bytes(),
            &mut |quad| -> Result<(), NTriplesError> {
                if let Term::Literal(literal) = quad.object {
                    languages.push(literal.language().map(ToOwned::to_owned));
                }
                Ok(())
            },
        )
        .unwrap();
    assert_eq!(
        languages,
        vec![Some("en".to_owned()), Some("en-gb".to_owned())]
    );
}

#[test]
fn datatype_wins_over_language() {
    let (recorder, result) = parse_ntriples(
        "<http://example.com/s> <http://example.com/p> \"v\"@en^^<http://example/dt> .\n",
    );
    result.unwrap();
    assert_eq!(
        recorder.quads,
        vec!["<http://example.com/s> <http://example.com/p> \"v\"^^<http://example/dt> ."]
    );
    assert_eq!(recorder.warnings.len(), 1);
    assert_eq!(
        recorder.warnings[0].kind(),
        &WarningKind::LanguageWithDatatype {
            language: "en".to_owned()
        }
    );
}

#[test]
fn malformed_language_tag_is_a_warning() {
    let (recorder, result) = parse_ntriples(
        "<http://example.com/s> <http://example.com/p> \"v\"@abcdefghi .\n",
    );
    result.unwrap();
    assert_eq!(recorder.quads.len(), 1);
    assert_eq!(recorder.warnings.len(), 1);
    assert!(matches!(
        recorder.warnings[0].kind(),
        WarningKind::MalformedLanguageTag { tag, .. } if tag == "abcdefghi"
    ));
}

#[test]
fn blank_lines_and_comments() {
    let (recorder, result) = parse_ntriples("\n   \n# a comment\r\n\t# another one\r\r\n");
    result.unwrap();
    assert!(recorder.quads.is_empty());
    assert!(recorder.events.is_empty());

    let (recorder, result) = parse_nquads("");
    result.unwrap();
    assert!(recorder.events.is_empty());
}

#[test]
fn comment_after_dot() {
    let (recorder, result) = parse_ntriples(
        "<http://example.com/s> <http://example.com/p> _:o . # trailing comment\n",
    );
    result.unwrap();
    assert_eq!(recorder.quads.len(), 1);
}

#[test]
fn unterminated_iri() {
    let (recorder, result) = parse_ntriples(
        "# first line\n<http://example.com/s> <http://example.com/p> <http://example.com/o .\n",
    );
    let error = parse_error(result);
    assert_eq!(
        error.to_string(),
        "missing terminating '>' before end of line on line 2 column 69 (byte 82)"
    );
    assert_eq!(
        error.textual_position(),
        Some(TextPosition::new(2, 69, 82))
    );
    assert!(recorder.events.is_empty());
}

#[test]
fn junk_after_dot() {
    let (_, result) = parse_ntriples(
        "<http://example.com/s> <http://example.com/p> <http://example.com/o> . junk\n",
    );
    assert!(matches!(
        parse_error(result).kind(),
        NTriplesErrorKind::JunkAfterDot
    ));
}

#[test]
fn junk_at_end_of_input() {
    let (recorder, result) = parse_ntriples(
        "<http://example.com/s> <http://example.com/p> <http://example.com/o> .\n<http://example.com/s> <http://example.com/p> <http://example.com/o> .",
    );
    let error = parse_error(result);
    assert!(matches!(error.kind(), NTriplesErrorKind::JunkAtEndOfInput));
    assert_eq!(error.textual_position(), Some(TextPosition::new(2, 0, 71)));
    assert_eq!(recorder.quads.len(), 1);
    // the default graph is not closed on failure
    assert_eq!(recorder.events, vec![GraphEvent::Start]);
}

#[test]
fn literal_graph_name_is_dropped() {
    let (recorder, result) = parse_nquads(
        "<http://example.com/s> <http://example.com/p> <http://example.com/o> \"g\" .\n\
         <http://example.com/s> <http://example.com/p> <http://example.com/o> \"g\"@en .\n",
    );
    result.unwrap();
    assert_eq!(recorder.graph_names, vec![None, None]);
    assert_eq!(recorder.warnings.len(), 1);
    assert_eq!(recorder.warnings[0].kind(), &WarningKind::LiteralGraphName);
    assert_eq!(
        recorder.warnings[0].position(),
        TextPosition::new(1, 69, 69)
    );

    let (_, result) = parse_ntriples(
        "<http://example.com/s> <http://example.com/p> <http://example.com/o> \"g\" .\n",
    );
    assert!(matches!(
        parse_error(result).kind(),
        NTriplesErrorKind::UnexpectedByte { found: b'"', .. }
    ));
}

#[test]
fn ordinal_warnings() {
    let (recorder, result) = parse_ntriples(
        "_:l <http://www.w3.org/1999/02/22-rdf-syntax-ns#_1> _:a .\n\
         _:l <http://www.w3.org/1999/02/22-rdf-syntax-ns#_0> _:b .\n",
    );
    result.unwrap();
    assert_eq!(recorder.quads.len(), 2);
    assert_eq!(recorder.warnings.len(), 1);
    assert_eq!(recorder.warnings[0].position().line_number(), 2);
    assert_eq!(
        recorder.warnings[0].to_string(),
        "illegal ordinal value in property 'http://www.w3.org/1999/02/22-rdf-syntax-ns#_0' on line 2 column 4 (byte 62)"
    );
}

#[test]
fn relative_iris_are_errors() {
    let (_, result) = parse_ntriples("<s> <http://example.com/p> <http://example.com/o> .\n");
    assert!(matches!(
        parse_error(result).kind(),
        NTriplesErrorKind::InvalidIri { .. }
    ));
}

#[test]
fn invalid_utf8() {
    let mut parser = NTriplesParser::new();
    let mut recorder = Recorder::default();
    let error = parser
        .push_chunk(
            b"<http://example.com/s> <http://example.com/p> \"\xFF\" .\n",
            false,
            &mut recorder,
        )
        .unwrap_err();
    assert!(matches!(
        parse_error(Err(error)).kind(),
        NTriplesErrorKind::InvalidUtf8(0xFF)
    ));
}

#[test]
fn handler_error_kills_the_session() {
    let mut parser = NTriplesParser::new();
    let mut recorder = Recorder {
        stop_after: Some(1),
        ..Recorder::default()
    };
    let result = parser.push_chunk(
        b"_:a <http://example.com/p> _:b .\n_:a <http://example.com/p> _:c .\n_:a <http://example.com/p> _:d .\n",
        false,
        &mut recorder,
    );
    assert!(matches!(result, Err(RecorderError::Stop)));
    assert_eq!(recorder.quads.len(), 1);
    assert!(parser.is_end());

    let error = parse_error(parser.push_chunk(b"", true, &mut recorder));
    assert!(matches!(error.kind(), NTriplesErrorKind::SessionTerminated));
    assert_eq!(recorder.events, vec![GraphEvent::Start]);
}

#[test]
fn positions_count_crlf_as_one_break() {
    let (_, result) = parse_ntriples(
        "_:a <http://example.com/p> _:b .\r\n_:a <http://example.com/p> _:b .\r\n_:a _:p _:b .\r\n",
    );
    let error = parse_error(result);
    assert_eq!(error.textual_position(), Some(TextPosition::new(3, 4, 72)));
}

/// Gives its content one byte at a time.
struct SlowRead<'a>(&'a [u8]);

impl Read for SlowRead<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match (self.0.split_first(), buf.first_mut()) {
            (Some((first, rest)), Some(target)) => {
                *target = *first;
                self.0 = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

#[test]
fn parse_read_with_tiny_reads() {
    let data = "<http://example.com/s> <http://example.com/p> \"caf\\u00E9 \u{1F600}\"@fr .\r\n_:s <http://example.com/p> _:o <http://example.com/g> .\n";
    let mut parser = NQuadsParser::new();
    let mut recorder = Recorder::default();
    parser
        .parse_read(SlowRead(data.as_bytes()), &mut recorder)
        .unwrap();
    assert_eq!(
        recorder.quads,
        vec![
            "<http://example.com/s> <http://example.com/p> \"café \u{1F600}\"@fr .",
            "_:s <http://example.com/p> _:o <http://example.com/g> ."
        ]
    );
    assert_eq!(recorder.events, vec![GraphEvent::Start, GraphEvent::End]);
    assert!(parser.is_end());
}

#[test]
fn read_errors_are_forwarded() {
    struct FailingRead;

    impl Read for FailingRead {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    let mut recorder = Recorder::default();
    let result = NTriplesParser::new().parse_read(FailingRead, &mut recorder);
    assert!(matches!(result, Err(RecorderError::Io(_))));
}

#[test]
fn syntax_recognition() {
    assert_eq!(NTriplesParser::DESCRIPTION.label, "N-Triples");
    assert_eq!(NQuadsParser::DESCRIPTION.name(), "nquads");
    assert_eq!(
        NTriplesParser::DESCRIPTION.media_type_quality("application/n-triples"),
        Some(10)
    );
    let sample = b"<http://example.com/s> <http://example.com/p> <http://example.com/o> .\n<http://example.com/s> <http://example.com/p> \"o\" .\n";
    assert_eq!(NTriplesParser::recognize_syntax(sample, None, None), 8);
    assert_eq!(NQuadsParser::recognize_syntax(sample, None, None), 9);
    assert_eq!(
        NTriplesParser::recognize_syntax(b"", Some("nt"), None),
        8
    );
    assert_eq!(guess_syntax(sample, Some("nq"), None), Some(LineSyntax::NQuads));
}
