use crate::error::{NTriplesError, NTriplesErrorKind};
use crate::grammar::LineGrammar;
use crate::syntax::LineSyntax;
use log::{debug, trace};
use ntline_api::parser::{GraphEvent, PushParser, QuadHandler, TextPosition};

/// A chunk incremental parser of line based RDF syntaxes.
///
/// Bytes are accumulated until a line terminator (`\n`, `\r` or `\r\n`) is found.
/// Each complete line is then parsed and decoded in place in the accumulation buffer,
/// so the memory consumption is linear in the size of the longest line.
///
/// A final call to [`PushParser::push_chunk`] with `is_end` set is required
/// to check that no partial line is left and to close the default graph.
///
/// ```
/// use ntline::{LineParser, LineSyntax};
/// use ntline_api::parser::PushParser;
///
/// let mut parser = LineParser::new(LineSyntax::NQuads);
/// let mut count = 0;
/// parser.parse_all(
///     b"<http://example.com/s> <http://example.com/p> \"o\" <http://example.com/g> .\n".as_ref(),
///     &mut |quad| -> Result<(), ntline::NTriplesError> {
///         assert!(quad.graph_name.is_some());
///         count += 1;
///         Ok(())
///     },
/// )?;
/// assert_eq!(count, 1);
/// # Result::<_, ntline::NTriplesError>::Ok(())
/// ```
#[derive(Debug)]
pub struct LineParser {
    grammar: LineGrammar,
    buffer: Vec<u8>,
    // Length of the prefix of `buffer` known to contain no line terminator
    scanned: usize,
    // The last line ended with \r: a \n right after it belongs to the same break
    skip_line_feed: bool,
    line_number: u64,
    // Document offset of `buffer[0]`
    byte_offset: u64,
    emitted_default_graph: bool,
    state: State,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
enum State {
    Running,
    Finished,
    Failed,
}

impl LineParser {
    pub fn new(syntax: LineSyntax) -> Self {
        Self {
            grammar: LineGrammar::new(syntax),
            buffer: Vec::new(),
            scanned: 0,
            skip_line_feed: false,
            line_number: 1,
            byte_offset: 0,
            emitted_default_graph: false,
            state: State::Running,
        }
    }

    pub fn syntax(&self) -> LineSyntax {
        self.grammar.syntax()
    }

    /// Position of the first byte not parsed yet.
    pub fn position(&self) -> TextPosition {
        TextPosition::new(self.line_number, 0, self.byte_offset)
    }

    fn parse_chunk<H: QuadHandler>(
        &mut self,
        chunk: &[u8],
        is_end: bool,
        handler: &mut H,
    ) -> Result<(), H::Error>
    where
        H::Error: From<NTriplesError>,
    {
        if self.buffer.try_reserve(chunk.len()).is_err() {
            return Err(NTriplesError::new(NTriplesErrorKind::OutOfMemory, self.position()).into());
        }
        self.buffer.extend_from_slice(chunk);

        let mut start = 0;
        loop {
            if self.skip_line_feed && start < self.buffer.len() {
                self.skip_line_feed = false;
                if self.buffer[start] == b'\n' {
                    start += 1;
                }
            }
            let search_from = start.max(self.scanned);
            let end = match self.buffer[search_from..]
                .iter()
                .position(|c| *c == b'\n' || *c == b'\r')
            {
                Some(i) => search_from + i,
                None => {
                    self.scanned = self.buffer.len();
                    break;
                }
            };
            self.skip_line_feed = self.buffer[end] == b'\r';
            self.parse_line(start, end, handler)?;
            start = end + 1;
        }

        if start > 0 {
            self.buffer.drain(..start);
            self.scanned -= start;
            self.byte_offset += start as u64;
            debug!(
                "collapsed line buffer to {} bytes at {}",
                self.buffer.len(),
                self.position()
            );
        }

        if is_end {
            self.state = State::Finished;
            if !self.buffer.is_empty() {
                return Err(
                    NTriplesError::new(NTriplesErrorKind::JunkAtEndOfInput, self.position()).into(),
                );
            }
            if self.emitted_default_graph {
                handler.handle_graph_event(GraphEvent::End)?;
            }
            debug!("end of input after {} lines", self.line_number - 1);
        }
        Ok(())
    }

    fn parse_line<H: QuadHandler>(
        &mut self,
        start: usize,
        end: usize,
        handler: &mut H,
    ) -> Result<(), H::Error>
    where
        H::Error: From<NTriplesError>,
    {
        let line_number = self.line_number;
        self.line_number += 1;
        trace!("parsing line {} ({} bytes)", line_number, end - start);

        let result = self.grammar.parse_line(
            &mut self.buffer[start..end],
            line_number,
            self.byte_offset + start as u64,
        );
        for warning in self.grammar.drain_warnings() {
            handler.handle_warning(&warning);
        }
        if let Some(quad) = result? {
            if !self.emitted_default_graph {
                self.emitted_default_graph = true;
                handler.handle_graph_event(GraphEvent::Start)?;
            }
            handler.handle_quad(quad)?;
        }
        Ok(())
    }
}

impl PushParser for LineParser {
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
        if self.state != State::Running {
            return Err(
                NTriplesError::new(NTriplesErrorKind::SessionTerminated, self.position()).into(),
            );
        }
        let result = self.parse_chunk(chunk, is_end, handler);
        if result.is_err() {
            self.state = State::Failed;
            self.buffer = Vec::new();
            self.scanned = 0;
        }
        result
    }

    fn is_end(&self) -> bool {
        self.state != State::Running
    }
}
