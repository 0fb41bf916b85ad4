//! Implementation of chunk incremental [N-Triples](https://www.w3.org/TR/n-triples/) and [N-Quads](https://www.w3.org/TR/n-quads/) parsers.
//!
//! The parsers are fed with byte chunks of any size, split anywhere,
//! and call a [`QuadHandler`](ntline_api::parser::QuadHandler) for each statement.
//! Terms are decoded in place in the parser buffer and lent to the handler.
//!
//! Non fatal problems are reported as warnings to the handler and to the [`log`] facade.
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_qualifications
)]
#![doc(test(attr(deny(warnings))))]

mod error;
mod grammar;
mod iri;
mod line_parser;
mod ntriples;
mod scanner;
mod sniff;
mod syntax;
mod utils;

pub use error::{NTriplesError, NTriplesErrorKind};
pub use line_parser::LineParser;
pub use ntriples::{NQuadsParser, NTriplesParser};
pub use sniff::{guess_syntax, nquads_score, ntriples_score};
pub use syntax::{LineSyntax, NQUADS_DESCRIPTION, NTRIPLES_DESCRIPTION};
