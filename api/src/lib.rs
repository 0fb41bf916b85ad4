//! This crate provides basic interfaces and data structures for building push based RDF parsers.
//!
//! It is currently used by the [`ntline`](https://docs.rs/ntline/) crate.
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

pub mod feature;
pub mod model;
pub mod parser;
pub mod syntax;
