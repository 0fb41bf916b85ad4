#![no_main]
use libfuzzer_sys::fuzz_target;
use ntline::{NQuadsParser, NTriplesError};
use ntline_api::parser::PushParser;

fuzz_target!(|data: &[u8]| {
    let _ = NQuadsParser::new().parse_all(data, &mut |_| Ok(()) as Result<(), NTriplesError>);
});
