#![no_main]
use libfuzzer_sys::fuzz_target;
use ntline::{NQuadsParser, NTriplesError};
use ntline_api::model::Quad;
use ntline_api::parser::{PushParser, QuadHandler};

#[derive(Default)]
struct Collect(Vec<String>);

impl QuadHandler for Collect {
    type Error = NTriplesError;

    fn handle_quad(&mut self, quad: Quad<'_>) -> Result<(), NTriplesError> {
        self.0.push(quad.to_string());
        Ok(())
    }
}

fn parse<'a>(chunks: impl Iterator<Item = &'a [u8]>) -> Result<Vec<String>, String> {
    let mut parser = NQuadsParser::new();
    let mut collect = Collect::default();
    for chunk in chunks {
        parser
            .push_chunk(chunk, false, &mut collect)
            .map_err(|e| e.to_string())?;
    }
    parser
        .push_chunk(&[], true, &mut collect)
        .map_err(|e| e.to_string())?;
    Ok(collect.0)
}

// The first byte is the chunk size used for the rest of the input
fuzz_target!(|data: &[u8]| {
    if let Some((size, data)) = data.split_first() {
        let size = usize::from(*size).max(1);
        assert_eq!(parse(data.chunks(size)), parse(Some(data).into_iter()));
    }
});
