use oxiri::{Iri, IriParseError};

const RDF_ORDINAL_PREFIX: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#_";

/// Characters allowed neither raw nor escaped in an IRI reference.
pub fn is_bad_iri_character(c: u8) -> bool {
    matches!(
        c,
        b'\0'..=b' ' | b'<' | b'>' | b'"' | b'{' | b'}' | b'|' | b'^' | b'`' | b'\\'
    )
}

pub fn has_bad_iri_characters(iri: &[u8]) -> bool {
    iri.iter().copied().any(is_bad_iri_character)
}

/// Returns `true` for `rdf:_N` container membership properties where `N` is not a positive integer.
pub fn is_illegal_ordinal(iri: &str) -> bool {
    match iri.strip_prefix(RDF_ORDINAL_PREFIX) {
        Some(ordinal) => {
            ordinal.is_empty()
                || !ordinal.bytes().all(|c| c.is_ascii_digit())
                || ordinal.parse::<u32>().map_or(true, |n| n == 0)
        }
        None => false,
    }
}

pub fn validate_absolute_iri(iri: &str) -> Result<(), IriParseError> {
    Iri::parse(iri).map(|_| ())
}
