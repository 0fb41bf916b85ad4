//! Scoring of content samples, file name suffixes and MIME types.

use crate::syntax::LineSyntax;
use crate::utils::contains_subslice;

pub fn ntriples_score(sample: &[u8], suffix: Option<&str>, media_type: Option<&str>) -> u32 {
    let mut score = 0;
    match suffix {
        Some("nt") => score = 8,
        Some("ttl") | Some("n3") => return 0,
        _ => (),
    }
    if media_type.map_or(false, |t| t.contains("ntriples")) {
        score += 6;
    }
    if sample.is_empty() {
        return score;
    }
    if contains_subslice(sample, b"@prefix ") {
        return 0;
    }
    if sample.starts_with(b"<http://") {
        score += 1;
    }
    if sample.starts_with(b"_:") {
        score += 1;
    }
    if contains_subslice(sample, b"\n<http://") || contains_subslice(sample, b"\r<http://") {
        score += 6;
        if contains_subslice(sample, b"> <http://") {
            score += 1;
        }
    } else if contains_subslice(sample, b"> <http://") {
        score += 3;
    } else if contains_subslice(sample, b"> <") {
        score += 2;
        if contains_subslice(sample, b"> \"") {
            score += 1;
        }
    }
    score
}

pub fn nquads_score(sample: &[u8], suffix: Option<&str>, media_type: Option<&str>) -> u32 {
    let mut score = 0;
    match suffix {
        Some("nq") => score = 2,
        Some("nt") | Some("ttl") | Some("n3") => return 0,
        _ => (),
    }
    if media_type.map_or(false, |t| t.contains("nquads")) {
        score += 2;
    }
    let ntriples = ntriples_score(sample, suffix, media_type);
    if ntriples > 0 {
        score += ntriples + 1;
    }
    score
}

/// Returns the most likely syntax of some content, if any scores above zero.
///
/// N-Quads, being a superset of N-Triples, wins ties.
///
/// ```
/// use ntline::{guess_syntax, LineSyntax};
///
/// assert_eq!(guess_syntax(b"", Some("nt"), None), Some(LineSyntax::NTriples));
/// assert_eq!(guess_syntax(b"", Some("nq"), None), Some(LineSyntax::NQuads));
/// assert_eq!(guess_syntax(b"@prefix ex: <http://example.com/> .", None, None), None);
/// ```
pub fn guess_syntax(
    sample: &[u8],
    suffix: Option<&str>,
    media_type: Option<&str>,
) -> Option<LineSyntax> {
    let ntriples = ntriples_score(sample, suffix, media_type);
    let nquads = nquads_score(sample, suffix, media_type);
    if ntriples == 0 && nquads == 0 {
        None
    } else if ntriples > nquads {
        Some(LineSyntax::NTriples)
    } else {
        Some(LineSyntax::NQuads)
    }
}
