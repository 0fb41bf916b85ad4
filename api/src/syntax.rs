//! Static descriptions of RDF syntaxes and content negotiation helpers.

/// A MIME type accepted by a syntax with its quality, from 1 (weakest) to 10.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct MediaType {
    pub name: &'static str,
    pub quality: u8,
}

/// Names, MIME types and identifying URIs of a syntax.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct SyntaxDescription {
    /// Short names, the first one being the canonical one.
    pub names: &'static [&'static str],
    /// Human readable label.
    pub label: &'static str,
    pub media_types: &'static [MediaType],
    /// URIs identifying the syntax, the first one being the canonical one.
    pub uri_strings: &'static [&'static str],
}

impl SyntaxDescription {
    pub fn name(&self) -> &'static str {
        self.names.first().copied().unwrap_or(self.label)
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    pub fn has_uri(&self, uri: &str) -> bool {
        self.uri_strings.iter().any(|u| *u == uri)
    }

    /// Returns the quality of a MIME type for this syntax.
    ///
    /// Parameters like `charset` are ignored and the comparison is ASCII case insensitive.
    ///
    /// ```
    /// use ntline_api::syntax::{MediaType, SyntaxDescription};
    ///
    /// const DESCRIPTION: SyntaxDescription = SyntaxDescription {
    ///     names: &["ntriples"],
    ///     label: "N-Triples",
    ///     media_types: &[MediaType { name: "application/n-triples", quality: 10 }],
    ///     uri_strings: &[],
    /// };
    /// assert_eq!(DESCRIPTION.media_type_quality("application/N-Triples; charset=utf-8"), Some(10));
    /// assert_eq!(DESCRIPTION.media_type_quality("text/turtle"), None);
    /// ```
    pub fn media_type_quality(&self, media_type: &str) -> Option<u8> {
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        self.media_types
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(essence))
            .map(|t| t.quality)
    }
}

/// A syntax family able to score how likely some content is written in it.
pub trait SyntaxRecognizer {
    const DESCRIPTION: SyntaxDescription;

    /// Scores a content sample, its file name suffix and its MIME type.
    ///
    /// 0 means "not this syntax", higher is more likely.
    fn recognize_syntax(sample: &[u8], suffix: Option<&str>, media_type: Option<&str>) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: SyntaxDescription = SyntaxDescription {
        names: &["plain", "txt"],
        label: "Plain",
        media_types: &[
            MediaType {
                name: "text/plain",
                quality: 1,
            },
            MediaType {
                name: "application/x-plain",
                quality: 10,
            },
        ],
        uri_strings: &["http://example.com/plain"],
    };

    #[test]
    fn lookups() {
        assert_eq!(PLAIN.name(), "plain");
        assert!(PLAIN.has_name("TXT"));
        assert!(!PLAIN.has_name("nt"));
        assert!(PLAIN.has_uri("http://example.com/plain"));
        assert_eq!(PLAIN.media_type_quality(" text/plain ;q=0.5"), Some(1));
        assert_eq!(PLAIN.media_type_quality("application/x-plain"), Some(10));
    }
}
