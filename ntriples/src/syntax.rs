use ntline_api::syntax::{MediaType, SyntaxDescription};

/// The line based syntax family being parsed.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum LineSyntax {
    /// [N-Triples](https://www.w3.org/TR/n-triples/): exactly 3 terms per line.
    NTriples,
    /// [N-Quads](https://www.w3.org/TR/n-quads/): 3 terms and an optional graph name per line.
    NQuads,
}

pub const NTRIPLES_DESCRIPTION: SyntaxDescription = SyntaxDescription {
    names: &["ntriples"],
    label: "N-Triples",
    media_types: &[
        MediaType {
            name: "application/n-triples",
            quality: 10,
        },
        MediaType {
            name: "text/plain",
            quality: 1,
        },
    ],
    uri_strings: &[
        "http://www.w3.org/ns/formats/N-Triples",
        "http://www.w3.org/TR/rdf-testcases/#ntriples",
    ],
};

pub const NQUADS_DESCRIPTION: SyntaxDescription = SyntaxDescription {
    names: &["nquads"],
    label: "N-Quads",
    media_types: &[MediaType {
        name: "text/x-nquads",
        quality: 10,
    }],
    uri_strings: &["http://sw.deri.org/2008/07/n-quads/"],
};

impl LineSyntax {
    const ALL: [LineSyntax; 2] = [LineSyntax::NTriples, LineSyntax::NQuads];

    pub fn description(self) -> SyntaxDescription {
        match self {
            LineSyntax::NTriples => NTRIPLES_DESCRIPTION,
            LineSyntax::NQuads => NQUADS_DESCRIPTION,
        }
    }

    /// Maximal number of terms of a statement.
    pub fn max_terms(self) -> usize {
        match self {
            LineSyntax::NTriples => 3,
            LineSyntax::NQuads => 4,
        }
    }

    /// Looks up a syntax from one of its short names, like `ntriples`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.description().has_name(name))
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.description().has_uri(uri))
    }

    /// Looks up the syntax with the best quality for a MIME type.
    ///
    /// ```
    /// use ntline::LineSyntax;
    ///
    /// assert_eq!(LineSyntax::from_media_type("application/n-triples"), Some(LineSyntax::NTriples));
    /// assert_eq!(LineSyntax::from_media_type("text/x-nquads; charset=utf-8"), Some(LineSyntax::NQuads));
    /// assert_eq!(LineSyntax::from_media_type("text/turtle"), None);
    /// ```
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter_map(|s| Some((s.description().media_type_quality(media_type)?, s)))
            .max_by_key(|(quality, _)| *quality)
            .map(|(_, s)| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups() {
        assert_eq!(LineSyntax::from_name("NTriples"), Some(LineSyntax::NTriples));
        assert_eq!(LineSyntax::from_name("nquads"), Some(LineSyntax::NQuads));
        assert_eq!(LineSyntax::from_name("turtle"), None);
        assert_eq!(
            LineSyntax::from_uri("http://sw.deri.org/2008/07/n-quads/"),
            Some(LineSyntax::NQuads)
        );
        assert_eq!(
            LineSyntax::from_uri("http://www.w3.org/TR/rdf-testcases/#ntriples"),
            Some(LineSyntax::NTriples)
        );
        assert_eq!(
            LineSyntax::from_media_type("text/plain"),
            Some(LineSyntax::NTriples)
        );
    }

    #[test]
    fn descriptions() {
        assert_eq!(LineSyntax::NTriples.description().label, "N-Triples");
        assert_eq!(LineSyntax::NQuads.description().name(), "nquads");
        assert_eq!(LineSyntax::NTriples.max_terms(), 3);
        assert_eq!(LineSyntax::NQuads.max_terms(), 4);
    }
}
