//! The static table of parser and serializer features.
//!
//! Features are identified by an enumeration, a short name and a URI made of
//! [`FEATURE_URI_PREFIX`] followed by the name.
//! The table is immutable: all lookups are pure functions.

/// Prefix of all feature URIs.
pub const FEATURE_URI_PREFIX: &str = "http://feature.librdf.org/raptor-";

#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub enum Feature {
    Scanning,
    AssumeIsRdf,
    AllowNonNsAttributes,
    AllowOtherParsetypes,
    AllowBagId,
    AllowRdfTypeRdfList,
    NormalizeLanguage,
    NonNfcFatal,
    WarnOtherParseTypes,
    CheckRdfId,
    RelativeUris,
    StartUri,
    WriterAutoIndent,
    WriterAutoEmpty,
    WriterIndentWidth,
    WriterXmlVersion,
    WriterXmlDeclaration,
    NoNet,
    ResourceBorder,
    LiteralBorder,
    BnodeBorder,
    ResourceFill,
    LiteralFill,
    BnodeFill,
    HtmlTagSoup,
    Microformats,
    HtmlLink,
    WwwTimeout,
    WriteBaseUri,
    WwwHttpCacheControl,
    WwwHttpUserAgent,
    JsonCallback,
    JsonExtraData,
    RssTriples,
    AtomEntryUri,
    PrefixElements,
}

/// The component a feature applies to.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum FeatureArea {
    Parser,
    Serializer,
    XmlWriter,
}

/// The type of the value of a feature.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum FeatureValueType {
    Boolean,
    Integer,
    String,
    Uri,
}

#[derive(Debug)]
struct FeatureDescription {
    feature: Feature,
    areas: &'static [FeatureArea],
    value_type: FeatureValueType,
    name: &'static str,
    label: &'static str,
}

const PARSER: &[FeatureArea] = &[FeatureArea::Parser];
const SERIALIZER: &[FeatureArea] = &[FeatureArea::Serializer];
const XML_WRITER: &[FeatureArea] = &[FeatureArea::XmlWriter];
const SERIALIZER_AND_XML_WRITER: &[FeatureArea] =
    &[FeatureArea::Serializer, FeatureArea::XmlWriter];

macro_rules! feature {
    ($feature:ident, $areas:expr, $value_type:ident, $name:expr, $label:expr) => {
        FeatureDescription {
            feature: Feature::$feature,
            areas: $areas,
            value_type: FeatureValueType::$value_type,
            name: $name,
            label: $label,
        }
    };
}

// Sorted like the `Feature` enumeration: `FEATURES[f as usize].feature == f`
static FEATURES: [FeatureDescription; 36] = [
    feature!(Scanning, PARSER, Boolean, "scanForRDF", "Scan for rdf:RDF in XML content"),
    feature!(AssumeIsRdf, PARSER, Boolean, "assumeIsRDF", "Assume content is RDF/XML, don't require rdf:RDF"),
    feature!(AllowNonNsAttributes, PARSER, Boolean, "allowNonNsAttributes", "Allow bare 'name' rather than namespaced 'rdf:name'"),
    feature!(AllowOtherParsetypes, PARSER, Boolean, "allowOtherParsetypes", "Allow user-defined rdf:parseType values"),
    feature!(AllowBagId, PARSER, Boolean, "allowBagID", "Allow rdf:bagID"),
    feature!(AllowRdfTypeRdfList, PARSER, Boolean, "allowRDFtypeRDFlist", "Generate the collection rdf:type rdf:List triple"),
    feature!(NormalizeLanguage, PARSER, Boolean, "normalizeLanguage", "Normalize xml:lang values to lowercase"),
    feature!(NonNfcFatal, PARSER, Boolean, "nonNFCfatal", "Make non-NFC literals cause a fatal error"),
    feature!(WarnOtherParseTypes, PARSER, Boolean, "warnOtherParseTypes", "Warn about unknown rdf:parseType values"),
    feature!(CheckRdfId, PARSER, Boolean, "checkRdfID", "Check rdf:ID values for duplicates"),
    feature!(RelativeUris, SERIALIZER, Boolean, "relativeURIs", "Write relative URIs wherever possible in serializing."),
    feature!(StartUri, SERIALIZER, Uri, "startURI", "Start URI for serializing to use."),
    feature!(WriterAutoIndent, XML_WRITER, Boolean, "autoIndent", "Automatically indent elements."),
    feature!(WriterAutoEmpty, XML_WRITER, Boolean, "autoEmpty", "Automatically detect and abbreviate empty elements."),
    feature!(WriterIndentWidth, XML_WRITER, Integer, "indentWidth", "Number of spaces to indent."),
    feature!(WriterXmlVersion, SERIALIZER_AND_XML_WRITER, Integer, "xmlVersion", "XML version to write."),
    feature!(WriterXmlDeclaration, SERIALIZER_AND_XML_WRITER, Boolean, "xmlDeclaration", "Write XML declaration."),
    feature!(NoNet, PARSER, Boolean, "noNet", "Deny network requests."),
    feature!(ResourceBorder, SERIALIZER, String, "resourceBorder", "DOT serializer resource border color"),
    feature!(LiteralBorder, SERIALIZER, String, "literalBorder", "DOT serializer literal border color"),
    feature!(BnodeBorder, SERIALIZER, String, "bnodeBorder", "DOT serializer blank node border color"),
    feature!(ResourceFill, SERIALIZER, String, "resourceFill", "DOT serializer resource fill color"),
    feature!(LiteralFill, SERIALIZER, String, "literalFill", "DOT serializer literal fill color"),
    feature!(BnodeFill, SERIALIZER, String, "bnodeFill", "DOT serializer blank node fill color"),
    feature!(HtmlTagSoup, PARSER, Boolean, "htmlTagSoup", "HTML parsing uses a lax HTML parser"),
    feature!(Microformats, PARSER, Boolean, "microformats", "GRDDL parsing looks for microformats"),
    feature!(HtmlLink, PARSER, Boolean, "htmlLink", "GRDDL parsing looks for <link type=\"application/rdf+xml\">"),
    feature!(WwwTimeout, PARSER, Integer, "wwwTimeout", "Set internal WWW URI retrieval timeout"),
    feature!(WriteBaseUri, SERIALIZER, Boolean, "writeBaseURI", "Write @base / xml:base directive in serializer output"),
    feature!(WwwHttpCacheControl, PARSER, String, "wwwHttpCacheControl", "Set HTTP Cache-Control: header value"),
    feature!(WwwHttpUserAgent, PARSER, String, "wwwHttpUserAgent", "Set HTTP User-Agent: header value"),
    feature!(JsonCallback, SERIALIZER, String, "jsonCallback", "JSON serializer callback"),
    feature!(JsonExtraData, SERIALIZER, String, "jsonExtraData", "JSON serializer extra data"),
    feature!(RssTriples, SERIALIZER, String, "rssTriples", "Atom/RSS serializer writes extra RDF triples"),
    feature!(AtomEntryUri, SERIALIZER, Uri, "atomEntryUri", "Atom serializer Entry URI"),
    feature!(PrefixElements, SERIALIZER, Boolean, "prefixElements", "Atom/RSS serializers write namespace-prefixed elements"),
];

impl Feature {
    /// Number of known features.
    pub fn count() -> usize {
        FEATURES.len()
    }

    /// Iterates over all the features in declaration order.
    pub fn all() -> impl Iterator<Item = Feature> {
        FEATURES.iter().map(|d| d.feature)
    }

    fn description(self) -> &'static FeatureDescription {
        &FEATURES[self as usize]
    }

    /// The short name, like `normalizeLanguage`.
    pub fn name(self) -> &'static str {
        self.description().name
    }

    pub fn label(self) -> &'static str {
        self.description().label
    }

    pub fn value_type(self) -> FeatureValueType {
        self.description().value_type
    }

    pub fn applies_to(self, area: FeatureArea) -> bool {
        self.description().areas.contains(&area)
    }

    /// The feature URI, like `http://feature.librdf.org/raptor-normalizeLanguage`.
    pub fn uri(self) -> String {
        format!("{}{}", FEATURE_URI_PREFIX, self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        FEATURES.iter().find(|d| d.name == name).map(|d| d.feature)
    }

    /// Looks up a feature from its URI.
    ///
    /// ```
    /// use ntline_api::feature::Feature;
    ///
    /// assert_eq!(
    ///     Feature::from_uri("http://feature.librdf.org/raptor-noNet"),
    ///     Some(Feature::NoNet)
    /// );
    /// assert_eq!(Feature::from_uri("http://example.com/noNet"), None);
    /// ```
    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::from_name(uri.strip_prefix(FEATURE_URI_PREFIX)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_like_the_enumeration() {
        for (i, description) in FEATURES.iter().enumerate() {
            assert_eq!(description.feature as usize, i, "{}", description.name);
        }
        assert_eq!(Feature::count(), 36);
        assert_eq!(Feature::all().count(), Feature::count());
    }

    #[test]
    fn uri_roundtrip() {
        for feature in Feature::all() {
            assert_eq!(Feature::from_uri(&feature.uri()), Some(feature));
        }
    }

    #[test]
    fn metadata() {
        assert_eq!(Feature::NormalizeLanguage.name(), "normalizeLanguage");
        assert_eq!(
            Feature::NormalizeLanguage.label(),
            "Normalize xml:lang values to lowercase"
        );
        assert_eq!(Feature::StartUri.value_type(), FeatureValueType::Uri);
        assert_eq!(Feature::JsonCallback.value_type(), FeatureValueType::String);
        assert!(Feature::WriterXmlVersion.applies_to(FeatureArea::Serializer));
        assert!(Feature::WriterXmlVersion.applies_to(FeatureArea::XmlWriter));
        assert!(!Feature::WriterXmlVersion.applies_to(FeatureArea::Parser));
        assert_eq!(Feature::from_name("unknownFeature"), None);
    }
}
