//! Application-level flavor model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::transfer::mime::MimeType;

/// Text subtypes whose payload encoding is controlled by a `charset`
/// parameter. Other `text/*` subtypes either fix their encoding or are not
/// textual at the byte level.
const CHARSET_SUBTYPES: &[&str] = &[
    "plain",
    "html",
    "xml",
    "richtext",
    "enriched",
    "sgml",
    "tab-separated-values",
    "uri-list",
];

/// How the application consumes the data behind a flavor.
///
/// `Bytes` and `ByteStream` mean the payload needs no structural translation
/// and can be handed over verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// A raw byte array or buffer.
    Bytes,
    /// An incrementally read byte stream.
    ByteStream,
    /// A decoded text string.
    Text,
    /// A decoded in-memory image.
    Image,
}

/// An application-level descriptor of a data representation: a MIME type
/// plus the shape the application consumes it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    mime: MimeType,
    representation: Representation,
}

impl Flavor {
    pub fn new(mime: MimeType, representation: Representation) -> Self {
        Self {
            mime,
            representation,
        }
    }

    /// The abstract image flavor: "any decodable image", independent of
    /// encoded format.
    pub fn image() -> Self {
        Self::new(MimeType::new("image", "x-raster"), Representation::Image)
    }

    /// The generic string flavor. Semantically equivalent to the standard
    /// `text/plain` MIME type during negotiation.
    pub fn string() -> Self {
        Self::new(MimeType::new("application", "x-string"), Representation::Text)
    }

    pub fn text_plain(charset: Option<&str>) -> Self {
        let mut mime = MimeType::new("text", "plain");
        if let Some(charset) = charset {
            mime = mime.with_param("charset", charset);
        }
        Self::new(mime, Representation::ByteStream)
    }

    /// The flavor for a parsed native MIME type. Consumed as a byte stream
    /// by default.
    pub fn from_mime(mime: MimeType) -> Self {
        Self::new(mime, Representation::ByteStream)
    }

    pub fn mime(&self) -> &MimeType {
        &self.mime
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn base_type(&self) -> String {
        self.mime.base_type()
    }

    pub fn charset(&self) -> Option<&str> {
        self.mime.charset()
    }

    pub fn is_abstract_image(&self) -> bool {
        self.representation == Representation::Image
            && self.mime.matches_base("image", "x-raster")
    }

    pub fn is_string(&self) -> bool {
        self.representation == Representation::Text
            && self.mime.matches_base("application", "x-string")
    }

    /// True when the payload needs no structural translation before it is
    /// handed to the application.
    pub fn is_byte_oriented(&self) -> bool {
        matches!(
            self.representation,
            Representation::Bytes | Representation::ByteStream
        )
    }

    /// True for flavors whose textual payload encoding is selected by a
    /// `charset` parameter: the generic string flavor, and `text/*` types
    /// with a charset-capable subtype.
    pub fn is_charset_text_type(&self) -> bool {
        self.is_string()
            || (self.mime.primary() == "text" && subtype_supports_charset(&self.mime))
    }
}

/// Whether a `text/*` subtype interprets the `charset` parameter. An
/// explicit charset parameter on an unknown subtype counts as support.
pub(crate) fn subtype_supports_charset(mime: &MimeType) -> bool {
    CHARSET_SUBTYPES.contains(&mime.sub()) || mime.charset().is_some()
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime)
    }
}

/// One entry of an ordered candidate list produced by negotiation.
///
/// Text natives map to raw MIME strings instead of structured flavors so the
/// caller can generate one variant per supported character encoding later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlavorCandidate {
    Mime(String),
    Flavor(Flavor),
}
