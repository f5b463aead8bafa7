//! Native format classification.

use serde::{Deserialize, Serialize};

use crate::transfer::flavor::subtype_supports_charset;
use crate::transfer::mime::MimeType;
use crate::transfer::negotiator::Negotiator;
use crate::transfer::NativeFormatId;

/// The broad category of data a native format carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatClass {
    Text,
    Image,
    FileList,
    Other,
}

impl Negotiator {
    /// The Unicode encoding text data defaults to when a text format
    /// declares no charset of its own.
    pub fn default_unicode_encoding(&self) -> &'static str {
        "iso-10646-ucs-2"
    }

    /// Text formats on this platform never depend on the current locale.
    pub fn is_locale_dependent_text_format(&self, _id: NativeFormatId) -> bool {
        false
    }

    /// Classifies a native format as text, image, or file-list data.
    ///
    /// Total and side-effect-free: a name that fails to parse as MIME is
    /// simply not in the probed category, never an error.
    pub fn classify(&self, id: NativeFormatId) -> FormatClass {
        if self.is_file_format(id) {
            FormatClass::FileList
        } else if self.is_image_format(id) {
            FormatClass::Image
        } else if self.is_text_format(id) {
            FormatClass::Text
        } else {
            FormatClass::Other
        }
    }

    pub fn is_file_format(&self, id: NativeFormatId) -> bool {
        id == self.well_known.file_name || id == self.well_known.dt_net_file
    }

    pub fn is_image_format(&self, id: NativeFormatId) -> bool {
        id == self.well_known.png || id == self.well_known.jfif || self.is_mime_format(id, "image")
    }

    pub fn is_text_format(&self, id: NativeFormatId) -> bool {
        self.is_mime_format(id, "text")
    }

    /// The charset text data in this format is encoded with, if the format
    /// is textual and its subtype interprets a charset at all.
    pub fn charset_for_text_format(&self, id: NativeFormatId) -> Option<String> {
        if let Some(mime) = self.parse_native(id) {
            if mime.primary() == "text" {
                // Ignore the charset parameter of the MIME type if the
                // subtype doesn't support charset.
                if !subtype_supports_charset(&mime) {
                    return None;
                }
                if let Some(charset) = mime.charset() {
                    return Some(charset.to_string());
                }
            }
        }
        Some(self.default_unicode_encoding().to_string())
    }

    /// True iff the format's name constitutes a valid MIME type with the
    /// given primary type.
    fn is_mime_format(&self, id: NativeFormatId, primary: &str) -> bool {
        self.parse_native(id)
            .is_some_and(|mime| mime.primary() == primary)
    }

    pub(crate) fn parse_native(&self, id: NativeFormatId) -> Option<MimeType> {
        let name = self.native_name(id)?;
        name.parse().ok()
    }
}
