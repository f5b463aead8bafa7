//! Standard text-encoding catalog.

use ut_core::ports::EncodingCatalogPort;

/// The character encodings every platform is expected to support, in fixed
/// catalog order.
const STANDARD_ENCODINGS: &[&str] = &[
    "US-ASCII",
    "ISO-8859-1",
    "UTF-8",
    "UTF-16BE",
    "UTF-16LE",
    "UTF-16",
];

pub struct StandardEncodings;

impl EncodingCatalogPort for StandardEncodings {
    fn standard_encodings(&self) -> Vec<String> {
        STANDARD_ENCODINGS.iter().map(|s| s.to_string()).collect()
    }
}
