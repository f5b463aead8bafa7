//! MIME type descriptor and its fallible parser.
//!
//! Native format names exchanged over the platform transfer protocol are, by
//! convention, MIME type strings. Parsing is an explicit fallible operation:
//! callers that probe arbitrary atom names treat [`MimeParseError`] as
//! "not MIME-shaped" and degrade, never as a hard failure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The name of the parameter that carries the character encoding.
pub(crate) const CHARSET_PARAM: &str = "charset";

/// Characters that may not appear in a MIME token (RFC 2045 tspecials).
const TSPECIALS: &str = "()<>@,;:\\\"/[]?=";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MimeParseError {
    #[error("missing '/' separator in \"{0}\"")]
    MissingSlash(String),
    #[error("empty or invalid primary type in \"{0}\"")]
    InvalidPrimaryType(String),
    #[error("empty or invalid subtype in \"{0}\"")]
    InvalidSubType(String),
    #[error("malformed parameter \"{0}\"")]
    InvalidParameter(String),
}

/// A parsed MIME type: primary type, subtype, and optional parameters.
///
/// Equality and hashing consider the primary type, the subtype, and the
/// `charset` parameter only — other parameters do not affect identity for
/// negotiation purposes. Charset values compare case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MimeType {
    primary: String,
    sub: String,
    params: BTreeMap<String, String>,
}

impl MimeType {
    pub fn new(primary: impl Into<String>, sub: impl Into<String>) -> Self {
        Self {
            primary: primary.into().to_ascii_lowercase(),
            sub: sub.into().to_ascii_lowercase(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn sub(&self) -> &str {
        &self.sub
    }

    /// `"primary/sub"` without any parameters.
    pub fn base_type(&self) -> String {
        format!("{}/{}", self.primary, self.sub)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn charset(&self) -> Option<&str> {
        self.param(CHARSET_PARAM)
    }

    pub fn matches_base(&self, primary: &str, sub: &str) -> bool {
        self.primary == primary && self.sub == sub
    }
}

impl PartialEq for MimeType {
    fn eq(&self, other: &Self) -> bool {
        self.primary == other.primary
            && self.sub == other.sub
            && match (self.charset(), other.charset()) {
                (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Eq for MimeType {}

impl Hash for MimeType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.primary.hash(state);
        self.sub.hash(state);
        self.charset().map(str::to_ascii_lowercase).hash(state);
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.primary, self.sub)?;
        for (key, value) in &self.params {
            write!(f, ";{key}={value}")?;
        }
        Ok(())
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_graphic() && !TSPECIALS.contains(c))
}

impl FromStr for MimeType {
    type Err = MimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(';');
        let base = parts.next().unwrap_or_default().trim();
        let (primary, sub) = base
            .split_once('/')
            .ok_or_else(|| MimeParseError::MissingSlash(s.to_string()))?;
        let primary = primary.trim();
        let sub = sub.trim();
        if !is_token(primary) {
            return Err(MimeParseError::InvalidPrimaryType(s.to_string()));
        }
        if !is_token(sub) {
            return Err(MimeParseError::InvalidSubType(s.to_string()));
        }

        let mut params = BTreeMap::new();
        for raw in parts {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let (key, value) = raw
                .split_once('=')
                .ok_or_else(|| MimeParseError::InvalidParameter(raw.to_string()))?;
            let key = key.trim();
            if !is_token(key) {
                return Err(MimeParseError::InvalidParameter(raw.to_string()));
            }
            let value = value.trim().trim_matches('"');
            params.insert(key.to_ascii_lowercase(), value.to_string());
        }

        Ok(MimeType {
            primary: primary.to_ascii_lowercase(),
            sub: sub.to_ascii_lowercase(),
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_type() {
        let mime: MimeType = "text/plain".parse().unwrap();
        assert_eq!(mime.primary(), "text");
        assert_eq!(mime.sub(), "plain");
        assert_eq!(mime.base_type(), "text/plain");
        assert_eq!(mime.charset(), None);
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let mime: MimeType = " Text/HTML ; Charset=UTF-8 ".parse().unwrap();
        assert_eq!(mime.base_type(), "text/html");
        assert_eq!(mime.charset(), Some("UTF-8"));
    }

    #[test]
    fn test_parse_quoted_parameter_value() {
        let mime: MimeType = "text/plain;charset=\"us-ascii\"".parse().unwrap();
        assert_eq!(mime.charset(), Some("us-ascii"));
    }

    #[test]
    fn test_parse_rejects_plain_atom_names() {
        // Protocol atoms like TARGETS or TIMESTAMP are not MIME-shaped.
        assert!(matches!(
            "TARGETS".parse::<MimeType>(),
            Err(MimeParseError::MissingSlash(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_components() {
        assert!("text/".parse::<MimeType>().is_err());
        assert!("/plain".parse::<MimeType>().is_err());
        assert!("".parse::<MimeType>().is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_tokens() {
        assert!("te xt/plain".parse::<MimeType>().is_err());
        assert!("text/pl@in;=utf-8".parse::<MimeType>().is_err());
    }

    #[test]
    fn test_equality_ignores_non_charset_params() {
        let a: MimeType = "text/plain;charset=utf-8;x-mark=1".parse().unwrap();
        let b: MimeType = "text/plain;charset=UTF-8".parse().unwrap();
        assert_eq!(a, b);

        let c: MimeType = "text/plain".parse().unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_round_trips() {
        let mime: MimeType = "text/plain;charset=utf-8".parse().unwrap();
        assert_eq!(mime.to_string(), "text/plain;charset=utf-8");
        let again: MimeType = mime.to_string().parse().unwrap();
        assert_eq!(mime, again);
    }
}
