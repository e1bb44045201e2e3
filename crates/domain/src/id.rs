//! Backend-assigned resource identifiers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of an equipment or maintenance record.
///
/// The backend may send ids as JSON numbers or strings, while form controls
/// always hand them back as strings. The id is therefore kept as text and
/// compared textually, so `5` and `"5"` refer to the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    /// Wrap a raw id, trimming surrounding whitespace.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self(raw.trim().to_string())
    }

    /// Parse a form-control value; empty input means "no id".
    #[must_use]
    pub fn from_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Loose comparison against a raw control value.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw.trim()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Unsigned(u64),
            Signed(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Unsigned(n) => Self(n.to_string()),
            Raw::Signed(n) => Self(n.to_string()),
            Raw::Text(s) => Self::new(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_numeric_json_id() {
        let id: ResourceId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn should_accept_string_json_id() {
        let id: ResourceId = serde_json::from_str("\"64b7f0c2\"").unwrap();
        assert_eq!(id.as_str(), "64b7f0c2");
    }

    #[test]
    fn should_match_loosely_when_number_compared_to_string() {
        let id: ResourceId = serde_json::from_str("5").unwrap();
        assert!(id.matches("5"));
        assert!(id.matches(" 5 "));
        assert!(!id.matches("50"));
    }

    #[test]
    fn should_return_none_when_input_is_blank() {
        assert_eq!(ResourceId::from_input(""), None);
        assert_eq!(ResourceId::from_input("   "), None);
        assert_eq!(ResourceId::from_input("7"), Some(ResourceId::from(7)));
    }

    #[test]
    fn should_serialize_as_string() {
        let json = serde_json::to_string(&ResourceId::from(3)).unwrap();
        assert_eq!(json, "\"3\"");
    }
}
