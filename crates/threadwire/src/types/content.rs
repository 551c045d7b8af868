use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::content_part::{value_kind, ContentPart};
use crate::config::{CodecConfig, DecodeOrder};
use crate::error::{CodecError, Result};

/// The `content` field of a thread message
///
/// On the wire this is either a bare JSON string or an array of content
/// parts. There is no outer discriminator, so decoding tries both shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Simple text content
    Text(String),

    /// Ordered content parts (e.g. text followed by image attachments)
    Parts(Vec<ContentPart>),
}

type Attempt = fn(&Value) -> std::result::Result<Content, String>;

impl Content {
    /// Create text content
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Get as plain text (if possible)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Parts(parts) => match parts.as_slice() {
                [part] => part.as_text(),
                _ => None,
            },
        }
    }

    pub fn parts(&self) -> Option<&[ContentPart]> {
        match self {
            Self::Text(_) => None,
            Self::Parts(parts) => Some(parts),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Parts(parts) => parts.is_empty(),
        }
    }

    /// Decode with the default (string first) shape order
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_with(value, &CodecConfig::default())
    }

    /// Decode by trying each wire shape in the configured order.
    ///
    /// Fails only after both shapes were tried.
    pub fn from_value_with(value: &Value, config: &CodecConfig) -> Result<Self> {
        let attempts: [Attempt; 2] = match config.decode_order {
            DecodeOrder::StringFirst => [Self::decode_text as Attempt, Self::decode_parts],
            DecodeOrder::ArrayFirst => [Self::decode_parts as Attempt, Self::decode_text],
        };

        let mut reasons = Vec::with_capacity(attempts.len());
        for attempt in attempts {
            match attempt(value) {
                Ok(content) => return Ok(content),
                Err(reason) => {
                    tracing::trace!(%reason, "Content shape did not match, trying next");
                    reasons.push(reason);
                }
            }
        }

        let reason = reasons.join("; ");
        tracing::debug!(%reason, "Content matched neither wire shape");
        Err(CodecError::InvalidContent(reason))
    }

    fn decode_text(value: &Value) -> std::result::Result<Self, String> {
        value
            .as_str()
            .map(|s| Self::Text(s.to_string()))
            .ok_or_else(|| format!("not a string (got {})", value_kind(value)))
    }

    fn decode_parts(value: &Value) -> std::result::Result<Self, String> {
        let items = value
            .as_array()
            .ok_or_else(|| format!("not an array (got {})", value_kind(value)))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                ContentPart::from_value(item).map_err(|e| format!("part {index}: {e}"))
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Self::Parts)
    }
}

impl Serialize for Content {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Parts(parts) => parts.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<ContentPart>> for Content {
    fn from(parts: Vec<ContentPart>) -> Self {
        Self::Parts(parts)
    }
}
