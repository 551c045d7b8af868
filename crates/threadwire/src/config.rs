// Codec configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which wire shape `Content` decoding tries first.
///
/// The two shapes are disjoint (a JSON string is never an array), so both
/// orders decode every input to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeOrder {
    #[default]
    StringFirst,
    ArrayFirst,
}

/// Options for [`crate::decode_content_with`] and `Content::from_value_with`.
///
/// `decode_message`, `Content::from_value` and the serde `Deserialize` impls
/// ignore this and always use the default (string first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub decode_order: DecodeOrder,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decode_order(mut self, order: DecodeOrder) -> Self {
        self.decode_order = order;
        self
    }

    /// Load configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
