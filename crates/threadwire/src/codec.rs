// JSON entry points for thread message queries

use serde::Deserialize;
use serde_json::Value;

use crate::config::CodecConfig;
use crate::error::Result;
use crate::types::{Content, MessageQuery, Role};

/// Query envelope with `content` left undecoded
#[derive(Deserialize)]
struct RawMessageQuery {
    role: Role,
    content: Value,
}

/// Encode a query to its JSON request body
pub fn encode_message(query: &MessageQuery) -> Result<String> {
    Ok(serde_json::to_string(query)?)
}

pub fn encode_message_value(query: &MessageQuery) -> Result<Value> {
    Ok(serde_json::to_value(query)?)
}

/// Decode a query from a JSON request body
pub fn decode_message(json: &str) -> Result<MessageQuery> {
    let value: Value = serde_json::from_str(json)?;
    decode_message_value(value)
}

/// Decode a query from a parsed JSON value.
///
/// Envelope and role errors come back as `CodecError::Json`; a malformed
/// `content` keeps its typed `CodecError::InvalidContent`.
pub fn decode_message_value(value: Value) -> Result<MessageQuery> {
    let raw: RawMessageQuery = serde_json::from_value(value)?;
    let content = Content::from_value(&raw.content)?;
    Ok(MessageQuery::from_decoded(raw.role, content))
}

/// Decode a bare `content` value with an explicit shape order
pub fn decode_content_with(value: &Value, config: &CodecConfig) -> Result<Content> {
    Content::from_value_with(value, config)
}
