use std::fmt;

use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{CodecError, Result};

/// Wire value of the `type` key on a content part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartType {
    Text,
    ImageFile,
    ImageUrl,
}

impl PartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::ImageFile => "image_file",
            Self::ImageUrl => "image_url",
        }
    }

    /// Parse a discriminator string; `None` for anything outside the known set
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "image_file" => Some(Self::ImageFile),
            "image_url" => Some(Self::ImageUrl),
            _ => None,
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured unit of thread message content
///
/// Wire shapes:
/// - `{"type":"text","text":"..."}`
/// - `{"type":"image_file","image_file":{"file_id":"..."}}`
/// - `{"type":"image_url","image_url":{"url":"..."}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text { text: String },

    /// Image previously uploaded through the files API
    ImageFile { file_id: String },

    /// Image reachable by URL
    ImageUrl { url: String },
}

#[derive(Serialize)]
struct ImageFileRef<'a> {
    file_id: &'a str,
}

#[derive(Serialize)]
struct ImageUrlRef<'a> {
    url: &'a str,
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image_file(file_id: impl Into<String>) -> Self {
        Self::ImageFile {
            file_id: file_id.into(),
        }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl { url: url.into() }
    }

    pub fn part_type(&self) -> PartType {
        match self {
            Self::Text { .. } => PartType::Text,
            Self::ImageFile { .. } => PartType::ImageFile,
            Self::ImageUrl { .. } => PartType::ImageUrl,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Decode a single part from a parsed JSON value.
    ///
    /// The `type` key is read first and selects which payload keys are
    /// looked at; keys belonging to other variants are never read.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| CodecError::InvalidPart(value_kind(value).to_string()))?;

        let raw_type = obj
            .get("type")
            .and_then(Value::as_str)
            .ok_or(CodecError::MissingPartType)?;

        let part_type = PartType::parse(raw_type).ok_or_else(|| {
            tracing::debug!(part_type = raw_type, "Rejecting unknown content part type");
            CodecError::UnknownPartType(raw_type.to_string())
        })?;

        match part_type {
            PartType::Text => {
                let text = required_string(obj, part_type, &["text"], "text")?;
                Ok(Self::Text { text })
            }
            PartType::ImageFile => {
                let file_id = required_string(
                    obj,
                    part_type,
                    &["image_file", "file_id"],
                    "image_file.file_id",
                )?;
                Ok(Self::ImageFile { file_id })
            }
            PartType::ImageUrl => {
                let url =
                    required_string(obj, part_type, &["image_url", "url"], "image_url.url")?;
                Ok(Self::ImageUrl { url })
            }
        }
    }
}

fn required_string(
    obj: &Map<String, Value>,
    part_type: PartType,
    path: &[&str],
    field: &'static str,
) -> Result<String> {
    lookup_str(obj, path)
        .map(str::to_string)
        .ok_or_else(|| {
            tracing::debug!(part_type = %part_type, field, "Content part payload missing");
            CodecError::MissingPayload {
                part_type: part_type.as_str(),
                field,
            }
        })
}

fn lookup_str<'a>(obj: &'a Map<String, Value>, path: &[&str]) -> Option<&'a str> {
    let (last, parents) = path.split_last()?;
    let mut current = obj;
    for key in parents {
        current = current.get(*key)?.as_object()?;
    }
    current.get(*last)?.as_str()
}

/// JSON type name used in error messages
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for ContentPart {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.part_type().as_str())?;
        match self {
            Self::Text { text } => map.serialize_entry("text", text)?,
            Self::ImageFile { file_id } => {
                map.serialize_entry("image_file", &ImageFileRef { file_id })?
            }
            Self::ImageUrl { url } => map.serialize_entry("image_url", &ImageUrlRef { url })?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ContentPart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}
