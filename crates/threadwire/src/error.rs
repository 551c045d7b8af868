use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// Neither a string nor an array of content parts.
    /// Lowercase wording is the fixed error text callers match on.
    #[error("content must be either a string or an array of content parts: {0}")]
    InvalidContent(String),

    #[error("Content part must be a JSON object, got {0}")]
    InvalidPart(String),

    #[error("Content part is missing a string `type` discriminator")]
    MissingPartType,

    #[error("Unknown content part type: {0}")]
    UnknownPartType(String),

    #[error("Content part `{part_type}` is missing string field `{field}`")]
    MissingPayload {
        part_type: &'static str,
        field: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
