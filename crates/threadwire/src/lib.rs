//! Typed `content` values for thread messages and their JSON wire codec.
//!
//! Content is either a bare string or an ordered array of parts
//! (`text`, `image_file`, `image_url`); see [`Content`] and [`ContentPart`].

pub mod codec;
pub mod config;
pub mod error;
pub mod types;

pub use codec::{
    decode_content_with, decode_message, decode_message_value, encode_message,
    encode_message_value,
};
pub use config::{CodecConfig, DecodeOrder};
pub use error::{CodecError, Result};
pub use types::{Content, ContentPart, MessageQuery, PartType, Role};
