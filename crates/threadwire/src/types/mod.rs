pub mod content;
pub mod content_part;
pub mod message;
pub mod role;

pub use content::Content;
pub use content_part::{ContentPart, PartType};
pub use message::MessageQuery;
pub use role::Role;
