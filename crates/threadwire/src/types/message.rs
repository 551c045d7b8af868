use serde::{Deserialize, Serialize};

use super::content::Content;
use super::content_part::ContentPart;
use super::role::Role;

/// Request body for adding a message to a thread
///
/// Serializes as `{"role": ..., "content": ...}`. Built through [`MessageQuery::new`]
/// or [`MessageQuery::with_parts`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageQuery {
    role: Role,
    content: Content,
}

impl MessageQuery {
    /// Text message with optional image attachments.
    ///
    /// Without file ids (or with an empty list) the content is the bare
    /// string. Otherwise it is a text part followed by one `image_file`
    /// part per id, in the given order.
    pub fn new(role: Role, content: impl Into<String>, file_ids: Option<Vec<String>>) -> Self {
        let text = content.into();
        let content = match file_ids {
            Some(ids) if !ids.is_empty() => {
                let mut parts = Vec::with_capacity(ids.len() + 1);
                parts.push(ContentPart::text(text));
                parts.extend(ids.into_iter().map(ContentPart::image_file));
                Content::Parts(parts)
            }
            _ => Content::Text(text),
        };

        Self { role, content }
    }

    /// Message built from caller-supplied parts, kept exactly as given
    pub fn with_parts(role: Role, parts: Vec<ContentPart>) -> Self {
        Self {
            role,
            content: Content::Parts(parts),
        }
    }

    /// Reassemble a query from already decoded fields
    pub(crate) fn from_decoded(role: Role, content: Content) -> Self {
        Self { role, content }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Ids of attached `image_file` parts, in order
    pub fn file_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.content
            .parts()
            .unwrap_or_default()
            .iter()
            .filter_map(|part| match part {
                ContentPart::ImageFile { file_id } => Some(file_id.as_str()),
                _ => None,
            })
    }
}
