//! Blog posts.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{RecordId, Resource, ResourceKind};

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Author's display name.
    pub author: String,
    /// Publication timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub publish_date: OffsetDateTime,
}

/// Non-id fields of a [`BlogPost`].
///
/// `publish_date` is optional on the wire. A new post without one is stamped
/// with the current time; an update without one keeps the existing date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostFields {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Author's display name.
    pub author: String,
    /// Publication timestamp.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub publish_date: Option<OffsetDateTime>,
}

impl BlogPostFields {
    /// Fields for a post with no explicit publication date.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            publish_date: None,
        }
    }

    /// Set the publication date.
    pub fn published_at(mut self, at: OffsetDateTime) -> Self {
        self.publish_date = Some(at);
        self
    }
}

impl Resource for BlogPost {
    type Fields = BlogPostFields;

    const KIND: ResourceKind = ResourceKind::BlogPosts;
    const REQUIRED_FIELDS: &'static [&'static str] = &["title", "content", "author"];

    fn from_fields(id: RecordId, fields: BlogPostFields) -> Self {
        Self {
            id,
            title: fields.title,
            content: fields.content,
            author: fields.author,
            publish_date: fields.publish_date.unwrap_or_else(OffsetDateTime::now_utc),
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn replace(&mut self, fields: BlogPostFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.author = fields.author;
        if let Some(at) = fields.publish_date {
            self.publish_date = at;
        }
    }
}

/// Records loaded into a fresh store when seeding is enabled.
pub fn samples() -> Vec<BlogPostFields> {
    vec![
        BlogPostFields::new(
            "Why tea beats coffee",
            "Lower caffeine, more varieties, and a kettle is cheaper than an espresso machine.",
            "Jane Doe",
        ),
        BlogPostFields::new(
            "Ten rules for a tidy pantry",
            "Label everything. Rotate stock. The other eight are variations on the first two.",
            "John Smith",
        ),
    ]
}
