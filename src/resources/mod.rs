//! Resource kinds served by the API and the record contract they share.

pub mod blog_post;
pub mod recipe;
pub mod shopping_list;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use thiserror::Error;

pub use blog_post::{BlogPost, BlogPostFields};
pub use recipe::{Recipe, RecipeFields};
pub use shopping_list::{ShoppingListItem, ShoppingListItemFields};

/// Identifier assigned by a store when a record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A string that is not the canonical decimal form of a [`RecordId`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid record id: {0:?}")]
pub struct ParseRecordIdError(String);

impl FromStr for RecordId {
    type Err = ParseRecordIdError;

    /// Only plain ASCII digits are accepted, so each record has one path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits_only = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !digits_only || (s.len() > 1 && s.starts_with('0')) {
            return Err(ParseRecordIdError(s.to_string()));
        }
        s.parse()
            .map(Self)
            .map_err(|_| ParseRecordIdError(s.to_string()))
    }
}

/// The collections exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum ResourceKind {
    /// Blog posts.
    #[strum(serialize = "blog-posts")]
    BlogPosts,
    /// Recipes.
    #[strum(serialize = "recipes")]
    Recipes,
    /// Shopping-list items.
    #[strum(serialize = "shopping-list")]
    ShoppingList,
}

impl ResourceKind {
    /// Path the collection is mounted under, e.g. `/recipes`.
    pub fn collection_path(self) -> String {
        format!("/{self}")
    }

    /// Path of a single member, in axum route syntax.
    pub fn member_path(self) -> String {
        format!("/{self}/:id")
    }
}

/// A record held by a [`MemoryStore`](crate::store::MemoryStore).
///
/// `Fields` carries every non-id field. A record is built from fields once
/// the store has assigned an id, and later updates replace all of them.
pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// Decoded request payload for create and update.
    type Fields: DeserializeOwned + Send;

    /// Which collection this record belongs to.
    const KIND: ResourceKind;

    /// JSON keys that must be present (and non-null) in a create or update body.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Build a record from its fields and the id the store assigned.
    fn from_fields(id: RecordId, fields: Self::Fields) -> Self;

    /// The record's identifier.
    fn id(&self) -> RecordId;

    /// Replace every non-id field.
    fn replace(&mut self, fields: Self::Fields);
}
