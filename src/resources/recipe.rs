//! Recipes.

use serde::{Deserialize, Serialize};

use super::{RecordId, Resource, ResourceKind};

/// A recipe and its ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Recipe name.
    pub name: String,
    /// Ingredients, in the order they were given.
    pub ingredients: Vec<String>,
}

/// Non-id fields of a [`Recipe`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeFields {
    /// Recipe name.
    pub name: String,
    /// Ingredients.
    pub ingredients: Vec<String>,
}

impl RecipeFields {
    /// Convenience constructor.
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

impl Resource for Recipe {
    type Fields = RecipeFields;

    const KIND: ResourceKind = ResourceKind::Recipes;
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "ingredients"];

    fn from_fields(id: RecordId, fields: RecipeFields) -> Self {
        Self {
            id,
            name: fields.name,
            ingredients: fields.ingredients,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn replace(&mut self, fields: RecipeFields) {
        self.name = fields.name;
        self.ingredients = fields.ingredients;
    }
}

/// Records loaded into a fresh store when seeding is enabled.
pub fn samples() -> Vec<RecipeFields> {
    vec![
        RecipeFields::new(
            "boiled white rice",
            ["1 cup white rice", "2 cups water", "pinch of salt"],
        ),
        RecipeFields::new("milkshake", ["2 tbsp cocoa", "2 cups vanilla ice cream", "1 cup milk"]),
    ]
}
