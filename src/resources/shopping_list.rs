//! Shopping-list items.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{RecordId, Resource, ResourceKind};

/// One entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// What to buy.
    pub name: String,
    /// How much to spend on it.
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
}

/// Non-id fields of a [`ShoppingListItem`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShoppingListItemFields {
    /// What to buy.
    pub name: String,
    /// How much to spend on it.
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
}

impl ShoppingListItemFields {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, budget: Decimal) -> Self {
        Self {
            name: name.into(),
            budget,
        }
    }
}

impl Resource for ShoppingListItem {
    type Fields = ShoppingListItemFields;

    const KIND: ResourceKind = ResourceKind::ShoppingList;
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "budget"];

    fn from_fields(id: RecordId, fields: ShoppingListItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            budget: fields.budget,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn replace(&mut self, fields: ShoppingListItemFields) {
        self.name = fields.name;
        self.budget = fields.budget;
    }
}

/// Records loaded into a fresh store when seeding is enabled.
pub fn samples() -> Vec<ShoppingListItemFields> {
    vec![
        ShoppingListItemFields::new("beans", dec!(2)),
        ShoppingListItemFields::new("tomatoes", dec!(3)),
        ShoppingListItemFields::new("peppers", dec!(4.5)),
    ]
}
