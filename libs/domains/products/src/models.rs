use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Product entity
///
/// `in_stock` is never stored; every read derives it from `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Primary key
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Mechanical keyboard")]
    pub description: String,
    /// Category name, matched exactly
    #[schema(example = "electronics")]
    pub category: String,
    /// Units on hand; may be zero or negative
    #[schema(example = 5)]
    pub quantity: i32,
    /// Time of the last quantity change, if any
    #[schema(value_type = Option<String>, example = "2024-01-01T00:00:00")]
    pub modified: Option<NaiveDateTime>,
    /// `quantity > 0`
    pub in_stock: bool,
}

impl Product {
    pub fn new(
        id: i32,
        description: impl Into<String>,
        category: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            category: category.into(),
            quantity,
            modified: None,
            in_stock: quantity > 0,
        }
    }
}

/// Body of `PUT /{id}/quantity`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct QuantityAdjustment {
    /// Signed change applied to the current quantity
    #[schema(example = 3)]
    pub delta: i32,
}

/// Free-text search parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the description; empty matches everything
    #[serde(default)]
    pub q: String,
}
