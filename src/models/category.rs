//! Category model and transfer record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Category row, name acting as the natural lookup key
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub category_id: i64,
    pub category_name: Option<String>,
}

/// Category projection: name plus the titles of its books. The numeric
/// identity is deliberately not exposed at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub category_name: Option<String>,
    pub titles: Vec<String>,
}

impl CategoryDto {
    pub fn from_record(category: &Category, titles: Vec<String>) -> Self {
        Self {
            category_name: category.category_name.clone(),
            titles,
        }
    }
}
