//! Category Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category entity
///
/// Two-level hierarchy: a category with a non-null `parent_category_id`
/// is a child of that parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: Option<i64>,
    pub category_name: String,
    pub category_description: String,
    pub parent_category_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Whether this category sits at the top level
    pub fn is_parent(&self) -> bool {
        self.parent_category_id.is_none()
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub category_name: String,
    pub category_description: String,
    pub parent_category_id: Option<i64>,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub category_name: String,
    pub category_description: String,
    pub parent_category_id: Option<i64>,
}
