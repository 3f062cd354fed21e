//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: Option<i64>,
    pub product_name: String,
    pub product_description: String,
    pub price: f64,
    pub stock: i64,
    /// Category grouping reference, null for uncategorized products
    pub category_id: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create product payload (JSON part of the multipart request)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub product_name: String,
    pub product_description: String,
    pub price: f64,
    pub stock: i64,
    pub category_id: Option<i64>,
}

/// Update product payload (JSON part of the multipart request)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub product_name: String,
    pub product_description: String,
    pub price: f64,
    pub stock: i64,
    pub category_id: Option<i64>,
}

/// Binary image attached to a product create/update
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
