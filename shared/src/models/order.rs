//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Option<i64>,
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub total_amount: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub user_id: i64,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub total_amount: f64,
    #[serde(default)]
    pub username: Option<String>,
}

/// Update order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub user_id: i64,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub total_amount: f64,
    #[serde(default)]
    pub username: Option<String>,
}

/// Search filter for the order search endpoint.
///
/// All fields optional; `None` means unconstrained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSearchParams {
    pub user_id: Option<i64>,
    pub status: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
