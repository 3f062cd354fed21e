//! Order Item Model
//!
//! Line items carry a composite identity of `(order_id, product_id)`;
//! there is no standalone line-item ID on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Composite order line identity
pub type OrderItemKey = (i64, i64);

/// Order line item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order_id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    pub price: f64,
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrderItem {
    /// The composite identity of this line
    pub fn item_key(&self) -> OrderItemKey {
        (self.order_id, self.product_id)
    }

    /// Line amount (`quantity * price`)
    pub fn line_amount(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Create order item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemCreate {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
}

/// Update order item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemUpdate {
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}
