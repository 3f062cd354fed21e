//! Per-entity stores
//!
//! Each store wraps a generic [`EntityCache`] and adds the secondary
//! collections its entity carries (search results, parent/child lists,
//! totals). Mutation goes through a closed per-entity event enum.

mod category;
mod order;
mod order_item;
mod payment_method;
mod product;

pub use category::{CategoryEvent, CategoryStore};
pub use order::{OrderEvent, OrderStore};
pub use order_item::{OrderItemEvent, OrderItemStore};
pub use payment_method::{PaymentMethodEvent, PaymentMethodStore};
pub use product::{ProductEvent, ProductStore};

use shared::models::{Category, Order, OrderItem, OrderItemKey, PaymentMethod, Product};

use crate::cache::Entity;

impl Entity for Category {
    type Key = i64;

    fn key(&self) -> Option<i64> {
        self.category_id
    }
}

impl Entity for Product {
    type Key = i64;

    fn key(&self) -> Option<i64> {
        self.product_id
    }
}

impl Entity for Order {
    type Key = i64;

    fn key(&self) -> Option<i64> {
        self.order_id
    }
}

impl Entity for OrderItem {
    type Key = OrderItemKey;

    fn key(&self) -> Option<OrderItemKey> {
        Some(self.item_key())
    }
}

impl Entity for PaymentMethod {
    type Key = i64;

    fn key(&self) -> Option<i64> {
        self.payment_method_id
    }
}
