//! Read-only snapshots
//!
//! Each snapshot clones the store state under a read lock, with the
//! zero-argument derived stats attached. Stats are memoized per store:
//! while the store version is unchanged, repeated snapshots reuse the
//! same computed value.

use std::collections::HashMap;

use shared::auth::UserInfo;
use shared::models::{Category, Order, OrderItem, PaymentMethod, Product};

use crate::cache::CacheStatus;
use crate::derived;
use crate::derived::categories::CategoryStats;
use crate::derived::order_items::OrderItemStats;
use crate::derived::orders::OrderStats;
use crate::derived::products::ProductStats;
use crate::session::TokenSet;

use super::Console;

/// Session state for display
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub user: Option<UserInfo>,
    pub tokens: Option<TokenSet>,
    pub is_admin: bool,
    pub is_super_admin: bool,
    pub needs_refresh: bool,
    pub status: CacheStatus,
}

#[derive(Debug, Clone)]
pub struct CategorySnapshot {
    pub items: Vec<Category>,
    pub selected: Option<Category>,
    pub parents: Vec<Category>,
    pub children: Vec<Category>,
    pub status: CacheStatus,
    pub last_updated: Option<i64>,
    pub stats: CategoryStats,
}

#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    pub items: Vec<Product>,
    pub selected: Option<Product>,
    pub search_results: Vec<Product>,
    pub category_products: Vec<Product>,
    pub status: CacheStatus,
    pub last_updated: Option<i64>,
    pub stats: ProductStats,
}

#[derive(Debug, Clone)]
pub struct OrderSnapshot {
    pub items: Vec<Order>,
    pub selected: Option<Order>,
    pub search_results: Vec<Order>,
    pub user_orders: Vec<Order>,
    pub total_orders: i64,
    pub statistics: HashMap<String, f64>,
    pub status: CacheStatus,
    pub last_updated: Option<i64>,
    pub stats: OrderStats,
}

#[derive(Debug, Clone)]
pub struct OrderItemSnapshot {
    pub items: Vec<OrderItem>,
    pub selected: Option<OrderItem>,
    pub total_quantity: i64,
    pub total_amount: f64,
    pub status: CacheStatus,
    pub last_updated: Option<i64>,
    pub stats: OrderItemStats,
}

#[derive(Debug, Clone)]
pub struct PaymentMethodSnapshot {
    pub items: Vec<PaymentMethod>,
    pub selected: Option<PaymentMethod>,
    pub status: CacheStatus,
    pub last_updated: Option<i64>,
}

impl Console {
    pub async fn session_snapshot(&self) -> SessionSnapshot {
        let session = self.session.read().await;
        SessionSnapshot {
            is_authenticated: session.is_authenticated(),
            user: session.user().cloned(),
            tokens: session.tokens().cloned(),
            is_admin: session.is_admin(),
            is_super_admin: session.is_super_admin(),
            needs_refresh: session.needs_refresh(),
            status: session.status().clone(),
        }
    }

    pub async fn category_snapshot(&self) -> CategorySnapshot {
        let store = self.categories.read().await;
        let stats = self
            .category_stats
            .get_or_compute(store.version(), || derived::categories::stats(store.items()));
        CategorySnapshot {
            items: store.items().to_vec(),
            selected: store.selected().cloned(),
            parents: store.parents().to_vec(),
            children: store.children().to_vec(),
            status: store.status().clone(),
            last_updated: store.last_updated(),
            stats,
        }
    }

    pub async fn product_snapshot(&self) -> ProductSnapshot {
        let store = self.products.read().await;
        let stats = self
            .product_stats
            .get_or_compute(store.version(), || derived::products::stats(store.items()));
        ProductSnapshot {
            items: store.items().to_vec(),
            selected: store.selected().cloned(),
            search_results: store.search_results().to_vec(),
            category_products: store.category_products().to_vec(),
            status: store.status().clone(),
            last_updated: store.last_updated(),
            stats,
        }
    }

    pub async fn order_snapshot(&self) -> OrderSnapshot {
        let store = self.orders.read().await;
        let stats = self
            .order_stats
            .get_or_compute(store.version(), || derived::orders::stats(store.items()));
        OrderSnapshot {
            items: store.items().to_vec(),
            selected: store.selected().cloned(),
            search_results: store.search_results().to_vec(),
            user_orders: store.user_orders().to_vec(),
            total_orders: store.total_orders(),
            statistics: store.statistics().clone(),
            status: store.status().clone(),
            last_updated: store.last_updated(),
            stats,
        }
    }

    pub async fn order_item_snapshot(&self) -> OrderItemSnapshot {
        let store = self.order_items.read().await;
        let stats = self
            .order_item_stats
            .get_or_compute(store.version(), || derived::order_items::stats(store.items()));
        OrderItemSnapshot {
            items: store.items().to_vec(),
            selected: store.selected().cloned(),
            total_quantity: store.total_quantity(),
            total_amount: store.total_amount(),
            status: store.status().clone(),
            last_updated: store.last_updated(),
            stats,
        }
    }

    pub async fn payment_method_snapshot(&self) -> PaymentMethodSnapshot {
        let store = self.payment_methods.read().await;
        PaymentMethodSnapshot {
            items: store.items().to_vec(),
            selected: store.selected().cloned(),
            status: store.status().clone(),
            last_updated: store.last_updated(),
        }
    }
}
