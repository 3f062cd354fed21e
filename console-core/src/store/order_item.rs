//! Order item store
//!
//! Totals are recomputed in full from the collection after every
//! mutation rather than adjusted incrementally, so they can never
//! drift from the items they summarize.

use shared::models::{OrderItem, OrderItemKey};

use crate::cache::{CacheEvent, CacheStatus, EntityCache};

/// Order item lifecycle and mutation events
#[derive(Debug, Clone)]
pub enum OrderItemEvent {
    Loading,
    Fetched(Vec<OrderItem>),
    OneFetched(OrderItem),
    Created(OrderItem),
    Updated(OrderItem),
    Removed(OrderItemKey),
    BulkCreated(Vec<OrderItem>),
    BulkUpdated(Vec<OrderItem>),
    Failed(String),
}

/// Order item cache plus running totals
#[derive(Debug, Default)]
pub struct OrderItemStore {
    cache: EntityCache<OrderItem>,
    total_quantity: i64,
    total_amount: f64,
}

impl OrderItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[OrderItem] {
        self.cache.items()
    }

    pub fn selected(&self) -> Option<&OrderItem> {
        self.cache.selected()
    }

    pub fn status(&self) -> &CacheStatus {
        self.cache.status()
    }

    pub fn last_updated(&self) -> Option<i64> {
        self.cache.last_updated()
    }

    pub fn version(&self) -> u64 {
        self.cache.version()
    }

    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn apply(&mut self, event: OrderItemEvent) {
        match event {
            OrderItemEvent::Loading => self.cache.apply(CacheEvent::Loading),
            OrderItemEvent::Fetched(items) => self.cache.apply(CacheEvent::ListFetched(items)),
            OrderItemEvent::OneFetched(item) => self.cache.apply(CacheEvent::OneFetched(item)),
            OrderItemEvent::Created(item) => self.cache.apply(CacheEvent::Created(item)),
            OrderItemEvent::Updated(item) => self.cache.apply(CacheEvent::Updated(item)),
            OrderItemEvent::Removed(key) => self.cache.apply(CacheEvent::Removed(key)),
            OrderItemEvent::BulkCreated(items) | OrderItemEvent::BulkUpdated(items) => {
                for item in items {
                    self.cache.apply(CacheEvent::Created(item));
                }
            }
            OrderItemEvent::Failed(message) => {
                self.cache.apply(CacheEvent::Failed(message));
                return;
            }
        }
        self.recompute_totals();
    }

    pub fn clear_selected(&mut self) {
        self.cache.set_selected(None);
    }

    pub fn clear_error(&mut self) {
        self.cache.clear_error();
    }

    pub fn reset(&mut self) {
        self.cache.reset();
        self.total_quantity = 0;
        self.total_amount = 0.0;
    }

    fn recompute_totals(&mut self) {
        self.total_quantity = self.cache.items().iter().map(|i| i.quantity).sum();
        self.total_amount = self.cache.items().iter().map(OrderItem::line_amount).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(order_id: i64, product_id: i64, quantity: i64, price: f64) -> OrderItem {
        OrderItem {
            order_id,
            product_id,
            product_name: None,
            quantity,
            price,
            subtotal: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_bulk_create_recomputes_totals() {
        let mut store = OrderItemStore::new();
        store.apply(OrderItemEvent::BulkCreated(vec![
            item(1, 10, 2, 5.0),
            item(1, 11, 1, 10.0),
        ]));

        assert_eq!(store.total_quantity(), 3);
        assert_eq!(store.total_amount(), 20.0);
    }

    #[test]
    fn test_totals_follow_update_and_delete() {
        let mut store = OrderItemStore::new();
        store.apply(OrderItemEvent::Fetched(vec![
            item(1, 10, 2, 5.0),
            item(1, 11, 1, 10.0),
        ]));
        assert_eq!(store.total_amount(), 20.0);

        store.apply(OrderItemEvent::Updated(item(1, 10, 4, 5.0)));
        assert_eq!(store.total_quantity(), 5);
        assert_eq!(store.total_amount(), 30.0);

        store.apply(OrderItemEvent::Removed((1, 11)));
        assert_eq!(store.total_quantity(), 4);
        assert_eq!(store.total_amount(), 20.0);
    }

    #[test]
    fn test_failed_leaves_totals_alone() {
        let mut store = OrderItemStore::new();
        store.apply(OrderItemEvent::Fetched(vec![item(1, 10, 2, 5.0)]));
        store.apply(OrderItemEvent::Failed("boom".to_string()));

        assert_eq!(store.total_quantity(), 2);
        assert_eq!(store.total_amount(), 10.0);
    }
}
