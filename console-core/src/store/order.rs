//! Order store
//!
//! The primary collection holds exactly one page of the paginated
//! listing; `total_orders` carries the server-side total. Search and
//! per-user listings land in secondary collections, the statistics map
//! is a server-computed projection.

use std::collections::HashMap;

use shared::Page;
use shared::models::Order;

use crate::cache::{CacheEvent, CacheStatus, EntityCache};

/// Order lifecycle and mutation events
#[derive(Debug, Clone)]
pub enum OrderEvent {
    Loading,
    PageFetched(Page<Order>),
    OneFetched(Order),
    SearchFetched(Page<Order>),
    UserOrdersFetched(Page<Order>),
    RangeFetched(Vec<Order>),
    StatisticsFetched(HashMap<String, f64>),
    Created(Order),
    Updated(Order),
    Removed(i64),
    Failed(String),
}

/// Order cache plus pagination/search/statistics state
#[derive(Debug, Default)]
pub struct OrderStore {
    cache: EntityCache<Order>,
    search_results: Vec<Order>,
    user_orders: Vec<Order>,
    total_orders: i64,
    statistics: HashMap<String, f64>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Order] {
        self.cache.items()
    }

    pub fn selected(&self) -> Option<&Order> {
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

    pub fn search_results(&self) -> &[Order] {
        &self.search_results
    }

    pub fn user_orders(&self) -> &[Order] {
        &self.user_orders
    }

    pub fn total_orders(&self) -> i64 {
        self.total_orders
    }

    pub fn statistics(&self) -> &HashMap<String, f64> {
        &self.statistics
    }

    pub fn apply(&mut self, event: OrderEvent) {
        match event {
            OrderEvent::Loading => self.cache.apply(CacheEvent::Loading),
            OrderEvent::PageFetched(page) => {
                self.total_orders = page.total_elements;
                self.cache.apply(CacheEvent::ListFetched(page.content));
            }
            OrderEvent::OneFetched(order) => self.cache.apply(CacheEvent::OneFetched(order)),
            OrderEvent::SearchFetched(page) => {
                self.search_results = page.content;
                self.cache.mark_settled();
            }
            OrderEvent::UserOrdersFetched(page) => {
                self.user_orders = page.content;
                self.cache.mark_settled();
            }
            OrderEvent::RangeFetched(orders) => {
                self.cache.apply(CacheEvent::ListFetched(orders));
            }
            OrderEvent::StatisticsFetched(statistics) => {
                self.statistics = statistics;
                self.cache.mark_settled();
            }
            OrderEvent::Created(order) => self.cache.apply(CacheEvent::Created(order)),
            OrderEvent::Updated(order) => self.cache.apply(CacheEvent::Updated(order)),
            OrderEvent::Removed(id) => self.cache.apply(CacheEvent::Removed(id)),
            OrderEvent::Failed(message) => self.cache.apply(CacheEvent::Failed(message)),
        }
    }

    pub fn clear_selected(&mut self) {
        self.cache.set_selected(None);
    }

    pub fn clear_error(&mut self) {
        self.cache.clear_error();
    }

    pub fn reset(&mut self) {
        self.cache.reset();
        self.search_results.clear();
        self.user_orders.clear();
        self.total_orders = 0;
        self.statistics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn order(id: i64, amount: f64) -> Order {
        Order {
            order_id: Some(id),
            user_id: 1,
            username: None,
            order_date: Utc::now(),
            status: "PENDING".to_string(),
            total_amount: amount,
            created_at: None,
            updated_at: None,
        }
    }

    fn page(orders: Vec<Order>, total: i64) -> Page<Order> {
        Page {
            content: orders,
            total_elements: total,
            total_pages: 1,
            size: 10,
            number: 0,
        }
    }

    #[test]
    fn test_page_fetch_replaces_items_and_total() {
        let mut store = OrderStore::new();
        store.apply(OrderEvent::PageFetched(page(vec![order(1, 10.0)], 42)));
        store.apply(OrderEvent::PageFetched(page(vec![order(2, 20.0)], 41)));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].order_id, Some(2));
        assert_eq!(store.total_orders(), 41);
    }

    #[test]
    fn test_statistics_are_a_secondary_projection() {
        let mut store = OrderStore::new();
        store.apply(OrderEvent::PageFetched(page(vec![order(1, 10.0)], 1)));
        store.apply(OrderEvent::StatisticsFetched(HashMap::from([(
            "totalRevenue".to_string(),
            99.5,
        )])));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.statistics().get("totalRevenue"), Some(&99.5));
    }
}
