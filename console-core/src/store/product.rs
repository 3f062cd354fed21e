//! Product store
//!
//! Keyword search and the per-category listing land in their own
//! secondary collections; price-range, stock and plain fetches all
//! replace the primary collection wholesale.

use shared::models::Product;

use crate::cache::{CacheEvent, CacheStatus, EntityCache};

/// Product lifecycle and mutation events
#[derive(Debug, Clone)]
pub enum ProductEvent {
    Loading,
    Fetched(Vec<Product>),
    OneFetched(Product),
    SearchFetched(Vec<Product>),
    CategoryFetched(Vec<Product>),
    Created(Product),
    Updated(Product),
    Removed(i64),
    Failed(String),
}

/// Product cache plus search/category secondary collections
#[derive(Debug, Default)]
pub struct ProductStore {
    cache: EntityCache<Product>,
    search_results: Vec<Product>,
    category_products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        self.cache.items()
    }

    pub fn selected(&self) -> Option<&Product> {
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

    pub fn search_results(&self) -> &[Product] {
        &self.search_results
    }

    pub fn category_products(&self) -> &[Product] {
        &self.category_products
    }

    pub fn apply(&mut self, event: ProductEvent) {
        match event {
            ProductEvent::Loading => self.cache.apply(CacheEvent::Loading),
            ProductEvent::Fetched(items) => self.cache.apply(CacheEvent::ListFetched(items)),
            ProductEvent::OneFetched(item) => self.cache.apply(CacheEvent::OneFetched(item)),
            ProductEvent::SearchFetched(items) => {
                self.search_results = items;
                self.cache.mark_settled();
            }
            ProductEvent::CategoryFetched(items) => {
                self.category_products = items;
                self.cache.mark_settled();
            }
            ProductEvent::Created(item) => self.cache.apply(CacheEvent::Created(item)),
            ProductEvent::Updated(item) => self.cache.apply(CacheEvent::Updated(item)),
            ProductEvent::Removed(id) => self.cache.apply(CacheEvent::Removed(id)),
            ProductEvent::Failed(message) => self.cache.apply(CacheEvent::Failed(message)),
        }
    }

    pub fn clear_selected(&mut self) {
        self.cache.set_selected(None);
    }

    pub fn clear_search_results(&mut self) {
        self.search_results.clear();
        self.cache.mark_settled();
    }

    pub fn clear_error(&mut self) {
        self.cache.clear_error();
    }

    pub fn reset(&mut self) {
        self.cache.reset();
        self.search_results.clear();
        self.category_products.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product {
            product_id: Some(id),
            product_name: name.to_string(),
            product_description: String::new(),
            price,
            stock: 10,
            category_id: None,
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_search_lands_in_secondary_collection() {
        let mut store = ProductStore::new();
        store.apply(ProductEvent::Fetched(vec![
            product(1, "Coffee", 3.5),
            product(2, "Tea", 2.5),
        ]));
        store.apply(ProductEvent::SearchFetched(vec![product(1, "Coffee", 3.5)]));

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.search_results().len(), 1);

        store.clear_search_results();
        assert!(store.search_results().is_empty());
        assert_eq!(store.items().len(), 2);
    }

    #[test]
    fn test_delete_leaves_stale_search_results() {
        let mut store = ProductStore::new();
        store.apply(ProductEvent::Fetched(vec![product(1, "Coffee", 3.5)]));
        store.apply(ProductEvent::SearchFetched(vec![product(1, "Coffee", 3.5)]));

        store.apply(ProductEvent::Removed(1));

        assert!(store.items().is_empty());
        // secondary collections are not reconciled
        assert_eq!(store.search_results().len(), 1);
    }
}
