//! Product derivations

use std::collections::{HashMap, HashSet};

use shared::models::Product;

/// Stock level at or below which a product counts as low-stock
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Aggregate figures over the product collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductStats {
    pub count: usize,
    /// Σ price · stock
    pub total_stock_value: f64,
    /// 0 when the collection is empty
    pub average_price: f64,
    pub out_of_stock: usize,
    pub low_stock: usize,
    pub category_count: usize,
}

pub fn stats(items: &[Product]) -> ProductStats {
    let count = items.len();
    let total_price: f64 = items.iter().map(|p| p.price).sum();
    let categories: HashSet<i64> = items.iter().filter_map(|p| p.category_id).collect();
    ProductStats {
        count,
        total_stock_value: items.iter().map(|p| p.price * p.stock as f64).sum(),
        average_price: if count == 0 {
            0.0
        } else {
            total_price / count as f64
        },
        out_of_stock: items.iter().filter(|p| p.stock == 0).count(),
        low_stock: items
            .iter()
            .filter(|p| p.stock > 0 && p.stock <= LOW_STOCK_THRESHOLD)
            .count(),
        category_count: categories.len(),
    }
}

/// Inclusive price bounds
pub fn filter_by_price_range(items: &[Product], min: f64, max: f64) -> Vec<Product> {
    items
        .iter()
        .filter(|p| p.price >= min && p.price <= max)
        .cloned()
        .collect()
}

/// Products holding at least `min` units
pub fn filter_by_stock(items: &[Product], min: i64) -> Vec<Product> {
    items.iter().filter(|p| p.stock >= min).cloned().collect()
}

pub fn out_of_stock(items: &[Product]) -> Vec<Product> {
    items.iter().filter(|p| p.stock == 0).cloned().collect()
}

pub fn low_stock(items: &[Product]) -> Vec<Product> {
    items
        .iter()
        .filter(|p| p.stock > 0 && p.stock <= LOW_STOCK_THRESHOLD)
        .cloned()
        .collect()
}

/// Product count per category id; uncategorized products are skipped
pub fn category_distribution(items: &[Product]) -> HashMap<i64, usize> {
    let mut distribution = HashMap::new();
    for product in items {
        if let Some(category_id) = product.category_id {
            *distribution.entry(category_id).or_insert(0) += 1;
        }
    }
    distribution
}

/// Ascending by price, stable
pub fn sort_by_price(items: &[Product]) -> Vec<Product> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Ascending by stock, stable
pub fn sort_by_stock(items: &[Product]) -> Vec<Product> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|p| p.stock);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, stock: i64, category: Option<i64>) -> Product {
        Product {
            product_id: Some(id),
            product_name: format!("p{}", id),
            product_description: String::new(),
            price,
            stock,
            category_id: category,
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_stats_empty_collection_yields_zeroes() {
        let s = stats(&[]);
        assert_eq!(s.average_price, 0.0);
        assert_eq!(s.total_stock_value, 0.0);
        assert_eq!(s.count, 0);
    }

    #[test]
    fn test_stats_counts() {
        let items = vec![
            product(1, 10.0, 0, Some(1)),
            product(2, 20.0, 5, Some(1)),
            product(3, 30.0, 50, Some(2)),
        ];
        let s = stats(&items);
        assert_eq!(s.count, 3);
        assert_eq!(s.average_price, 20.0);
        assert_eq!(s.total_stock_value, 20.0 * 5.0 + 30.0 * 50.0);
        assert_eq!(s.out_of_stock, 1);
        assert_eq!(s.low_stock, 1);
        assert_eq!(s.category_count, 2);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let items = vec![product(1, 10.0, 1, None), product(2, 20.0, 1, None)];
        let filtered = filter_by_price_range(&items, 10.0, 20.0);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filter_by_price_range(&items, 10.1, 19.9).len(), 0);
    }

    #[test]
    fn test_category_distribution_skips_uncategorized() {
        let items = vec![
            product(1, 1.0, 1, Some(7)),
            product(2, 1.0, 1, Some(7)),
            product(3, 1.0, 1, None),
        ];
        let distribution = category_distribution(&items);
        assert_eq!(distribution.get(&7), Some(&2));
        assert_eq!(distribution.len(), 1);
    }

    #[test]
    fn test_sorts_are_ascending() {
        let items = vec![
            product(1, 30.0, 3, None),
            product(2, 10.0, 1, None),
            product(3, 20.0, 2, None),
        ];
        let by_price = sort_by_price(&items);
        assert_eq!(by_price[0].product_id, Some(2));
        assert_eq!(by_price[2].product_id, Some(1));

        let by_stock = sort_by_stock(&items);
        assert_eq!(by_stock[0].stock, 1);
        assert_eq!(by_stock[2].stock, 3);
    }
}
