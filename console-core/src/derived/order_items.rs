//! Order item derivations

use std::collections::HashMap;

use shared::models::OrderItem;

use super::top_n_by;

/// Aggregate figures over the line-item collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderItemStats {
    pub count: usize,
    pub total_quantity: i64,
    /// Σ quantity · price
    pub total_amount: f64,
    /// 0 when the collection is empty
    pub average_price: f64,
    /// 0 when the collection is empty
    pub average_quantity: f64,
}

pub fn stats(items: &[OrderItem]) -> OrderItemStats {
    let count = items.len();
    let total_quantity: i64 = items.iter().map(|i| i.quantity).sum();
    let total_price: f64 = items.iter().map(|i| i.price).sum();
    OrderItemStats {
        count,
        total_quantity,
        total_amount: items.iter().map(OrderItem::line_amount).sum(),
        average_price: if count == 0 {
            0.0
        } else {
            total_price / count as f64
        },
        average_quantity: if count == 0 {
            0.0
        } else {
            total_quantity as f64 / count as f64
        },
    }
}

/// Accumulated quantity per product id
pub fn quantity_by_product(items: &[OrderItem]) -> HashMap<i64, i64> {
    let mut quantities = HashMap::new();
    for item in items {
        *quantities.entry(item.product_id).or_insert(0) += item.quantity;
    }
    quantities
}

/// Accumulated line amount per product id
pub fn amount_by_product(items: &[OrderItem]) -> HashMap<i64, f64> {
    let mut amounts = HashMap::new();
    for item in items {
        *amounts.entry(item.product_id).or_insert(0.0) += item.line_amount();
    }
    amounts
}

/// Top `n` products by accumulated line amount, stable descending.
///
/// Products rank in order of first appearance when amounts tie.
pub fn top_selling_products(items: &[OrderItem], n: usize) -> Vec<(i64, f64)> {
    let mut totals: Vec<(i64, f64)> = Vec::new();
    for item in items {
        match totals.iter_mut().find(|(product_id, _)| *product_id == item.product_id) {
            Some((_, amount)) => *amount += item.line_amount(),
            None => totals.push((item.product_id, item.line_amount())),
        }
    }
    top_n_by(&totals, n, |(_, amount)| *amount)
}

/// Inclusive unit-price bounds
pub fn filter_by_price_range(items: &[OrderItem], min: f64, max: f64) -> Vec<OrderItem> {
    items
        .iter()
        .filter(|i| i.price >= min && i.price <= max)
        .cloned()
        .collect()
}

/// Inclusive quantity bounds
pub fn filter_by_quantity_range(items: &[OrderItem], min: i64, max: i64) -> Vec<OrderItem> {
    items
        .iter()
        .filter(|i| i.quantity >= min && i.quantity <= max)
        .cloned()
        .collect()
}

/// Largest quantity first, stable
pub fn sort_by_quantity_desc(items: &[OrderItem]) -> Vec<OrderItem> {
    top_n_by(items, items.len(), |i| i.quantity as f64)
}

/// Largest line amount first, stable
pub fn sort_by_amount_desc(items: &[OrderItem]) -> Vec<OrderItem> {
    top_n_by(items, items.len(), OrderItem::line_amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i64, quantity: i64, price: f64) -> OrderItem {
        OrderItem {
            order_id: 1,
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
    fn test_stats_empty_collection_yields_zeroes() {
        let s = stats(&[]);
        assert_eq!(s.average_price, 0.0);
        assert_eq!(s.average_quantity, 0.0);
        assert_eq!(s.total_amount, 0.0);
    }

    #[test]
    fn test_stats_totals() {
        let items = vec![item(10, 2, 5.0), item(11, 1, 10.0)];
        let s = stats(&items);
        assert_eq!(s.count, 2);
        assert_eq!(s.total_quantity, 3);
        assert_eq!(s.total_amount, 20.0);
        assert_eq!(s.average_price, 7.5);
        assert_eq!(s.average_quantity, 1.5);
    }

    #[test]
    fn test_per_product_maps_accumulate() {
        let items = vec![item(10, 2, 5.0), item(10, 3, 5.0), item(11, 1, 10.0)];
        assert_eq!(quantity_by_product(&items).get(&10), Some(&5));
        assert_eq!(amount_by_product(&items).get(&10), Some(&25.0));
    }

    #[test]
    fn test_top_selling_products() {
        let items = vec![item(10, 2, 5.0), item(11, 1, 30.0), item(10, 1, 5.0)];
        let top = top_selling_products(&items, 1);
        assert_eq!(top, vec![(11, 30.0)]);

        let all = top_selling_products(&items, 10);
        assert_eq!(all, vec![(11, 30.0), (10, 15.0)]);
    }

    #[test]
    fn test_quantity_range_is_inclusive() {
        let items = vec![item(10, 2, 5.0), item(11, 5, 5.0)];
        assert_eq!(filter_by_quantity_range(&items, 2, 5).len(), 2);
        assert_eq!(filter_by_quantity_range(&items, 3, 4).len(), 0);
    }
}
