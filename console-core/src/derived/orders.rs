//! Order derivations

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use shared::models::Order;

use super::top_n_by;

/// Aggregate figures over the order collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderStats {
    pub count: usize,
    pub total_amount: f64,
    /// 0 when the collection is empty
    pub average_amount: f64,
    pub status_distribution: HashMap<String, usize>,
}

/// Count and amount for one calendar day
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyStats {
    pub count: usize,
    pub amount: f64,
}

pub fn stats(items: &[Order]) -> OrderStats {
    let count = items.len();
    let total_amount: f64 = items.iter().map(|o| o.total_amount).sum();
    let mut status_distribution = HashMap::new();
    for order in items {
        *status_distribution.entry(order.status.clone()).or_insert(0) += 1;
    }
    OrderStats {
        count,
        total_amount,
        average_amount: if count == 0 {
            0.0
        } else {
            total_amount / count as f64
        },
        status_distribution,
    }
}

/// Order count per status
pub fn count_by_status(items: &[Order]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for order in items {
        *counts.entry(order.status.clone()).or_insert(0) += 1;
    }
    counts
}

/// Accumulated amount per status
pub fn amount_by_status(items: &[Order]) -> HashMap<String, f64> {
    let mut amounts = HashMap::new();
    for order in items {
        *amounts.entry(order.status.clone()).or_insert(0.0) += order.total_amount;
    }
    amounts
}

/// Count and amount bucketed by the calendar date of `order_date`
pub fn daily_stats(items: &[Order]) -> HashMap<NaiveDate, DailyStats> {
    let mut buckets: HashMap<NaiveDate, DailyStats> = HashMap::new();
    for order in items {
        let bucket = buckets.entry(order.order_date.date_naive()).or_default();
        bucket.count += 1;
        bucket.amount += order.total_amount;
    }
    buckets
}

/// Top `n` orders by amount, stable descending
pub fn top_orders(items: &[Order], n: usize) -> Vec<Order> {
    top_n_by(items, n, |o| o.total_amount)
}

/// Top `n` users by accumulated order amount, stable descending.
///
/// Users enter the ranking in order of first appearance, so ties keep
/// that order.
pub fn top_users(items: &[Order], n: usize) -> Vec<(i64, f64)> {
    let mut totals: Vec<(i64, f64)> = Vec::new();
    for order in items {
        match totals.iter_mut().find(|(user_id, _)| *user_id == order.user_id) {
            Some((_, amount)) => *amount += order.total_amount,
            None => totals.push((order.user_id, order.total_amount)),
        }
    }
    top_n_by(&totals, n, |(_, amount)| *amount)
}

/// Inclusive date bounds
pub fn filter_by_date_range(
    items: &[Order],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<Order> {
    items
        .iter()
        .filter(|o| o.order_date >= start && o.order_date <= end)
        .cloned()
        .collect()
}

/// Inclusive amount bounds
pub fn filter_by_amount_range(items: &[Order], min: f64, max: f64) -> Vec<Order> {
    items
        .iter()
        .filter(|o| o.total_amount >= min && o.total_amount <= max)
        .cloned()
        .collect()
}

/// Newest first, stable
pub fn sort_by_date_desc(items: &[Order]) -> Vec<Order> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    sorted
}

/// Largest first, stable
pub fn sort_by_amount_desc(items: &[Order]) -> Vec<Order> {
    top_n_by(items, items.len(), |o| o.total_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(id: i64, user: i64, amount: f64, status: &str, date: &str) -> Order {
        Order {
            order_id: Some(id),
            user_id: user,
            username: None,
            order_date: date.parse().unwrap_or_else(|_| Utc.timestamp_opt(0, 0).unwrap()),
            status: status.to_string(),
            total_amount: amount,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_stats_empty_collection_yields_zeroes() {
        let s = stats(&[]);
        assert_eq!(s.average_amount, 0.0);
        assert_eq!(s.total_amount, 0.0);
        assert!(s.status_distribution.is_empty());
    }

    #[test]
    fn test_stats_and_status_maps() {
        let items = vec![
            order(1, 1, 10.0, "PENDING", "2024-01-01T10:00:00Z"),
            order(2, 1, 30.0, "COMPLETED", "2024-01-01T12:00:00Z"),
            order(3, 2, 20.0, "PENDING", "2024-01-02T09:00:00Z"),
        ];
        let s = stats(&items);
        assert_eq!(s.count, 3);
        assert_eq!(s.total_amount, 60.0);
        assert_eq!(s.average_amount, 20.0);
        assert_eq!(s.status_distribution.get("PENDING"), Some(&2));

        assert_eq!(count_by_status(&items).get("COMPLETED"), Some(&1));
        assert_eq!(amount_by_status(&items).get("PENDING"), Some(&30.0));
    }

    #[test]
    fn test_daily_stats_buckets_by_calendar_date() {
        let items = vec![
            order(1, 1, 10.0, "PENDING", "2024-01-01T10:00:00Z"),
            order(2, 1, 30.0, "PENDING", "2024-01-01T23:59:59Z"),
            order(3, 2, 20.0, "PENDING", "2024-01-02T00:00:00Z"),
        ];
        let buckets = daily_stats(&items);
        let day1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&day1].count, 2);
        assert_eq!(buckets[&day1].amount, 40.0);
        assert_eq!(buckets[&day2].count, 1);
    }

    #[test]
    fn test_top_orders_stable_desc() {
        let items = vec![
            order(1, 1, 10.0, "PENDING", "2024-01-01T10:00:00Z"),
            order(2, 1, 30.0, "PENDING", "2024-01-01T10:00:00Z"),
            order(3, 2, 20.0, "PENDING", "2024-01-01T10:00:00Z"),
        ];
        let top2 = top_orders(&items, 2);
        assert_eq!(top2[0].total_amount, 30.0);
        assert_eq!(top2[1].total_amount, 20.0);

        let top10 = top_orders(&items, 10);
        assert_eq!(top10.len(), 3);
        assert_eq!(top10[2].total_amount, 10.0);
    }

    #[test]
    fn test_top_users_accumulates() {
        let items = vec![
            order(1, 1, 10.0, "PENDING", "2024-01-01T10:00:00Z"),
            order(2, 2, 15.0, "PENDING", "2024-01-01T10:00:00Z"),
            order(3, 1, 10.0, "PENDING", "2024-01-01T10:00:00Z"),
        ];
        let top = top_users(&items, 10);
        assert_eq!(top[0], (1, 20.0));
        assert_eq!(top[1], (2, 15.0));
    }

    #[test]
    fn test_range_filters_are_inclusive() {
        let items = vec![
            order(1, 1, 10.0, "PENDING", "2024-01-01T10:00:00Z"),
            order(2, 1, 20.0, "PENDING", "2024-01-05T10:00:00Z"),
        ];
        let start: DateTime<Utc> = "2024-01-01T10:00:00Z".parse().unwrap();
        let end: DateTime<Utc> = "2024-01-05T10:00:00Z".parse().unwrap();
        assert_eq!(filter_by_date_range(&items, start, end).len(), 2);
        assert_eq!(filter_by_amount_range(&items, 10.0, 20.0).len(), 2);
        assert_eq!(filter_by_amount_range(&items, 10.5, 19.5).len(), 0);
    }
}
