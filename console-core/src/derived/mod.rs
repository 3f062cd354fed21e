//! Derived views
//!
//! Pure functions over cache snapshots. Nothing here is stored; callers
//! memoize zero-argument derivations through [`crate::Memo`] keyed on
//! the store version.

pub mod categories;
pub mod order_items;
pub mod orders;
pub mod products;

/// Top `n` records by a float key, descending. The sort is stable, so
/// equal keys keep their collection order; `n` past the length returns
/// the whole collection.
pub fn top_n_by<T: Clone>(items: &[T], n: usize, key: impl Fn(&T) -> f64) -> Vec<T> {
    let mut sorted: Vec<T> = items.to_vec();
    sorted.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(std::cmp::Ordering::Equal));
    sorted.truncate(n);
    sorted
}

/// The `page`-th slice of size `size`. Pages past the end are empty;
/// indices are not clamped.
pub fn paginate<T: Clone>(items: &[T], page: usize, size: usize) -> Vec<T> {
    let start = page.saturating_mul(size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + size).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_stable_desc_and_truncation() {
        let amounts = [10.0, 30.0, 20.0];
        assert_eq!(top_n_by(&amounts, 2, |a| *a), vec![30.0, 20.0]);
        assert_eq!(top_n_by(&amounts, 10, |a| *a), vec![30.0, 20.0, 10.0]);

        // equal keys keep collection order
        let pairs = [(1, 5.0), (2, 5.0), (3, 9.0)];
        let top = top_n_by(&pairs, 3, |p| p.1);
        assert_eq!(top, vec![(3, 9.0), (1, 5.0), (2, 5.0)]);
    }

    #[test]
    fn test_paginate_slices_without_clamping() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(paginate(&items, 0, 2), vec![1, 2]);
        assert_eq!(paginate(&items, 1, 2), vec![3, 4]);
        assert_eq!(paginate(&items, 2, 2), vec![5]);
        assert!(paginate(&items, 3, 2).is_empty());
        assert!(paginate::<i32>(&[], 0, 2).is_empty());
    }
}
