//! Version-keyed memoization for derived views
//!
//! A [`Memo`] slot holds the last computed value together with the
//! cache version it was computed from. While the version is unchanged
//! the cached value is returned; any store mutation bumps the version
//! and invalidates only that store's memos.

use std::sync::Mutex;

/// One memoized derived value
#[derive(Debug, Default)]
pub struct Memo<O: Clone> {
    slot: Mutex<Option<(u64, O)>>,
}

impl<O: Clone> Memo<O> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value when `version` matches, otherwise
    /// compute, cache and return a fresh one.
    pub fn get_or_compute(&self, version: u64, compute: impl FnOnce() -> O) -> O {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((cached_version, value)) = slot.as_ref() {
            if *cached_version == version {
                return value.clone();
            }
        }
        let value = compute();
        *slot = Some((version, value.clone()));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_memo_reuses_until_version_changes() {
        let memo: Memo<usize> = Memo::new();
        let computed = AtomicUsize::new(0);
        let compute = || {
            computed.fetch_add(1, Ordering::SeqCst);
            42
        };

        assert_eq!(memo.get_or_compute(1, compute), 42);
        assert_eq!(memo.get_or_compute(1, compute), 42);
        assert_eq!(computed.load(Ordering::SeqCst), 1);

        assert_eq!(memo.get_or_compute(2, compute), 42);
        assert_eq!(computed.load(Ordering::SeqCst), 2);
    }
}
