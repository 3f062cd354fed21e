//! Generic entity cache
//!
//! One in-memory holder per entity type: the fetched records, the
//! selected record, and the request-lifecycle status. All mutation goes
//! through [`EntityCache::apply`] with a closed event type, so every
//! transition is spelled out in one exhaustive match.

use shared::util::now_millis;

/// Identity abstraction over the cached entity types.
///
/// `key` returns `None` for records the server has not assigned an id
/// yet; such records never participate in upsert/replace matching.
pub trait Entity: Clone {
    type Key: PartialEq + Clone;

    fn key(&self) -> Option<Self::Key>;
}

/// Request-lifecycle status of a cache
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CacheStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl CacheStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CacheStatus::Loading)
    }

    /// The error message, when the last operation failed
    pub fn error(&self) -> Option<&str> {
        match self {
            CacheStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Lifecycle transition consumed by [`EntityCache::apply`]
#[derive(Clone)]
pub enum CacheEvent<T: Entity> {
    /// An async operation started
    Loading,
    /// A list fetch settled; replaces the collection wholesale
    ListFetched(Vec<T>),
    /// A single-record fetch settled; becomes the selected record
    OneFetched(T),
    /// A create settled with the server-assigned record
    Created(T),
    /// An update settled with the fresh record
    Updated(T),
    /// A delete settled
    Removed(T::Key),
    /// An operation failed with a display message
    Failed(String),
}

/// In-memory cache of one entity type
#[derive(Debug, Clone)]
pub struct EntityCache<T: Entity> {
    items: Vec<T>,
    selected: Option<T>,
    status: CacheStatus,
    last_updated: Option<i64>,
    version: u64,
}

impl<T: Entity> Default for EntityCache<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            status: CacheStatus::Idle,
            last_updated: None,
            version: 0,
        }
    }
}

impl<T: Entity> EntityCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn status(&self) -> &CacheStatus {
        &self.status
    }

    pub fn last_updated(&self) -> Option<i64> {
        self.last_updated
    }

    /// Monotonic change counter; bumped on every applied event.
    ///
    /// Derived-view memos key on this to decide whether a cached value
    /// is still current.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a lifecycle transition
    pub fn apply(&mut self, event: CacheEvent<T>) {
        match event {
            CacheEvent::Loading => {
                self.status = CacheStatus::Loading;
            }
            CacheEvent::ListFetched(items) => {
                self.items = items;
                self.status = CacheStatus::Idle;
                self.last_updated = Some(now_millis());
            }
            CacheEvent::OneFetched(item) => {
                self.selected = Some(item);
                self.status = CacheStatus::Idle;
                self.last_updated = Some(now_millis());
            }
            CacheEvent::Created(item) => {
                self.upsert(item);
                self.status = CacheStatus::Idle;
                self.last_updated = Some(now_millis());
            }
            CacheEvent::Updated(item) => {
                self.replace(item);
                self.status = CacheStatus::Idle;
                self.last_updated = Some(now_millis());
            }
            CacheEvent::Removed(key) => {
                self.items.retain(|item| item.key() != Some(key.clone()));
                if self.selected.as_ref().and_then(Entity::key) == Some(key) {
                    self.selected = None;
                }
                self.status = CacheStatus::Idle;
                self.last_updated = Some(now_millis());
            }
            CacheEvent::Failed(message) => {
                self.status = CacheStatus::Error(message);
            }
        }
        self.version += 1;
    }

    /// Replace by key when present, append otherwise. Keeps the
    /// collection free of duplicate identities even when the server
    /// echoes a create for a record we already hold.
    fn upsert(&mut self, item: T) {
        match item.key() {
            Some(key) => match self.items.iter_mut().find(|i| i.key() == Some(key.clone())) {
                Some(slot) => *slot = item,
                None => self.items.push(item),
            },
            None => self.items.push(item),
        }
    }

    /// Replace the matching record in place; also refreshes a selected
    /// record with the same identity. An update for an unknown key is
    /// appended so the fresh record is not lost.
    fn replace(&mut self, item: T) {
        let Some(key) = item.key() else {
            return;
        };
        if self.selected.as_ref().and_then(Entity::key) == Some(key.clone()) {
            self.selected = Some(item.clone());
        }
        match self.items.iter_mut().find(|i| i.key() == Some(key.clone())) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
    }

    pub fn set_selected(&mut self, item: Option<T>) {
        self.selected = item;
        self.version += 1;
    }

    /// Settle an operation that only touched state outside this cache
    /// (secondary collections). Status goes idle, the version bump
    /// invalidates memos.
    pub fn mark_settled(&mut self) {
        self.status = CacheStatus::Idle;
        self.last_updated = Some(now_millis());
        self.version += 1;
    }

    /// Drop the error status, keeping items and selection
    pub fn clear_error(&mut self) {
        if matches!(self.status, CacheStatus::Error(_)) {
            self.status = CacheStatus::Idle;
            self.version += 1;
        }
    }

    /// Return to the empty initial state. Idempotent.
    pub fn reset(&mut self) {
        self.items.clear();
        self.selected = None;
        self.status = CacheStatus::Idle;
        self.last_updated = None;
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: Option<i64>,
        name: String,
    }

    impl Entity for Widget {
        type Key = i64;

        fn key(&self) -> Option<i64> {
            self.id
        }
    }

    fn widget(id: i64, name: &str) -> Widget {
        Widget {
            id: Some(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_create_upserts_by_identity() {
        let mut cache = EntityCache::new();
        cache.apply(CacheEvent::Created(widget(1, "a")));
        cache.apply(CacheEvent::Created(widget(2, "b")));
        cache.apply(CacheEvent::Created(widget(1, "a2")));

        assert_eq!(cache.items().len(), 2);
        assert_eq!(cache.items()[0].name, "a2");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut cache = EntityCache::new();
        cache.apply(CacheEvent::ListFetched(vec![
            widget(1, "a"),
            widget(2, "b"),
            widget(3, "c"),
        ]));
        cache.apply(CacheEvent::Updated(widget(2, "b2")));

        assert_eq!(cache.items().len(), 3);
        assert_eq!(cache.items()[1], widget(2, "b2"));
    }

    #[test]
    fn test_update_refreshes_matching_selected() {
        let mut cache = EntityCache::new();
        cache.apply(CacheEvent::ListFetched(vec![widget(1, "a")]));
        cache.apply(CacheEvent::OneFetched(widget(1, "a")));
        cache.apply(CacheEvent::Updated(widget(1, "a2")));

        assert_eq!(cache.selected(), Some(&widget(1, "a2")));
    }

    #[test]
    fn test_remove_clears_matching_selected() {
        let mut cache = EntityCache::new();
        cache.apply(CacheEvent::ListFetched(vec![widget(1, "a"), widget(2, "b")]));
        cache.apply(CacheEvent::OneFetched(widget(1, "a")));
        cache.apply(CacheEvent::Removed(1));

        assert_eq!(cache.items().len(), 1);
        assert!(cache.selected().is_none());

        // removing an unrelated record leaves the selection alone
        cache.apply(CacheEvent::OneFetched(widget(2, "b")));
        cache.apply(CacheEvent::Removed(99));
        assert!(cache.selected().is_some());
    }

    #[test]
    fn test_failed_keeps_items() {
        let mut cache = EntityCache::new();
        cache.apply(CacheEvent::ListFetched(vec![widget(1, "a")]));
        cache.apply(CacheEvent::Failed("boom".to_string()));

        assert_eq!(cache.status().error(), Some("boom"));
        assert_eq!(cache.items().len(), 1);

        cache.clear_error();
        assert_eq!(*cache.status(), CacheStatus::Idle);
        assert_eq!(cache.items().len(), 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut cache = EntityCache::new();
        cache.apply(CacheEvent::ListFetched(vec![widget(1, "a")]));
        cache.apply(CacheEvent::OneFetched(widget(1, "a")));

        cache.reset();
        let items_after_one = cache.items().to_vec();
        let selected_after_one = cache.selected().cloned();
        cache.reset();

        assert!(cache.items().is_empty());
        assert_eq!(cache.items().to_vec(), items_after_one);
        assert_eq!(cache.selected().cloned(), selected_after_one);
        assert_eq!(*cache.status(), CacheStatus::Idle);
        assert_eq!(cache.last_updated(), None);
    }

    #[test]
    fn test_version_bumps_on_every_event() {
        let mut cache = EntityCache::new();
        let v0 = cache.version();
        cache.apply(CacheEvent::Loading);
        cache.apply(CacheEvent::ListFetched(vec![widget(1, "a")]));
        assert_eq!(cache.version(), v0 + 2);
    }
}
