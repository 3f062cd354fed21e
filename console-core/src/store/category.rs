//! Category store
//!
//! Adds the parent/child secondary lists on top of the generic cache.
//! The secondary lists are updated by the event that fetched or mutated
//! them and are otherwise left alone; they are not reconciled against
//! `items` after unrelated mutations.

use shared::models::Category;

use crate::cache::{CacheEvent, CacheStatus, EntityCache};

/// Category lifecycle and mutation events
#[derive(Debug, Clone)]
pub enum CategoryEvent {
    Loading,
    Fetched(Vec<Category>),
    OneFetched(Category),
    /// Keyword search replaces the primary collection
    SearchFetched(Vec<Category>),
    ParentsFetched(Vec<Category>),
    ChildrenFetched(Vec<Category>),
    ParentCreated(Category),
    ParentUpdated(Category),
    ParentRemoved(i64),
    ChildCreated(Category),
    ChildUpdated(Category),
    ChildRemoved(i64),
    Failed(String),
}

/// Category cache plus hierarchy secondary collections
#[derive(Debug, Default)]
pub struct CategoryStore {
    cache: EntityCache<Category>,
    parents: Vec<Category>,
    children: Vec<Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Category] {
        self.cache.items()
    }

    pub fn selected(&self) -> Option<&Category> {
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

    pub fn parents(&self) -> &[Category] {
        &self.parents
    }

    pub fn children(&self) -> &[Category] {
        &self.children
    }

    pub fn apply(&mut self, event: CategoryEvent) {
        match event {
            CategoryEvent::Loading => self.cache.apply(CacheEvent::Loading),
            CategoryEvent::Fetched(items) => self.cache.apply(CacheEvent::ListFetched(items)),
            CategoryEvent::OneFetched(item) => self.cache.apply(CacheEvent::OneFetched(item)),
            CategoryEvent::SearchFetched(items) => {
                self.cache.apply(CacheEvent::ListFetched(items));
            }
            CategoryEvent::ParentsFetched(parents) => {
                self.parents = parents;
                self.cache.mark_settled();
            }
            CategoryEvent::ChildrenFetched(children) => {
                self.children = children;
                self.cache.mark_settled();
            }
            CategoryEvent::ParentCreated(category) => {
                self.parents.push(category.clone());
                self.cache.apply(CacheEvent::Created(category));
            }
            CategoryEvent::ParentUpdated(category) => {
                replace_by_id(&mut self.parents, &category);
                self.cache.apply(CacheEvent::Updated(category));
            }
            CategoryEvent::ParentRemoved(id) => {
                self.parents.retain(|c| c.category_id != Some(id));
                self.cache.apply(CacheEvent::Removed(id));
            }
            CategoryEvent::ChildCreated(category) => {
                self.children.push(category.clone());
                self.cache.apply(CacheEvent::Created(category));
            }
            CategoryEvent::ChildUpdated(category) => {
                replace_by_id(&mut self.children, &category);
                self.cache.apply(CacheEvent::Updated(category));
            }
            CategoryEvent::ChildRemoved(id) => {
                self.children.retain(|c| c.category_id != Some(id));
                self.cache.apply(CacheEvent::Removed(id));
            }
            CategoryEvent::Failed(message) => self.cache.apply(CacheEvent::Failed(message)),
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
        self.parents.clear();
        self.children.clear();
    }
}

fn replace_by_id(list: &mut [Category], category: &Category) {
    if let Some(slot) = list
        .iter_mut()
        .find(|c| c.category_id == category.category_id && c.category_id.is_some())
    {
        *slot = category.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str, parent: Option<i64>) -> Category {
        Category {
            category_id: Some(id),
            category_name: name.to_string(),
            category_description: String::new(),
            parent_category_id: parent,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_search_replaces_items() {
        let mut store = CategoryStore::new();
        store.apply(CategoryEvent::Fetched(vec![
            category(1, "Drinks", None),
            category(2, "Food", None),
        ]));
        store.apply(CategoryEvent::SearchFetched(vec![category(1, "Drinks", None)]));

        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_parent_delete_leaves_stale_children_list() {
        let mut store = CategoryStore::new();
        store.apply(CategoryEvent::Fetched(vec![
            category(1, "Drinks", None),
            category(2, "Sodas", Some(1)),
        ]));
        store.apply(CategoryEvent::ParentsFetched(vec![category(1, "Drinks", None)]));
        store.apply(CategoryEvent::ChildrenFetched(vec![category(2, "Sodas", Some(1))]));

        store.apply(CategoryEvent::ParentRemoved(1));

        assert!(store.parents().is_empty());
        assert!(store.items().iter().all(|c| c.category_id != Some(1)));
        // previously fetched children list is not reconciled
        assert_eq!(store.children().len(), 1);
    }

    #[test]
    fn test_reset_clears_secondary_lists() {
        let mut store = CategoryStore::new();
        store.apply(CategoryEvent::ParentsFetched(vec![category(1, "Drinks", None)]));
        store.apply(CategoryEvent::ChildrenFetched(vec![category(2, "Sodas", Some(1))]));

        store.reset();
        assert!(store.parents().is_empty());
        assert!(store.children().is_empty());
        assert!(store.items().is_empty());
    }
}
