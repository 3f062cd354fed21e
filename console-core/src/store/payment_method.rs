//! Payment method store: the generic cache unadorned

use shared::models::PaymentMethod;

use crate::cache::{CacheEvent, CacheStatus, EntityCache};

/// Payment method lifecycle and mutation events
#[derive(Debug, Clone)]
pub enum PaymentMethodEvent {
    Loading,
    Fetched(Vec<PaymentMethod>),
    OneFetched(PaymentMethod),
    Created(PaymentMethod),
    Updated(PaymentMethod),
    Removed(i64),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct PaymentMethodStore {
    cache: EntityCache<PaymentMethod>,
}

impl PaymentMethodStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[PaymentMethod] {
        self.cache.items()
    }

    pub fn selected(&self) -> Option<&PaymentMethod> {
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

    pub fn apply(&mut self, event: PaymentMethodEvent) {
        match event {
            PaymentMethodEvent::Loading => self.cache.apply(CacheEvent::Loading),
            PaymentMethodEvent::Fetched(items) => {
                self.cache.apply(CacheEvent::ListFetched(items));
            }
            PaymentMethodEvent::OneFetched(item) => {
                self.cache.apply(CacheEvent::OneFetched(item));
            }
            PaymentMethodEvent::Created(item) => self.cache.apply(CacheEvent::Created(item)),
            PaymentMethodEvent::Updated(item) => self.cache.apply(CacheEvent::Updated(item)),
            PaymentMethodEvent::Removed(id) => self.cache.apply(CacheEvent::Removed(id)),
            PaymentMethodEvent::Failed(message) => {
                self.cache.apply(CacheEvent::Failed(message));
            }
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
    }
}
