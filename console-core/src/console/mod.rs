//! Operation façade
//!
//! One [`Console`] instance owns every store behind a `tokio` RwLock
//! and drives the remote API. Constructed once at startup and injected;
//! there is no ambient global state. The impl blocks are split across
//! per-concern files.
//!
//! Every entity-mutating operation follows the same shape: precondition
//! check against durable token storage, `Loading` transition, remote
//! call, then the success event or the failure transition. A server
//! authorization denial runs the forced-logout cascade before the error
//! is surfaced. Concurrent operations on one store are not serialized
//! beyond the write lock for each transition; the last one to settle
//! wins.

mod auth;
mod categories;
mod order_items;
mod orders;
mod payment_methods;
mod products;
mod snapshots;

pub use snapshots::{
    CategorySnapshot, OrderItemSnapshot, OrderSnapshot, PaymentMethodSnapshot, ProductSnapshot,
    SessionSnapshot,
};

use std::sync::Arc;

use tokio::sync::RwLock;

use console_client::{AdminApi, TokenStorage};

use crate::derived::categories::CategoryStats;
use crate::derived::order_items::OrderItemStats;
use crate::derived::orders::OrderStats;
use crate::derived::products::ProductStats;
use crate::error::{ConsoleError, ConsoleResult};
use crate::memo::Memo;
use crate::session::SessionState;
use crate::store::{CategoryStore, OrderItemStore, OrderStore, PaymentMethodStore, ProductStore};

/// The admin console state tree and its operations
pub struct Console {
    api: Arc<dyn AdminApi>,
    storage: Arc<dyn TokenStorage>,
    session: RwLock<SessionState>,
    categories: RwLock<CategoryStore>,
    products: RwLock<ProductStore>,
    orders: RwLock<OrderStore>,
    order_items: RwLock<OrderItemStore>,
    payment_methods: RwLock<PaymentMethodStore>,
    category_stats: Memo<CategoryStats>,
    product_stats: Memo<ProductStats>,
    order_stats: Memo<OrderStats>,
    order_item_stats: Memo<OrderItemStats>,
}

impl Console {
    pub fn new(api: Arc<dyn AdminApi>, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            api,
            storage,
            session: RwLock::new(SessionState::new()),
            categories: RwLock::new(CategoryStore::new()),
            products: RwLock::new(ProductStore::new()),
            orders: RwLock::new(OrderStore::new()),
            order_items: RwLock::new(OrderItemStore::new()),
            payment_methods: RwLock::new(PaymentMethodStore::new()),
            category_stats: Memo::new(),
            product_stats: Memo::new(),
            order_stats: Memo::new(),
            order_item_stats: Memo::new(),
        }
    }

    /// Precondition for every entity operation: a stored access token.
    /// Fails locally, before anything reaches the network.
    fn require_token(&self) -> ConsoleResult<()> {
        match self.storage.load() {
            Some(tokens) if !tokens.access_token.is_empty() => Ok(()),
            _ => Err(ConsoleError::NoAccessToken),
        }
    }

    /// Display message recorded in a store after a failed operation.
    /// Server-supplied messages are already embedded in the classified
    /// variants; everything else falls back to the variant text.
    fn failure_message(error: &console_client::ClientError) -> String {
        use console_client::ClientError;
        match error {
            ClientError::Forbidden(message)
            | ClientError::NotFound(message)
            | ClientError::Validation(message)
            | ClientError::Internal(message)
            | ClientError::InvalidResponse(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Forced-logout cascade: session reset, durable tokens cleared,
    /// every entity store back to its initial state. Idempotent.
    pub(crate) async fn force_logout(&self) {
        self.session.write().await.reset();
        self.storage.clear();
        self.categories.write().await.reset();
        self.products.write().await.reset();
        self.orders.write().await.reset();
        self.order_items.write().await.reset();
        self.payment_methods.write().await.reset();
        tracing::info!("Session cleared");
    }
}
