//! Remote API surface
//!
//! One trait per entity so tests can mock exactly what they need;
//! [`AdminApi`] bundles them for consumers that want the whole console
//! surface behind one object.

mod auth;
mod categories;
mod order_items;
mod orders;
mod payment_methods;
mod products;

pub use auth::AuthApi;
pub use categories::CategoryApi;
pub use order_items::OrderItemApi;
pub use orders::OrderApi;
pub use payment_methods::PaymentMethodApi;
pub use products::ProductApi;

use std::sync::Arc;

use crate::{ClientConfig, HttpClient, TokenStorage};

/// The full remote operation set consumed by the operation façade
pub trait AdminApi:
    AuthApi + CategoryApi + ProductApi + OrderApi + OrderItemApi + PaymentMethodApi
{
}

impl<T> AdminApi for T where
    T: AuthApi + CategoryApi + ProductApi + OrderApi + OrderItemApi + PaymentMethodApi
{
}

/// REST implementation of the API traits over [`HttpClient`]
#[derive(Clone)]
pub struct RestClient {
    http: HttpClient,
}

impl RestClient {
    /// Create a REST client from configuration and token storage
    pub fn new(config: &ClientConfig, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            http: HttpClient::new(config, storage),
        }
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
