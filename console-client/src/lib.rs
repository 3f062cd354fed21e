//! HTTP transport for the storefront admin console
//!
//! Wraps the remote REST API behind the [`AdminApi`] trait family:
//! bearer-token injection, transparent refresh of expired access
//! tokens, status-code classification and durable token storage.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod storage;

pub use api::{
    AdminApi, AuthApi, CategoryApi, OrderApi, OrderItemApi, PaymentMethodApi, ProductApi,
    RestClient,
};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage};
