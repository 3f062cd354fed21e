//! Shared types for the storefront admin console
//!
//! Entity DTOs, auth request/response types, the pagination envelope
//! and small utilities used by both the transport and the state layers.

pub mod auth;
pub mod models;
pub mod page;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use page::Page;

/// Default remote API base URL (overridable via `ADMIN_API_BASE_URL`)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
