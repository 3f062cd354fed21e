//! State and derived-data layer for the storefront admin console
//!
//! Per-entity caches with explicit lifecycle transitions, a memoized
//! derived-view engine, the session store, and the [`Console`] façade
//! that drives the remote API and applies cache transitions.

pub mod cache;
pub mod console;
pub mod derived;
pub mod error;
pub mod memo;
pub mod session;
pub mod store;

pub use cache::{CacheEvent, CacheStatus, Entity, EntityCache};
pub use console::Console;
pub use error::{AuthError, ConsoleError, ConsoleResult};
pub use memo::Memo;
pub use session::{SessionState, TokenSet};
