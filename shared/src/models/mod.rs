//! Entity DTOs
//!
//! Shared between the HTTP transport and the state layer. Field names
//! follow the remote API's camelCase wire format; all server-assigned
//! IDs are `i64` and absent (`None`) until first persisted.

pub mod category;
pub mod order;
pub mod order_item;
pub mod payment_method;
pub mod product;

// Re-exports
pub use category::*;
pub use order::*;
pub use order_item::*;
pub use payment_method::*;
pub use product::*;
