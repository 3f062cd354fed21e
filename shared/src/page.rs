//! Pagination envelope returned by the remote list endpoints

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
///
/// Mirrors the server's Spring-style page shape: `content` holds exactly
/// one page's records, `number` is the zero-based page index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub size: i64,
    pub number: i64,
}
