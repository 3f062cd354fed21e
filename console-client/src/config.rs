//! Client configuration

/// Client configuration for connecting to the admin REST API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8080/api/v1")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read the base URL from `ADMIN_API_BASE_URL`, falling back to the default
    pub fn from_env() -> Self {
        let base_url = std::env::var("ADMIN_API_BASE_URL")
            .unwrap_or_else(|_| shared::DEFAULT_API_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(shared::DEFAULT_API_BASE_URL)
    }
}
