//! Construction and storage behavior that needs no live server.

use std::sync::Arc;

use console_client::{ClientConfig, FileTokenStorage, RestClient, TokenStorage};
use shared::auth::StoredTokens;

#[test]
fn test_config_from_env_falls_back_to_default() {
    // no ADMIN_API_BASE_URL set in the test environment
    if std::env::var("ADMIN_API_BASE_URL").is_err() {
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, shared::DEFAULT_API_BASE_URL);
    }

    let config = ClientConfig::new("http://example.com/api").with_timeout(5);
    assert_eq!(config.timeout, 5);
}

#[tokio::test]
async fn test_client_shares_storage_with_caller() {
    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn TokenStorage> = Arc::new(FileTokenStorage::new(dir.path()));
    let client = RestClient::new(&ClientConfig::new("http://localhost:1/api"), storage.clone());

    storage.store(&StoredTokens {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        token_type: "Bearer".to_string(),
    });

    // the client reads the same durable slots the caller wrote
    assert_eq!(
        client.http().storage().access_token().as_deref(),
        Some("access")
    );

    storage.clear();
    assert!(client.http().storage().load().is_none());
}
