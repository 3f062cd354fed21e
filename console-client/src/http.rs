//! HTTP client for the remote admin REST API
//!
//! Every authorized request goes through the token interceptor: an
//! expired access token is exchanged for a new pair before the request
//! leaves; refresh failure clears storage and fails the request. A 401
//! response likewise clears storage so a stale session never lingers.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use shared::auth::{AuthResponse, RefreshTokenRequest, StoredTokens, token_expiry};
use shared::models::ImageUpload;
use shared::util::now_millis;

use crate::{ClientConfig, ClientError, ClientResult, TokenStorage};

/// HTTP client for making network requests to the admin API
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    storage: Arc<dyn TokenStorage>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig, storage: Arc<dyn TokenStorage>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            storage,
        }
    }

    /// The token storage backing this client
    pub fn storage(&self) -> Arc<dyn TokenStorage> {
        self.storage.clone()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Resolve the bearer token for an authorized request.
    ///
    /// Exchanges an expired access token for a new pair when a refresh
    /// token is stored; otherwise clears storage and fails. Requests
    /// without stored tokens go out unauthenticated.
    async fn bearer(&self) -> ClientResult<Option<String>> {
        let Some(tokens) = self.storage.load() else {
            return Ok(None);
        };

        let now_secs = now_millis() / 1000;
        match token_expiry(&tokens.access_token) {
            Some(exp) if exp < now_secs => {
                if tokens.refresh_token.is_empty() {
                    self.storage.clear();
                    return Err(ClientError::Unauthorized);
                }
                let refreshed = self.refresh_token(&tokens.refresh_token).await;
                match refreshed {
                    Ok(response) => Ok(Some(response.token)),
                    Err(e) => {
                        tracing::warn!("Token refresh failed: {}", e);
                        self.storage.clear();
                        Err(ClientError::Unauthorized)
                    }
                }
            }
            Some(_) => Ok(Some(tokens.access_token)),
            None => {
                // undecodable token: treat as an invalid session
                self.storage.clear();
                Err(ClientError::Unauthorized)
            }
        }
    }

    /// Exchange a refresh token for a new token pair and persist it
    pub async fn refresh_token(&self, refresh_token: &str) -> ClientResult<AuthResponse> {
        let request = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        let response = self
            .client
            .post(self.url("/auth/refresh-token"))
            .json(&request)
            .send()
            .await?;
        let response: AuthResponse = self.handle_response(response).await?;

        self.storage.store(&StoredTokens {
            access_token: response.token.clone(),
            refresh_token: response.refresh_token.clone(),
            token_type: response.token_type.clone(),
        });
        tracing::debug!(username = %response.username, "Access token refreshed");

        Ok(response)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(token) = self.bearer().await? {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = self.bearer().await? {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with JSON body, discarding the response body
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = self.bearer().await? {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        self.handle_empty_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);
        if let Some(token) = self.bearer().await? {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a PATCH request without body (query-parameter mutations)
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.patch(self.url(path));
        if let Some(token) = self.bearer().await? {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let mut request = self.client.delete(self.url(path));
        if let Some(token) = self.bearer().await? {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        self.handle_empty_response(response).await
    }

    /// Make a multipart request: JSON payload part plus an optional image part
    pub async fn multipart<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        payload_part: &str,
        payload: &B,
        image: Option<ImageUpload>,
    ) -> ClientResult<T> {
        let json = serde_json::to_string(payload)?;
        let mut form = reqwest::multipart::Form::new().part(
            payload_part.to_string(),
            reqwest::multipart::Part::text(json).mime_str("application/json")?,
        );
        if let Some(image) = image {
            form = form.part(
                "image",
                reqwest::multipart::Part::bytes(image.bytes)
                    .file_name(image.file_name)
                    .mime_str(&image.content_type)?,
            );
        }

        let mut request = self.client.request(method, self.url(path)).multipart(form);
        if let Some(token) = self.bearer().await? {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Handle the HTTP response, decoding the body on success
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(self.classify_failure(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle a response whose body is irrelevant (deletes, logouts)
    async fn handle_empty_response(&self, response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(self.classify_failure(status, text));
        }
        Ok(())
    }

    fn classify_failure(&self, status: StatusCode, body: String) -> ClientError {
        let message = extract_message(&body);
        match status {
            StatusCode::UNAUTHORIZED => {
                // stale session: clear the stored tokens unconditionally
                self.storage.clear();
                ClientError::Unauthorized
            }
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(message)
            }
            _ => ClientError::Internal(message),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Prefers the server's `message` (then `error`) JSON field, falls back
/// to the raw body, then to a generic message.
pub fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }
    if body.trim().is_empty() {
        "Request failed".to_string()
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTokenStorage;

    #[test]
    fn test_extract_message_prefers_server_field() {
        assert_eq!(
            extract_message(r#"{"message":"Product name taken"}"#),
            "Product name taken"
        );
        assert_eq!(extract_message(r#"{"error":"boom"}"#), "boom");
        assert_eq!(extract_message("plain text"), "plain text");
        assert_eq!(extract_message(""), "Request failed");
        assert_eq!(extract_message(r#"{"message":""}"#), r#"{"message":""}"#);
    }

    #[test]
    fn test_url_join() {
        let storage: Arc<dyn TokenStorage> = Arc::new(MemoryTokenStorage::new());
        let client = HttpClient::new(
            &ClientConfig::new("http://localhost:8080/api/v1/"),
            storage,
        );
        assert_eq!(
            client.url("/products/search"),
            "http://localhost:8080/api/v1/products/search"
        );
        assert_eq!(client.url("orders"), "http://localhost:8080/api/v1/orders");
    }
}
