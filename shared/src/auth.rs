//! Auth API DTOs and token helpers
//!
//! Request/response types for the authentication endpoints plus the
//! client-side JWT expiry decode used by the refresh logic.

use serde::{Deserialize, Serialize};

/// Role tag granted to administrators
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
/// Role tag granted to super administrators
pub const ROLE_SUPER_ADMIN: &str = "ROLE_SUPER_ADMIN";

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
}

/// Successful auth response: identity plus a fresh token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
}

/// User identity held by the session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
}

/// Token refresh request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Token verification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

/// Self-service password change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Password reset for a named account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
}

/// Administrative password reset for another account, no old password
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceResetPasswordRequest {
    pub target_username: String,
    pub new_password: String,
}

/// Password change for the super admin account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperAdminPasswordChangeRequest {
    pub username: String,
    pub email: String,
    pub old_password: String,
    pub new_password: String,
    pub confirmed_default_super_admin: bool,
}

/// Recovery of the super admin account by username and email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperAdminRecoveryRequest {
    pub username: String,
    pub email: String,
    pub new_password: String,
}

/// The three token slots persisted to durable storage.
///
/// Always written and cleared together so storage never holds a
/// partial token set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Extract the `exp` claim (Unix seconds) from a JWT without verifying it.
///
/// Decodes the base64url payload and reads `exp`. Returns `None` for
/// anything that is not a three-part token with a JSON payload.
pub fn token_expiry(token: &str) -> Option<i64> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_i64()
}

/// Whether `token` expires within `window_secs` of `now` (Unix seconds).
///
/// Undecodable tokens report `false`; the refresh path treats them as a
/// hard failure elsewhere.
pub fn expires_within(token: &str, now: i64, window_secs: i64) -> bool {
    match token_expiry(token) {
        Some(exp) => exp - now < window_secs,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    fn make_token(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload =
            URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"admin","exp":{}}}"#, exp));
        format!("{}.{}.sig", header, payload)
    }

    #[test]
    fn test_token_expiry() {
        assert_eq!(token_expiry(&make_token(1_700_000_000)), Some(1_700_000_000));
    }

    #[test]
    fn test_token_expiry_malformed() {
        assert_eq!(token_expiry("not-a-jwt"), None);
        assert_eq!(token_expiry("a.b"), None);
        assert_eq!(token_expiry("a.!!!.c"), None);
    }

    #[test]
    fn test_expires_within() {
        let token = make_token(10_000);
        // 400s until expiry, 300s window: not yet
        assert!(!expires_within(&token, 9_600, 300));
        // 200s until expiry: within the window
        assert!(expires_within(&token, 9_800, 300));
        // already expired
        assert!(expires_within(&token, 10_001, 300));
        // undecodable tokens never report refresh-needed
        assert!(!expires_within("garbage", 0, 300));
    }
}
