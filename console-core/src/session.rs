//! Session store
//!
//! Holds the authenticated identity and the in-memory token set. The
//! durable copy lives in `TokenStorage`; some read paths consult
//! storage directly, so the two can diverge until the next login or
//! logout (known limitation, see DESIGN.md).

use shared::auth::{AuthResponse, ROLE_ADMIN, ROLE_SUPER_ADMIN, UserInfo, expires_within};
use shared::util::now_millis;

use crate::cache::CacheStatus;

/// Access token refresh window in seconds: refresh when less than five
/// minutes of validity remain.
pub const REFRESH_WINDOW_SECS: i64 = 300;

/// In-memory token set mirroring the durable slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// The session store state
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    user: Option<UserInfo>,
    tokens: Option<TokenSet>,
    status: CacheStatus,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn tokens(&self) -> Option<&TokenSet> {
        self.tokens.as_ref()
    }

    pub fn status(&self) -> &CacheStatus {
        &self.status
    }

    /// Authenticated iff a token set is held
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN) || self.has_role(ROLE_SUPER_ADMIN)
    }

    pub fn is_super_admin(&self) -> bool {
        self.has_role(ROLE_SUPER_ADMIN)
    }

    fn has_role(&self, role: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.roles.iter().any(|r| r == role))
    }

    /// Whether the access token expires within the refresh window
    pub fn needs_refresh(&self) -> bool {
        self.tokens.as_ref().is_some_and(|t| {
            expires_within(&t.access_token, now_millis() / 1000, REFRESH_WINDOW_SECS)
        })
    }

    pub fn set_loading(&mut self) {
        self.status = CacheStatus::Loading;
    }

    pub fn set_error(&mut self, message: String) {
        self.status = CacheStatus::Error(message);
    }

    pub fn clear_error(&mut self) {
        if matches!(self.status, CacheStatus::Error(_)) {
            self.status = CacheStatus::Idle;
        }
    }

    /// Replace identity and tokens wholesale from a successful auth
    /// response.
    pub fn establish(&mut self, response: &AuthResponse) {
        self.user = Some(UserInfo {
            username: response.username.clone(),
            email: response.email.clone(),
            full_name: response.full_name.clone(),
            roles: response.roles.clone(),
        });
        self.tokens = Some(TokenSet {
            access_token: response.token.clone(),
            refresh_token: response.refresh_token.clone(),
            token_type: response.token_type.clone(),
            expires_in: response.expires_in,
        });
        self.status = CacheStatus::Idle;
    }

    /// Drop identity and tokens. Idempotent.
    pub fn reset(&mut self) {
        self.user = None;
        self.tokens = None;
        self.status = CacheStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(roles: &[&str]) -> AuthResponse {
        AuthResponse {
            token: "t".to_string(),
            refresh_token: "r".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            full_name: "Admin".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_authenticated_iff_tokens_present() {
        let mut session = SessionState::new();
        assert!(!session.is_authenticated());

        session.establish(&response(&["ROLE_USER"]));
        assert!(session.is_authenticated());

        session.reset();
        assert!(!session.is_authenticated());
        session.reset();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_role_predicates() {
        let mut session = SessionState::new();
        assert!(!session.is_admin());

        session.establish(&response(&["ROLE_USER"]));
        assert!(!session.is_admin());

        session.establish(&response(&["ROLE_ADMIN"]));
        assert!(session.is_admin());
        assert!(!session.is_super_admin());

        session.establish(&response(&["ROLE_SUPER_ADMIN"]));
        assert!(session.is_admin());
        assert!(session.is_super_admin());
    }

    #[test]
    fn test_login_failure_leaves_session_untouched() {
        let mut session = SessionState::new();
        session.establish(&response(&["ROLE_ADMIN"]));

        session.set_error("Invalid username or password".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().username, "admin");
    }
}
