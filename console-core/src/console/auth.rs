//! Session operations

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use console_client::ClientError;
use shared::auth::{
    AuthRequest, AuthResponse, ChangePasswordRequest, ForceResetPasswordRequest, RegisterRequest,
    ResetPasswordRequest, StoredTokens, SuperAdminPasswordChangeRequest,
    SuperAdminRecoveryRequest, expires_within,
};
use shared::util::now_millis;

use crate::error::{AuthError, ConsoleError, ConsoleResult};
use crate::session::REFRESH_WINDOW_SECS;

use super::Console;

/// Poll period of the background session watcher
const WATCH_INTERVAL: Duration = Duration::from_secs(60);

impl Console {
    /// Authenticate and establish the session.
    ///
    /// On success the identity and token set replace the session
    /// wholesale and the three token slots are persisted together. On
    /// failure the prior in-memory session is left untouched.
    pub async fn login(&self, request: &AuthRequest) -> ConsoleResult<()> {
        self.session.write().await.set_loading();
        match self.api.login(request).await {
            Ok(response) => {
                self.establish(&response).await;
                tracing::info!(username = %response.username, "Logged in");
                Ok(())
            }
            Err(error) => self.fail_auth(error).await,
        }
    }

    /// Register a regular account and establish the session
    pub async fn register(&self, request: &RegisterRequest) -> ConsoleResult<()> {
        self.session.write().await.set_loading();
        match self.api.register(request).await {
            Ok(response) => {
                self.establish(&response).await;
                tracing::info!(username = %response.username, "Account registered");
                Ok(())
            }
            Err(error) => self.fail_auth(error).await,
        }
    }

    /// Register an admin account. Requires an admin session; the new
    /// account does not replace the current one. A denial here means
    /// the current session expired, not bad credentials.
    pub async fn register_admin(&self, request: &RegisterRequest) -> ConsoleResult<()> {
        self.require_token()?;
        match self.api.register_admin(request).await {
            Ok(response) => {
                tracing::info!(username = %response.username, "Admin account registered");
                Ok(())
            }
            Err(error) if error.is_unauthorized() => {
                self.force_logout().await;
                Err(ConsoleError::SessionExpired)
            }
            Err(error) => self.fail_auth(error).await,
        }
    }

    /// Register a super admin account. Requires a super admin session.
    pub async fn register_super_admin(&self, request: &RegisterRequest) -> ConsoleResult<()> {
        self.require_token()?;
        match self.api.register_super_admin(request).await {
            Ok(response) => {
                tracing::info!(username = %response.username, "Super admin account registered");
                Ok(())
            }
            Err(error) if error.is_unauthorized() => {
                self.force_logout().await;
                Err(ConsoleError::SessionExpired)
            }
            Err(error) => self.fail_auth(error).await,
        }
    }

    /// Notify the server (best effort) and clear everything local.
    /// Safe to call on an already logged-out console.
    pub async fn logout(&self) {
        if let Err(error) = self.api.logout().await {
            tracing::warn!("Server logout failed: {}", error);
        }
        self.force_logout().await;
    }

    /// Exchange the refresh token for a new pair. Failure forces a
    /// logout; a half-refreshed session never survives.
    pub async fn refresh_session(&self) -> ConsoleResult<()> {
        let refresh_token = self
            .storage
            .load()
            .map(|t| t.refresh_token)
            .filter(|t| !t.is_empty());
        let Some(refresh_token) = refresh_token else {
            self.force_logout().await;
            return Err(ConsoleError::SessionExpired);
        };

        match self.api.refresh(&refresh_token).await {
            Ok(response) => {
                self.establish(&response).await;
                tracing::debug!(username = %response.username, "Session refreshed");
                Ok(())
            }
            Err(error) => {
                tracing::warn!("Session refresh failed: {}", error);
                self.force_logout().await;
                Err(ConsoleError::SessionExpired)
            }
        }
    }

    /// Ask the server whether a token is still accepted
    pub async fn verify_token(&self, token: &str) -> ConsoleResult<bool> {
        Ok(self.api.verify_token(token).await?)
    }

    /// Change the current user's password. The session stays as it is.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ConsoleResult<()> {
        self.require_token()?;
        match self.api.change_password(request).await {
            Ok(()) => Ok(()),
            Err(error) if error.is_unauthorized() => {
                self.force_logout().await;
                Err(ConsoleError::SessionExpired)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Reset a named account's password
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> ConsoleResult<()> {
        self.require_token()?;
        match self.api.reset_password(request).await {
            Ok(()) => Ok(()),
            Err(error) if error.is_unauthorized() => {
                self.force_logout().await;
                Err(ConsoleError::SessionExpired)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Reset another account's password without knowing its old one
    pub async fn force_reset_password(
        &self,
        request: &ForceResetPasswordRequest,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        match self.api.force_reset_password(request).await {
            Ok(()) => {
                tracing::info!(username = %request.target_username, "Password force-reset");
                Ok(())
            }
            Err(error) if error.is_unauthorized() => {
                self.force_logout().await;
                Err(ConsoleError::SessionExpired)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Change the super admin account's password
    pub async fn super_admin_password_change(
        &self,
        request: &SuperAdminPasswordChangeRequest,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        match self.api.super_admin_password_change(request).await {
            Ok(()) => Ok(()),
            Err(error) if error.is_unauthorized() => {
                self.force_logout().await;
                Err(ConsoleError::SessionExpired)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Recover the super admin account by username and email
    pub async fn super_admin_recovery(
        &self,
        request: &SuperAdminRecoveryRequest,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        match self.api.super_admin_recovery(request).await {
            Ok(()) => {
                tracing::info!("Super admin account recovered");
                Ok(())
            }
            Err(error) if error.is_unauthorized() => {
                self.force_logout().await;
                Err(ConsoleError::SessionExpired)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// The durable access token, read straight from storage
    pub fn access_token(&self) -> Option<String> {
        self.storage.load().map(|t| t.access_token)
    }

    /// Whether a stored access token exists and is not yet flagged for
    /// refresh. A token inside the refresh window does not count as
    /// valid even though it has not expired.
    pub fn has_valid_token(&self) -> bool {
        self.storage.load().is_some_and(|t| {
            !t.access_token.is_empty()
                && !expires_within(&t.access_token, now_millis() / 1000, REFRESH_WINDOW_SECS)
        })
    }

    pub async fn needs_refresh(&self) -> bool {
        self.session.read().await.needs_refresh()
    }

    pub async fn is_admin(&self) -> bool {
        self.session.read().await.is_admin()
    }

    pub async fn is_super_admin(&self) -> bool {
        self.session.read().await.is_super_admin()
    }

    /// Drop a recorded auth failure, keeping the session itself
    pub async fn clear_session_error(&self) {
        self.session.write().await.clear_error();
    }

    /// Background watcher: once a minute, refresh the session when the
    /// access token has less than the refresh window left. A missing
    /// refresh token or a failed refresh forces a logout.
    pub fn spawn_session_watcher(console: Arc<Console>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(WATCH_INTERVAL);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;

                let Some(tokens) = console.storage.load() else {
                    continue;
                };
                let now_secs = now_millis() / 1000;
                if !expires_within(&tokens.access_token, now_secs, REFRESH_WINDOW_SECS) {
                    continue;
                }

                tracing::debug!("Access token close to expiry, refreshing");
                if let Err(error) = console.refresh_session().await {
                    tracing::warn!("Background refresh failed: {}", error);
                }
            }
        })
    }

    async fn establish(&self, response: &AuthResponse) {
        self.session.write().await.establish(response);
        self.storage.store(&StoredTokens {
            access_token: response.token.clone(),
            refresh_token: response.refresh_token.clone(),
            token_type: response.token_type.clone(),
        });
    }

    async fn fail_auth(&self, error: ClientError) -> ConsoleResult<()> {
        let auth_error = match error {
            ClientError::Unauthorized => AuthError::InvalidCredentials,
            ClientError::Http(_) => AuthError::Network,
            other => AuthError::Unknown(other.to_string()),
        };
        self.session.write().await.set_error(auth_error.to_string());
        Err(ConsoleError::Auth(auth_error))
    }
}
