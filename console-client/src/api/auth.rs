//! Auth endpoints

use async_trait::async_trait;

use shared::auth::{
    AuthRequest, AuthResponse, ChangePasswordRequest, ForceResetPasswordRequest, RegisterRequest,
    ResetPasswordRequest, SuperAdminPasswordChangeRequest, SuperAdminRecoveryRequest,
    VerifyTokenRequest,
};

use crate::{ClientResult, api::RestClient};

/// Authentication operations
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Login with username and password
    async fn login(&self, request: &AuthRequest) -> ClientResult<AuthResponse>;

    /// Register a regular account
    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse>;

    /// Register an admin account (requires an admin session)
    async fn register_admin(&self, request: &RegisterRequest) -> ClientResult<AuthResponse>;

    /// Register a super admin account (requires a super admin session)
    async fn register_super_admin(&self, request: &RegisterRequest)
    -> ClientResult<AuthResponse>;

    /// Exchange a refresh token for a new token pair
    async fn refresh(&self, refresh_token: &str) -> ClientResult<AuthResponse>;

    /// Check whether a token is still accepted by the server
    async fn verify_token(&self, token: &str) -> ClientResult<bool>;

    /// Change the current user's password
    async fn change_password(&self, request: &ChangePasswordRequest) -> ClientResult<()>;

    /// Reset a named account's password
    async fn reset_password(&self, request: &ResetPasswordRequest) -> ClientResult<()>;

    /// Reset another account's password without its old password
    async fn force_reset_password(&self, request: &ForceResetPasswordRequest)
    -> ClientResult<()>;

    /// Change the super admin account's password
    async fn super_admin_password_change(
        &self,
        request: &SuperAdminPasswordChangeRequest,
    ) -> ClientResult<()>;

    /// Recover the super admin account
    async fn super_admin_recovery(&self, request: &SuperAdminRecoveryRequest)
    -> ClientResult<()>;

    /// Invalidate the session server-side (best effort)
    async fn logout(&self) -> ClientResult<()>;
}

#[async_trait]
impl AuthApi for RestClient {
    async fn login(&self, request: &AuthRequest) -> ClientResult<AuthResponse> {
        self.http().post("/auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.http().post("/auth/register", request).await
    }

    async fn register_admin(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.http().post("/auth/register-admin", request).await
    }

    async fn register_super_admin(
        &self,
        request: &RegisterRequest,
    ) -> ClientResult<AuthResponse> {
        self.http().post("/auth/register-super-admin", request).await
    }

    async fn refresh(&self, refresh_token: &str) -> ClientResult<AuthResponse> {
        self.http().refresh_token(refresh_token).await
    }

    async fn verify_token(&self, token: &str) -> ClientResult<bool> {
        let request = VerifyTokenRequest {
            token: token.to_string(),
        };
        Ok(self.http().post_unit("/auth/verify-token", &request).await.is_ok())
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> ClientResult<()> {
        self.http().post_unit("/auth/change-password", request).await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> ClientResult<()> {
        self.http().post_unit("/auth/reset-password", request).await
    }

    async fn force_reset_password(
        &self,
        request: &ForceResetPasswordRequest,
    ) -> ClientResult<()> {
        self.http().post_unit("/auth/force-reset-password", request).await
    }

    async fn super_admin_password_change(
        &self,
        request: &SuperAdminPasswordChangeRequest,
    ) -> ClientResult<()> {
        self.http()
            .post_unit("/auth/super-admin-password-change", request)
            .await
    }

    async fn super_admin_recovery(
        &self,
        request: &SuperAdminRecoveryRequest,
    ) -> ClientResult<()> {
        self.http().post_unit("/auth/super-admin-recovery", request).await
    }

    async fn logout(&self) -> ClientResult<()> {
        self.http().post_unit("/auth/logout", &serde_json::json!({})).await
    }
}
