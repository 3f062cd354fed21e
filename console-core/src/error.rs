//! Error types for the console layer

use console_client::ClientError;
use thiserror::Error;

/// Classified login/registration failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Could not reach the server")]
    Network,

    #[error("Authentication failed: {0}")]
    Unknown(String),
}

/// Console operation error
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Precondition failure: no stored access token, nothing was sent
    #[error("No access token available")]
    NoAccessToken,

    /// The server rejected the session; the local session has been cleared
    #[error("Session expired")]
    SessionExpired,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
