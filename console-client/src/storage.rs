//! Durable token storage
//!
//! The three token slots (access, refresh, token type) are written and
//! cleared together. Storage is the source of truth for the current
//! access token; the in-memory session store mirrors it but some paths
//! (another process, a crash) can make them diverge briefly.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use shared::auth::StoredTokens;

/// Durable storage for the session token slots.
///
/// Implementations are best-effort: persistence failures are logged,
/// never surfaced, matching the unconditional-cleanup logout contract.
pub trait TokenStorage: Send + Sync {
    /// Read the current token set, if any
    fn load(&self) -> Option<StoredTokens>;

    /// Replace the token set atomically
    fn store(&self, tokens: &StoredTokens);

    /// Clear all three slots together
    fn clear(&self);

    /// The current access token, read straight from storage
    fn access_token(&self) -> Option<String> {
        self.load().map(|t| t.access_token)
    }
}

/// File-backed storage: one pretty-printed JSON file holding the token set
pub struct FileTokenStorage {
    file_path: PathBuf,
}

impl FileTokenStorage {
    /// Store tokens at `{dir}/auth/tokens.json`
    pub fn new(dir: &Path) -> Self {
        Self {
            file_path: dir.join("auth/tokens.json"),
        }
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Option<StoredTokens> {
        let content = std::fs::read_to_string(&self.file_path).ok()?;
        match serde_json::from_str(&content) {
            Ok(tokens) => Some(tokens),
            Err(e) => {
                tracing::warn!("Stored token file unreadable, ignoring: {}", e);
                None
            }
        }
    }

    fn store(&self, tokens: &StoredTokens) {
        let write = || -> std::io::Result<()> {
            if let Some(parent) = self.file_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(tokens).expect("token set serializes");
            std::fs::write(&self.file_path, content)
        };
        if let Err(e) = write() {
            tracing::warn!("Failed to persist tokens: {}", e);
        } else {
            tracing::debug!("Tokens persisted");
        }
    }

    fn clear(&self) {
        if self.file_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.file_path) {
                tracing::warn!("Failed to clear stored tokens: {}", e);
            } else {
                tracing::debug!("Stored tokens cleared");
            }
        }
    }
}

/// In-memory storage, used by tests and headless setups
#[derive(Default)]
pub struct MemoryTokenStorage {
    slot: Mutex<Option<StoredTokens>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<StoredTokens> {
        self.slot.lock().unwrap().clone()
    }

    fn store(&self, tokens: &StoredTokens) {
        *self.slot.lock().unwrap() = Some(tokens.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StoredTokens {
        StoredTokens {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            token_type: "Bearer".into(),
        }
    }

    #[test]
    fn test_memory_round_trip() {
        let storage = MemoryTokenStorage::new();
        assert!(storage.load().is_none());

        storage.store(&sample());
        assert_eq!(storage.load(), Some(sample()));
        assert_eq!(storage.access_token().as_deref(), Some("access"));

        storage.clear();
        assert!(storage.load().is_none());
        assert!(storage.access_token().is_none());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path());
        assert!(storage.load().is_none());

        storage.store(&sample());
        assert_eq!(storage.load(), Some(sample()));

        // a fresh handle over the same directory sees the same tokens
        let reopened = FileTokenStorage::new(dir.path());
        assert_eq!(reopened.load(), Some(sample()));

        storage.clear();
        assert!(storage.load().is_none());
        assert!(reopened.load().is_none());
    }

    #[test]
    fn test_file_corrupt_content_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path());
        std::fs::create_dir_all(dir.path().join("auth")).unwrap();
        std::fs::write(dir.path().join("auth/tokens.json"), "not json").unwrap();
        assert!(storage.load().is_none());
    }
}
