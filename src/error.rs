//! Error types for Anvil
//!
//! All modules use `AnvilResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Anvil operations
pub type AnvilResult<T> = Result<T, AnvilError>;

/// All errors that can occur in Anvil
#[derive(Error, Debug)]
pub enum AnvilError {
    // Credential errors
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("The forge rejected the credential pair")]
    CredentialRejected,

    // Remote call errors
    #[error("Request to {endpoint} returned status {status}")]
    Api { endpoint: String, status: u16 },

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Form errors
    #[error("Invalid {field}: {reason}")]
    FieldInvalid { field: &'static str, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl AnvilError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an API status error
    pub fn api(endpoint: impl Into<String>, status: u16) -> Self {
        Self::Api {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create a transport error
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create a form field error
    pub fn field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::FieldInvalid {
            field,
            reason: reason.into(),
        }
    }

    /// Check if error came from a remote call
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Transport { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotAuthenticated => {
                Some("Set ANVIL_IDENTITY and ANVIL_SECRET, or pass --identity/--secret")
            }
            Self::CredentialRejected => Some("Verify the credential pair with: anvil login"),
            Self::ConfigInvalid { .. } => Some("Run: anvil config init --force"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AnvilError::api("/groups/search", 503);
        assert!(err.to_string().contains("/groups/search"));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn error_hint() {
        let err = AnvilError::NotAuthenticated;
        assert_eq!(
            err.hint(),
            Some("Set ANVIL_IDENTITY and ANVIL_SECRET, or pass --identity/--secret")
        );
        assert!(AnvilError::Internal("boom".into()).hint().is_none());
    }

    #[test]
    fn error_is_remote() {
        assert!(AnvilError::api("/validate", 500).is_remote());
        assert!(!AnvilError::NotAuthenticated.is_remote());
    }
}
