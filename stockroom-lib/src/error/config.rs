//! Configuration error types

use crate::config::ResourceKind;

/// Errors raised while assembling the client configuration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// An endpoint override is not a usable base URL.
    #[error("Invalid URL for {kind}: '{value}' ({reason})")]
    InvalidUrl {
        kind: ResourceKind,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid_url(
        kind: ResourceKind,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidUrl {
            kind,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
