//! Error types

mod api;
mod config;
mod dialog;

pub use api::*;
pub use config::*;
pub use dialog::*;

/// Top-level error for client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A dialog request did not complete.
    #[error(transparent)]
    Dialog(#[from] DialogError),
}

impl Error {
    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(ApiError::from(err))
    }
}
