//! Dialog broker error types

use crate::dialog::DialogMode;

/// Errors produced by the dialog broker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    /// Another request replaced this one before it was answered.
    #[error("Dialog was superseded by a newer request")]
    Superseded,

    /// A request was refused because another dialog is still open.
    #[error("Another dialog is already open")]
    Busy,

    /// The answer does not fit the open dialog's mode.
    #[error("Response '{response}' does not match {mode} dialog")]
    ModeMismatch {
        mode: DialogMode,
        response: &'static str,
    },
}
