//! Modal dialog broker.
//!
//! A [`DialogBroker`] owns the single dialog slot shared by the whole application.
//! Callers open an alert, confirmation or prompt and await the returned [`Pending`]
//! future; the dialog surface renders [`DialogState`] and answers with
//! [`DialogBroker::resolve`].
//!
//! # Example
//!
//! ```ignore
//! use stockroom_lib::dialog::{DialogBroker, DialogResponse, Severity};
//!
//! let broker = DialogBroker::new();
//! let answer = broker.confirm("Delete?", "Remove item", Severity::Warning);
//!
//! // Somewhere in the dialog surface:
//! broker.resolve(DialogResponse::Confirmed(true))?;
//!
//! assert!(answer.await?);
//! ```

mod broker;
mod pending;

pub use broker::*;
pub use pending::*;

/// Visual severity of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which affordances the dialog shows and which answer it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogMode {
    /// Message with a single acknowledge button. Resolves with no value.
    #[default]
    Alert,
    /// Accept / reject question. Resolves with a `bool`.
    Confirm,
    /// Text input. Resolves with the text, or `None` when cancelled.
    Prompt,
}

impl DialogMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Confirm => "confirm",
            Self::Prompt => "prompt",
        }
    }
}

impl std::fmt::Display for DialogMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dialog surface's answer to an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResponse {
    /// An alert was acknowledged.
    Acknowledged,
    /// A confirmation was accepted (`true`) or rejected (`false`).
    Confirmed(bool),
    /// A prompt was submitted with this text.
    Submitted(String),
    /// A prompt was cancelled.
    Cancelled,
}

impl DialogResponse {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Acknowledged => "acknowledged",
            Self::Confirmed(_) => "confirmed",
            Self::Submitted(_) => "submitted",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns `true` if this answer is valid for a dialog in `mode`.
    pub fn fits(&self, mode: DialogMode) -> bool {
        matches!(
            (mode, self),
            (DialogMode::Alert, Self::Acknowledged)
                | (DialogMode::Confirm, Self::Confirmed(_))
                | (DialogMode::Prompt, Self::Submitted(_) | Self::Cancelled)
        )
    }

    /// The negative answer for `mode`, used when the user dismisses the dialog.
    pub fn dismissal(mode: DialogMode) -> Self {
        match mode {
            DialogMode::Alert => Self::Acknowledged,
            DialogMode::Confirm => Self::Confirmed(false),
            DialogMode::Prompt => Self::Cancelled,
        }
    }
}

/// Everything a dialog surface needs to render the current dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogState {
    pub visible: bool,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub mode: DialogMode,
    /// Editable text of an open prompt.
    pub input_value: String,
}

/// What happens when a dialog is requested while another is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Replace the open dialog. Its caller receives [`DialogError::Superseded`].
    ///
    /// [`DialogError::Superseded`]: crate::error::DialogError::Superseded
    #[default]
    Supersede,
    /// Keep the open dialog. The new caller receives [`DialogError::Busy`].
    ///
    /// [`DialogError::Busy`]: crate::error::DialogError::Busy
    Reject,
}
