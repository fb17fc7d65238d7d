//! The shared dialog slot.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use tokio::sync::oneshot;
use tokio::sync::watch;

use super::DialogMode;
use super::DialogOutput;
use super::DialogResponse;
use super::DialogState;
use super::OverlapPolicy;
use super::Pending;
use super::Severity;
use crate::error::DialogError;

/// Mediates between code that needs an answer from the user and the one dialog
/// surface that can ask for it.
///
/// Cheap to clone; every clone talks to the same slot. Any clone may open a dialog,
/// but only the surface is expected to call [`resolve`](Self::resolve).
#[derive(Clone)]
pub struct DialogBroker {
    inner: Arc<BrokerInner>,
}

struct BrokerInner {
    policy: OverlapPolicy,
    slot: Mutex<Slot>,
    state_tx: watch::Sender<DialogState>,
}

#[derive(Default)]
struct Slot {
    state: DialogState,
    continuation: Option<oneshot::Sender<DialogResponse>>,
}

impl Slot {
    /// An open request whose caller is still waiting.
    fn is_outstanding(&self) -> bool {
        self.continuation.as_ref().is_some_and(|tx| !tx.is_closed())
    }
}

impl DialogBroker {
    /// Creates an idle broker that supersedes overlapping requests.
    pub fn new() -> Self {
        Self::with_policy(OverlapPolicy::default())
    }

    /// Creates an idle broker with the given overlap policy.
    pub fn with_policy(policy: OverlapPolicy) -> Self {
        let (state_tx, _) = watch::channel(DialogState::default());
        Self {
            inner: Arc::new(BrokerInner {
                policy,
                slot: Mutex::new(Slot::default()),
                state_tx,
            }),
        }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.inner.policy
    }

    /// Shows an alert. Resolves once the user acknowledges it.
    pub fn alert(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Pending<()> {
        self.open(DialogMode::Alert, title.into(), message.into(), severity, String::new())
    }

    /// Asks a yes/no question.
    pub fn confirm(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Pending<bool> {
        self.open(DialogMode::Confirm, title.into(), message.into(), severity, String::new())
    }

    /// Asks for a line of text, pre-filled with `initial_value`.
    ///
    /// Resolves with `None` if the user cancels.
    pub fn prompt(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        initial_value: impl Into<String>,
        severity: Severity,
    ) -> Pending<Option<String>> {
        self.open(
            DialogMode::Prompt,
            title.into(),
            message.into(),
            severity,
            initial_value.into(),
        )
    }

    fn open<T: DialogOutput>(
        &self,
        mode: DialogMode,
        title: String,
        message: String,
        severity: Severity,
        input_value: String,
    ) -> Pending<T> {
        let mut slot = self.lock();

        if slot.is_outstanding() {
            match self.inner.policy {
                OverlapPolicy::Reject => {
                    log::debug!(
                        "dialog: rejecting {} '{}', {} '{}' still open",
                        mode,
                        title,
                        slot.state.mode,
                        slot.state.title
                    );
                    return Pending::rejected();
                }
                OverlapPolicy::Supersede => {
                    log::debug!(
                        "dialog: {} '{}' supersedes {} '{}'",
                        mode,
                        title,
                        slot.state.mode,
                        slot.state.title
                    );
                }
            }
        }

        log::debug!("dialog: open {} '{}' ({})", mode, title, severity);

        let (tx, rx) = oneshot::channel();
        slot.state = DialogState {
            visible: true,
            title,
            message,
            severity,
            mode,
            input_value,
        };
        // Dropping the previous sender completes its caller with `Superseded`.
        slot.continuation = Some(tx);
        self.publish(&slot);

        Pending::new(rx)
    }

    /// Answers the open dialog.
    ///
    /// Hides the dialog, empties the continuation slot and only then delivers the
    /// answer, so repeated calls cannot deliver twice. Returns `Ok(true)` if a
    /// waiting request was answered and `Ok(false)` if nothing was pending or the
    /// caller had already dropped its [`Pending`]. The dialog is hidden either way.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::ModeMismatch`] if `response` is not a valid answer for
    /// the open dialog's mode. The dialog stays open in that case.
    pub fn resolve(&self, response: DialogResponse) -> Result<bool, DialogError> {
        let mut slot = self.lock();

        if slot.continuation.is_none() {
            if slot.state.visible {
                slot.state.visible = false;
                self.publish(&slot);
            }
            log::trace!("dialog: resolve({}) with nothing pending", response.name());
            return Ok(false);
        }

        let mode = slot.state.mode;
        if !response.fits(mode) {
            return Err(DialogError::ModeMismatch {
                mode,
                response: response.name(),
            });
        }

        slot.state.visible = false;
        let continuation = slot.continuation.take();
        self.publish(&slot);
        drop(slot);

        log::debug!("dialog: {} resolved as {}", mode, response.name());

        match continuation.map(|tx| tx.send(response)) {
            Some(Ok(())) => Ok(true),
            _ => {
                log::debug!("dialog: caller stopped waiting before the answer arrived");
                Ok(false)
            }
        }
    }

    /// Answers the open dialog with its mode's negative answer.
    pub fn dismiss(&self) -> Result<bool, DialogError> {
        let mode = self.lock().state.mode;
        self.resolve(DialogResponse::dismissal(mode))
    }

    /// Replaces the text of an open prompt. Ignored for other dialogs.
    pub fn set_input(&self, value: impl Into<String>) {
        let mut slot = self.lock();
        if slot.state.visible && slot.state.mode == DialogMode::Prompt {
            slot.state.input_value = value.into();
            self.publish(&slot);
        }
    }

    /// Submits an open prompt with its current text.
    pub fn submit_input(&self) -> Result<bool, DialogError> {
        let value = self.lock().state.input_value.clone();
        self.resolve(DialogResponse::Submitted(value))
    }

    /// Snapshot of the dialog as the surface should render it.
    pub fn state(&self) -> DialogState {
        self.lock().state.clone()
    }

    /// Observes every change to the dialog state.
    pub fn subscribe(&self) -> watch::Receiver<DialogState> {
        self.inner.state_tx.subscribe()
    }

    /// Returns `true` while a caller is waiting for an answer.
    pub fn is_pending(&self) -> bool {
        self.lock().is_outstanding()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.inner.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, slot: &Slot) {
        self.inner.state_tx.send_replace(slot.state.clone());
    }
}

impl Default for DialogBroker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DialogBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.lock();
        f.debug_struct("DialogBroker")
            .field("policy", &self.inner.policy)
            .field("state", &slot.state)
            .field("pending", &slot.is_outstanding())
            .finish()
    }
}
