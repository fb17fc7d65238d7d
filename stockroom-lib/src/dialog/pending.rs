//! Caller side of a dialog request.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::Context;
use std::task::Poll;

use tokio::sync::oneshot;

use super::DialogResponse;
use crate::error::DialogError;

/// Value a dialog mode resolves to.
///
/// Implemented for `()` (alert), `bool` (confirm) and `Option<String>` (prompt).
pub trait DialogOutput: Sized {
    fn from_response(response: DialogResponse) -> Self;
}

impl DialogOutput for () {
    fn from_response(_: DialogResponse) -> Self {}
}

impl DialogOutput for bool {
    fn from_response(response: DialogResponse) -> Self {
        matches!(response, DialogResponse::Confirmed(true))
    }
}

impl DialogOutput for Option<String> {
    fn from_response(response: DialogResponse) -> Self {
        match response {
            DialogResponse::Submitted(text) => Some(text),
            _ => None,
        }
    }
}

/// Future returned by the broker's request methods.
///
/// The dialog is already open when this is created; awaiting only waits for the
/// answer. Dropping it abandons the answer but leaves the dialog on screen.
#[must_use = "the dialog answer is only observable by awaiting"]
pub struct Pending<T> {
    rx: Option<oneshot::Receiver<DialogResponse>>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Pending<T> {
    pub(crate) fn new(rx: oneshot::Receiver<DialogResponse>) -> Self {
        Self {
            rx: Some(rx),
            _output: PhantomData,
        }
    }

    /// A request the broker refused to open.
    pub(crate) fn rejected() -> Self {
        Self {
            rx: None,
            _output: PhantomData,
        }
    }
}

impl<T: DialogOutput> Future for Pending<T> {
    type Output = Result<T, DialogError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let Some(rx) = self.rx.as_mut() else {
            return Poll::Ready(Err(DialogError::Busy));
        };

        match Pin::new(rx).poll(cx) {
            Poll::Ready(Ok(response)) => Poll::Ready(Ok(T::from_response(response))),
            // Sender dropped without an answer: a newer request took the slot.
            Poll::Ready(Err(_)) => Poll::Ready(Err(DialogError::Superseded)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> std::fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pending")
            .field("rejected", &self.rx.is_none())
            .finish_non_exhaustive()
    }
}
