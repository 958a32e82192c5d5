//! Modal visibility state.

use super::observable::{ObservableState, SubscriptionId};
use crate::error::Result;

/// Open/closed flag for the shared UI modal.
#[derive(Debug)]
pub struct ModalState {
    inner: ObservableState<bool>,
}

impl ModalState {
    /// Creates a holder with the modal closed.
    pub fn new() -> Self {
        Self {
            inner: ObservableState::new("modal", false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.get()
    }

    /// Sets the flag. Returns whether listeners were notified.
    pub fn set_open(&self, open: bool) -> Result<bool> {
        self.inner.set(open)
    }

    pub fn open(&self) -> Result<bool> {
        self.set_open(true)
    }

    pub fn close(&self) -> Result<bool> {
        self.set_open(false)
    }

    /// Flips the flag.
    ///
    /// The read and the write are two steps; a concurrent writer may land in
    /// between, in which case this write may be suppressed as a no-op.
    pub fn toggle(&self) -> Result<bool> {
        self.set_open(!self.is_open())
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        self.inner.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}
