//! Selected market state.

use super::observable::{ObservableState, SubscriptionId};
use crate::error::Result;

/// Market selected when nothing else has been configured.
pub const DEFAULT_MARKET: &str = "egypt";

/// Holds the market identifier every component renders prices and drug
/// availability for.
///
/// One instance is built by the composition root and shared via `Arc`. Market
/// pickers write it; listings subscribe and re-render on change.
#[derive(Debug)]
pub struct MarketState {
    inner: ObservableState<String>,
}

impl MarketState {
    /// Creates a holder starting at [`DEFAULT_MARKET`].
    pub fn new() -> Self {
        Self::with_market(DEFAULT_MARKET)
    }

    /// Creates a holder starting at the given market.
    pub fn with_market(market: impl Into<String>) -> Self {
        Self {
            inner: ObservableState::new("market", market.into()),
        }
    }

    /// Returns the currently selected market.
    pub fn selected_market(&self) -> String {
        self.inner.get()
    }

    /// Selects a market. Returns whether listeners were notified.
    ///
    /// Re-selecting the current market is a no-op.
    pub fn set_selected_market(&self, market: impl Into<String>) -> Result<bool> {
        self.inner.set(market.into())
    }

    /// Registers a listener invoked after every market change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        self.inner.subscribe(listener)
    }

    /// Removes a market change listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    /// Number of components currently listening.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}

impl Default for MarketState {
    fn default() -> Self {
        Self::new()
    }
}
