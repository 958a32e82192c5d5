//! Shared UI state holders.
//!
//! # Module Structure
//!
//! - `observable`: generic equality-gated holder with a listener registry
//! - `market`: selected market
//! - `modal`: modal open/closed flag

mod market;
mod modal;
mod observable;

pub use market::{DEFAULT_MARKET, MarketState};
pub use modal::ModalState;
pub use observable::{Listener, ObservableState, SubscriptionId};
