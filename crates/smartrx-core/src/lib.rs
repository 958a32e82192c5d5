//! SmartRx state core.
//!
//! Shared state holders the UI components of the SmartRx lookup tool
//! synchronize through:
//!
//! - [`state::MarketState`]: selected market, notifies on change
//! - [`state::ModalState`]: modal visibility, notifies on change
//! - [`user::UserSession`]: identity and billing fields, polled
//!
//! plus the [`profile::ProfessionalProfile`] directory model.

pub mod config;
pub mod error;
pub mod profile;
pub mod state;
pub mod user;

// Re-export common error type
pub use error::{Result, SmartRxError};
