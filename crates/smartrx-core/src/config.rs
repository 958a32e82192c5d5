//! Application configuration model.
//!
//! Mirrors the TOML file layout:
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [market]
//! default_market = "egypt"
//!
//! [session]
//! user_role = "Professional"
//! user_name = "Ahmed"
//! credit_spent = "210700"
//! credit_limit = "216000"
//! ```
//!
//! Every section and field is optional; omitted values take their defaults.

use crate::state::DEFAULT_MARKET;
use crate::user::UserSessionData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub market: MarketConfig,
    /// Placeholder session values used until real authentication exists
    pub session: UserSessionData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "smartrx_core=debug"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Market selected at process start
    pub default_market: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            default_market: DEFAULT_MARKET.to_string(),
        }
    }
}
