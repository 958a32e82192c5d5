//! User session data model.
//!
//! Plain, serializable session fields. The values in `Default` are the
//! placeholders used until an identity provider populates real ones.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Role string for organization accounts.
pub const ROLE_ORGANIZATION: &str = "Organization";
/// Role string for individual professional accounts.
pub const ROLE_PROFESSIONAL: &str = "Professional";

/// Control panel route for organization accounts.
pub const ORGANIZATION_DASHBOARD_ROUTE: &str = "/dashboard/organization";
/// Control panel route for everyone else.
pub const PROFESSIONAL_DASHBOARD_ROUTE: &str = "/dashboard/profiles";

/// Identity and billing fields of the current session.
///
/// Also used as the `[session]` section of the configuration file, so every
/// field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSessionData {
    /// "Professional" or "Organization", compared case-insensitively
    pub user_role: String,
    pub user_name: String,
    pub user_email: String,
    /// Name of the subscribed billing plan
    pub current_plan: String,
    /// Credits consumed in the current billing period
    pub credit_spent: Decimal,
    /// Credits available in the current billing period
    pub credit_limit: Decimal,
}

impl Default for UserSessionData {
    fn default() -> Self {
        Self {
            user_role: ROLE_PROFESSIONAL.to_string(),
            user_name: "Ahmed".to_string(),
            user_email: "ahmed123@gmail.com".to_string(),
            current_plan: "Professional".to_string(),
            credit_spent: Decimal::from(210_700),
            credit_limit: Decimal::from(216_000),
        }
    }
}

/// Session fields plus the derived views, as handed to a rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSessionSnapshot {
    #[serde(flatten)]
    pub data: UserSessionData,
    pub is_organization: bool,
    pub is_professional: bool,
    pub credit_usage_percentage: Decimal,
    pub control_panel_route: String,
}
