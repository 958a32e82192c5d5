//! Session-scoped user and billing holder.

use super::model::{
    ORGANIZATION_DASHBOARD_ROUTE, PROFESSIONAL_DASHBOARD_ROUTE, ROLE_ORGANIZATION,
    ROLE_PROFESSIONAL, UserSessionData, UserSessionSnapshot,
};
use super::service::UserService;
use rust_decimal::Decimal;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Holds the current session's identity and billing fields.
///
/// Unlike the market and modal holders this one never notifies: components
/// re-read it whenever they render. Each accessor takes the lock for a single
/// field, so two writers racing on the same field resolve last-writer-wins.
#[derive(Debug, Default)]
pub struct UserSession {
    data: RwLock<UserSessionData>,
}

impl UserSession {
    /// Creates a session holding the placeholder defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from explicit field values.
    pub fn from_data(data: UserSessionData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, UserSessionData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserSessionData> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ============================================================================
    // Field accessors
    // ============================================================================

    pub fn user_role(&self) -> String {
        self.read().user_role.clone()
    }

    pub fn set_user_role(&self, role: impl Into<String>) {
        self.write().user_role = role.into();
    }

    pub fn user_name(&self) -> String {
        self.read().user_name.clone()
    }

    pub fn set_user_name(&self, name: impl Into<String>) {
        self.write().user_name = name.into();
    }

    pub fn user_email(&self) -> String {
        self.read().user_email.clone()
    }

    pub fn set_user_email(&self, email: impl Into<String>) {
        self.write().user_email = email.into();
    }

    pub fn current_plan(&self) -> String {
        self.read().current_plan.clone()
    }

    pub fn set_current_plan(&self, plan: impl Into<String>) {
        self.write().current_plan = plan.into();
    }

    pub fn credit_spent(&self) -> Decimal {
        self.read().credit_spent
    }

    pub fn set_credit_spent(&self, spent: Decimal) {
        self.write().credit_spent = spent;
    }

    pub fn credit_limit(&self) -> Decimal {
        self.read().credit_limit
    }

    pub fn set_credit_limit(&self, limit: Decimal) {
        self.write().credit_limit = limit;
    }

    // ============================================================================
    // Derived views
    // ============================================================================

    pub fn is_organization(&self) -> bool {
        self.read().user_role.eq_ignore_ascii_case(ROLE_ORGANIZATION)
    }

    pub fn is_professional(&self) -> bool {
        self.read().user_role.eq_ignore_ascii_case(ROLE_PROFESSIONAL)
    }

    /// Share of the credit limit already spent, in percent.
    ///
    /// Returns zero when the limit is zero.
    pub fn credit_usage_percentage(&self) -> Decimal {
        let data = self.read();
        usage_percentage(data.credit_spent, data.credit_limit)
    }

    /// Route of the control panel matching the session's role.
    ///
    /// Any role other than "organization" lands on the professional dashboard.
    pub fn control_panel_route(&self) -> &'static str {
        if self.is_organization() {
            ORGANIZATION_DASHBOARD_ROUTE
        } else {
            PROFESSIONAL_DASHBOARD_ROUTE
        }
    }

    /// Copies every field and derived view out under a single read lock.
    pub fn snapshot(&self) -> UserSessionSnapshot {
        let data = self.read().clone();
        let is_organization = data.user_role.eq_ignore_ascii_case(ROLE_ORGANIZATION);
        UserSessionSnapshot {
            is_professional: data.user_role.eq_ignore_ascii_case(ROLE_PROFESSIONAL),
            credit_usage_percentage: usage_percentage(data.credit_spent, data.credit_limit),
            control_panel_route: if is_organization {
                ORGANIZATION_DASHBOARD_ROUTE
            } else {
                PROFESSIONAL_DASHBOARD_ROUTE
            }
            .to_string(),
            is_organization,
            data,
        }
    }
}

fn usage_percentage(spent: Decimal, limit: Decimal) -> Decimal {
    if limit.is_zero() {
        return Decimal::ZERO;
    }
    spent / limit * Decimal::ONE_HUNDRED
}

impl UserService for UserSession {
    fn get_user_name(&self) -> String {
        self.user_name()
    }

    // TODO: read the role from the authenticated principal once login exists.
    fn get_user_role(&self) -> String {
        self.user_role()
    }

    fn get_control_panel_route(&self) -> &'static str {
        self.control_panel_route()
    }
}
