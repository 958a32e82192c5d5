//! User service seam.
//!
//! Components that only need identity information depend on this trait
//! rather than on [`super::UserSession`] directly, so a future
//! authentication-backed implementation can be swapped in.

/// Read-only view of the current user.
pub trait UserService: Send + Sync {
    /// Returns the current user's display name.
    fn get_user_name(&self) -> String;

    /// Returns the current user's role string.
    fn get_user_role(&self) -> String;

    /// Returns the control panel route matching the user's role.
    fn get_control_panel_route(&self) -> &'static str;
}
