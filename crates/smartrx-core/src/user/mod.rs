//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: session fields, snapshot and role/route constants
//! - `session`: the shared `UserSession` holder
//! - `service`: `UserService` trait
//!
//! # Usage
//!
//! ```
//! use smartrx_core::user::{UserService, UserSession};
//!
//! let session = UserSession::new();
//! assert_eq!(session.get_control_panel_route(), "/dashboard/profiles");
//! ```

mod model;
mod service;
mod session;

pub use model::{
    ORGANIZATION_DASHBOARD_ROUTE, PROFESSIONAL_DASHBOARD_ROUTE, ROLE_ORGANIZATION,
    ROLE_PROFESSIONAL, UserSessionData, UserSessionSnapshot,
};
pub use service::UserService;
pub use session::UserSession;
