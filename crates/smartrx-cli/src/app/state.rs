use std::sync::Arc;

use smartrx_core::config::AppConfig;
use smartrx_core::profile::ProfileRepository;
use smartrx_core::state::{MarketState, ModalState};
use smartrx_core::user::UserSession;

/// Process-wide state handed to every command.
///
/// Each holder is built exactly once by [`super::bootstrap`] and shared via
/// `Arc`; nothing resolves them through a global.
pub struct AppState {
    pub config: AppConfig,
    pub market_state: Arc<MarketState>,
    pub modal_state: Arc<ModalState>,
    pub user_session: Arc<UserSession>,
    pub profile_repository: Arc<dyn ProfileRepository>,
}
