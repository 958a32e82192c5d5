use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use smartrx_core::config::AppConfig;
use smartrx_core::profile::ProfileRepository;
use smartrx_core::state::{DEFAULT_MARKET, MarketState, ModalState};
use smartrx_core::user::UserSession;
use smartrx_infrastructure::InMemoryProfileRepository;

use crate::app::AppState;

pub struct AppBootstrap {
    pub app_state: AppState,
}

/// Builds the market holder, falling back to the built-in default when the
/// configured market is blank.
fn build_market_state(config: &AppConfig) -> MarketState {
    let configured = config.market.default_market.trim();
    if configured.is_empty() {
        tracing::warn!(
            "[Bootstrap] Empty default market configured, using {}",
            DEFAULT_MARKET
        );
        MarketState::new()
    } else {
        MarketState::with_market(configured)
    }
}

pub async fn bootstrap(config: AppConfig, profiles_file: Option<&Path>) -> Result<AppBootstrap> {
    // Composition Root: one instance of each holder for the process lifetime
    let market_state = Arc::new(build_market_state(&config));
    tracing::info!(
        "[Bootstrap] Market state initialized: {}",
        market_state.selected_market()
    );

    let modal_state = Arc::new(ModalState::new());

    // Placeholder session values until authentication is wired in
    let user_session = Arc::new(UserSession::from_data(config.session.clone()));

    let profile_repository: Arc<dyn ProfileRepository> = match profiles_file {
        Some(path) => Arc::new(
            InMemoryProfileRepository::from_json_file(path)
                .await
                .with_context(|| format!("Failed to load profiles from {}", path.display()))?,
        ),
        None => Arc::new(InMemoryProfileRepository::default()),
    };

    tracing::info!("[Bootstrap] Application state ready");

    Ok(AppBootstrap {
        app_state: AppState {
            config,
            market_state,
            modal_state,
            user_session,
            profile_repository,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartrx_core::user::UserService;

    #[tokio::test]
    async fn test_bootstrap_with_defaults() {
        let boot = bootstrap(AppConfig::default(), None).await.unwrap();
        let state = boot.app_state;

        assert_eq!(state.market_state.selected_market(), "egypt");
        assert!(!state.modal_state.is_open());
        assert_eq!(state.user_session.get_user_name(), "Ahmed");
        assert!(state.profile_repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_session_uses_configured_values() {
        let mut config = AppConfig::default();
        config.session.user_role = "Organization".to_string();
        let boot = bootstrap(config, None).await.unwrap();

        assert_eq!(
            boot.app_state.user_session.get_control_panel_route(),
            "/dashboard/organization"
        );
    }

    #[tokio::test]
    async fn test_configured_market_and_blank_fallback() {
        let mut config = AppConfig::default();
        config.market.default_market = "saudi".to_string();
        let boot = bootstrap(config.clone(), None).await.unwrap();
        assert_eq!(boot.app_state.market_state.selected_market(), "saudi");

        config.market.default_market = "  ".to_string();
        let boot = bootstrap(config, None).await.unwrap();
        assert_eq!(boot.app_state.market_state.selected_market(), "egypt");
    }

    #[tokio::test]
    async fn test_missing_profiles_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("profiles.json");
        assert!(bootstrap(AppConfig::default(), Some(&missing)).await.is_err());
    }
}
