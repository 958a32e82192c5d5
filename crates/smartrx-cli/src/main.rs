use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use smartrx_infrastructure::ConfigService;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;

use commands::modal::ModalAction;

#[derive(Parser)]
#[command(name = "smartrx")]
#[command(about = "SmartRx - drug and market lookup state console", long_about = None)]
struct Cli {
    /// Configuration file (defaults to $SMARTRX_CONFIG, then ~/.config/smartrx/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current user session and billing usage
    Session {
        #[arg(long)]
        json: bool,
    },
    /// Show or change the selected market
    Market {
        #[arg(long)]
        set: Option<String>,
    },
    /// Open, close or toggle the shared modal
    Modal {
        #[arg(value_enum)]
        action: ModalAction,
    },
    /// List professional profiles, or show one by id
    Profiles {
        /// JSON file containing an array of profiles
        #[arg(long)]
        file: Option<PathBuf>,
        /// Show only the profile with this id
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved configuration
    Config,
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigService::new(cli.config.clone())
        .get_config()
        .context("Failed to load configuration")?;
    init_logging(&config.logging.level);

    let profiles_file = match &cli.command {
        Commands::Profiles { file, .. } => file.clone(),
        _ => None,
    };
    let boot = app::bootstrap(config, profiles_file.as_deref()).await?;
    let state = boot.app_state;

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Session { json } => commands::session::show(&state.user_session, json)?,
        Commands::Market { set } => commands::market::run(&state.market_state, set, &mut out)?,
        Commands::Modal { action } => commands::modal::run(&state.modal_state, action, &mut out)?,
        Commands::Profiles { id, json, .. } => {
            let repository = state.profile_repository.as_ref();
            match id {
                Some(id) => commands::profiles::show(repository, &id, json, &mut out).await?,
                None => commands::profiles::list(repository, json, &mut out).await?,
            }
        }
        Commands::Config => commands::config::show(&state.config)?,
    }

    Ok(())
}
