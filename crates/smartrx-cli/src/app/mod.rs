mod bootstrap;
mod state;

pub use bootstrap::{AppBootstrap, bootstrap};
pub use state::AppState;
