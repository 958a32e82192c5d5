use anyhow::Result;
use smartrx_core::config::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
