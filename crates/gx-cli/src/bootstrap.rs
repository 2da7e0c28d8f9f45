use anyhow::Context;
use gx_config::GradexConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML files, `GRADEX_*`) and apply CLI
/// overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<GradexConfig> {
    let config = GradexConfig::load_with_dotenv().context("failed to load gradex configuration")?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: GradexConfig, flags: &GlobalFlags) -> anyhow::Result<GradexConfig> {
    if let Some(base_url) = &flags.base_url {
        config.canvas.base_url.clone_from(base_url);
    }
    config
        .validate()
        .context("invalid configuration after applying command-line overrides")?;

    tracing::debug!(canvas = ?config.canvas, export = ?config.export, "resolved configuration");
    Ok(config)
}
