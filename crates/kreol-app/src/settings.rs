use std::path::{Path, PathBuf};

use anyhow::Context;
use kreol_config::Config;

/// Looked up in the working directory when no config is given
const DEFAULT_CONFIG_FILE: &str = "kreol.json";

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var("KREOL_CONFIG") {
        return Some(PathBuf::from(path));
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.exists().then_some(local)
}

/// Load the config file (explicit, `KREOL_CONFIG`, or `./kreol.json`),
/// then apply `KREOL_*` environment overrides
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = config_path(explicit) else {
        return Ok(Config::new());
    };

    let mut config = Config::load_from_file(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    config.apply_env();
    Ok(config)
}
