//! Catalog configuration discovery and loading.

use anyhow::{Context, Result};
use promptx_router::{CatalogLoader, RouterSettings};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Local config file name, looked up in the current directory.
const LOCAL_CONFIG: &str = "promptx.toml";

/// Load router settings.
///
/// Configuration precedence:
/// 1. `--config` flag or `PROMPTX_CONFIG` (handled by clap)
/// 2. Local config file (./promptx.toml)
/// 3. Global config file (~/.promptx/config.toml)
/// 4. Built-in catalog
pub fn load_settings(explicit: Option<&Path>) -> Result<RouterSettings> {
    if let Some(path) = explicit {
        return CatalogLoader::load(path).with_context(|| format!("Failed to load config {}", path.display()));
    }

    match discover() {
        Some(path) => {
            debug!(path = %path.display(), "Using discovered config");
            CatalogLoader::load(&path).with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(RouterSettings::default()),
    }
}

fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some(local);
    }

    dirs::home_dir().map(|home| home.join(".promptx").join("config.toml")).filter(|path| path.is_file())
}
