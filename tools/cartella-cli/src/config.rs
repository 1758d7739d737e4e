//! Config file loading and saving.

use std::path::Path;

use anyhow::{Context, Result};
use cartella_store::StorefrontConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["cartella.toml", ".cartella.toml", "cartella.json"];

/// Load config from a TOML or JSON file (chosen by extension).
pub fn load(path: &Path) -> Result<StorefrontConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse(path, &content)
}

/// Save config to a TOML or JSON file (chosen by extension).
pub fn save(config: &StorefrontConfig, path: &Path) -> Result<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

fn parse(path: &Path, content: &str) -> Result<StorefrontConfig> {
    if is_json(path) {
        serde_json::from_str(content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
    } else {
        toml::from_str(content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Commented starter config written by `cartella config init`.
pub fn generate_default_config() -> String {
    r#"# Cartella storefront configuration

[api]
# Root of the catalog service. CARTELLA_API_URL overrides this.
base_url = "http://localhost:8000"
# Per-request timeout in milliseconds. Omit for no timeout.
# timeout_ms = 5000

[log]
# Used when RUST_LOG is not set.
level = "info"
# "human" or "json"
format = "human"
"#
    .to_string()
}
