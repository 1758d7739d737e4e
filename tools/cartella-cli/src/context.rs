//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cartella_data::HttpCatalogApi;
use cartella_store::{Storefront, StorefrontConfig};

use crate::config;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration, environment overrides applied.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or by searching upwards.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (config::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (config::load(&path)?, Some(path)),
                None => (StorefrontConfig::default(), None),
            },
        };

        Ok(Self {
            config: config.with_env_overrides(),
            config_path,
            output,
            cwd,
        })
    }

    /// A fresh session against the configured service.
    pub fn storefront(&self) -> Storefront<HttpCatalogApi> {
        self.output
            .debug(&format!("Catalog service: {}", self.config.api.base_url));
        Storefront::new(self.config.http_api())
    }
}

/// Nearest config file in `start` or its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        config::CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cartella-ctx-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(dir.join("a").join("b")).unwrap();
        dir
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = scratch_dir("walk");
        std::fs::write(root.join("cartella.toml"), "").unwrap();

        let found = find_config(&root.join("a").join("b"));
        std::fs::remove_dir_all(&root).ok();

        assert_eq!(found, Some(root.join("cartella.toml")));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let root = scratch_dir("nearest");
        std::fs::write(root.join("cartella.toml"), "").unwrap();
        std::fs::write(root.join("a").join("cartella.json"), "{}").unwrap();

        let found = find_config(&root.join("a").join("b"));
        std::fs::remove_dir_all(&root).ok();

        assert_eq!(found, Some(root.join("a").join("cartella.json")));
    }
}
