//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup. The core crate never sees it;
//! only the pieces it needs (the [`Toolchain`]) are handed down.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables: `CREATE_NEXT_PRO__TOOLS__GIT=/usr/bin/git`
//! 3. Config file: `--config FILE`, else `<config dir>/create-next-pro/config.toml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use nextpro_core::application::Toolchain;

const ENV_PREFIX: &str = "CREATE_NEXT_PRO";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
    /// Executables for npx, yarn and git.
    pub tools: Toolchain,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the process
    /// environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "loading configuration");

        Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(env.prefix_separator("__").separator("__"))
            .build()
            .with_context(|| format!("could not read configuration from {}", path.display()))?
            .try_deserialize()
            .context("configuration has an unexpected shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for the platform config dir, falling
    /// back to `.create-next-pro.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "create-next-pro")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-next-pro.toml"))
    }
}
