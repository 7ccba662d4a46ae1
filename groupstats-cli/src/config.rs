//! CLI configuration management

use anyhow::{Context as _, Result};
use config::{Config as ConfigLoader, Environment, File};
use directories::ProjectDirs;
use groupstats_core::AnalysisConfig;
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `GROUPSTATS_ALPHA`
pub const ENV_PREFIX: &str = "GROUPSTATS";

/// Analysis defaults together with the file they were read from
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub analysis: AnalysisConfig,
    pub source: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from the explicit path or the default location,
    /// then apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigLoader::builder();
        let mut source = None;

        match explicit {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
                source = Some(path.to_path_buf());
            }
            None => {
                if let Some(path) = Self::config_path().filter(|p| p.exists()) {
                    builder = builder.add_source(File::from(path.as_path()).required(false));
                    source = Some(path);
                }
            }
        }

        let loaded = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        let analysis: AnalysisConfig = loaded
            .try_deserialize()
            .context("Failed to parse configuration")?;
        let analysis = analysis
            .validated()
            .context("Invalid configuration")?;

        Ok(Self { analysis, source })
    }

    /// Get the default configuration file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "groupstats", "groupstats")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
