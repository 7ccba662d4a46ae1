//! CLI execution context

use anyhow::Result;
use groupstats_core::AnalysisConfig;
use groupstats_inference::TwoSampleAnalyzer;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::output::OutputWriter;

/// Execution context for CLI commands
pub struct Context {
    /// Analysis defaults after file and environment layering
    pub config: AnalysisConfig,

    /// File the configuration was read from, if any
    pub config_source: Option<PathBuf>,

    /// Output writer
    pub output: OutputWriter,
}

impl Context {
    /// Create a new context from CLI arguments
    pub fn new(cli: &Cli) -> Result<Self> {
        let loaded = CliConfig::load(cli.config.as_deref())?;

        Ok(Self {
            config: loaded.analysis,
            config_source: loaded.source,
            output: OutputWriter::new(cli.output, cli.no_color),
        })
    }

    /// Analyzer over the loaded configuration
    pub fn analyzer(&self) -> Result<TwoSampleAnalyzer> {
        self.analyzer_with(|_| {})
    }

    /// Analyzer over the loaded configuration with command-line overrides applied
    pub fn analyzer_with<F>(&self, overrides: F) -> Result<TwoSampleAnalyzer>
    where
        F: FnOnce(&mut AnalysisConfig),
    {
        let mut config = self.config.clone();
        overrides(&mut config);
        Ok(TwoSampleAnalyzer::new(config)?)
    }
}
