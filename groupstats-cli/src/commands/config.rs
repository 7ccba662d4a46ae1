//! Configuration commands

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use comfy_table::Cell;
use groupstats_core::AnalysisConfig;
use serde::Serialize;

use crate::config::CliConfig;
use crate::context::Context;
use crate::output::{print_field, print_section, TableDisplay};

/// Configuration inspection commands
#[derive(Debug, Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration
    Show,

    /// Print the default configuration file path
    Path,
}

/// Execute config commands
pub fn execute(ctx: &Context, cmd: ConfigCommands) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(ctx),
        ConfigSubcommand::Path => path(),
    }
}

/// Displayable configuration for output
#[derive(Debug, Serialize)]
struct ConfigDisplay {
    source: Option<String>,
    #[serde(flatten)]
    analysis: AnalysisConfig,
}

impl TableDisplay for ConfigDisplay {
    fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::new(self.analysis.alpha),
            Cell::new(self.analysis.bootstrap_iterations),
            Cell::new(self.analysis.seed.map_or("-".to_string(), |s| s.to_string())),
            Cell::new(self.analysis.denominator_df),
        ]
    }

    fn display_single(&self) {
        print_section("Configuration");
        match &self.source {
            Some(source) => print_field("Source", source),
            None => print_field("Source", &"defaults".dimmed().to_string()),
        }
        print_field("alpha", &self.analysis.alpha.to_string());
        print_field(
            "bootstrap_iterations",
            &self.analysis.bootstrap_iterations.to_string(),
        );
        print_field(
            "seed",
            &self.analysis.seed.map_or("-".to_string(), |s| s.to_string()),
        );
        print_field("denominator_df", &self.analysis.denominator_df.to_string());
    }

    fn display_compact(&self) {
        println!(
            "alpha={}\tbootstrap_iterations={}\tseed={}\tdenominator_df={}",
            self.analysis.alpha,
            self.analysis.bootstrap_iterations,
            self.analysis.seed.map_or("-".to_string(), |s| s.to_string()),
            self.analysis.denominator_df
        );
    }
}

fn show(ctx: &Context) -> Result<()> {
    let display = ConfigDisplay {
        source: ctx
            .config_source
            .as_ref()
            .map(|p| p.display().to_string()),
        analysis: ctx.config.clone(),
    };
    ctx.output.write(&display)
}

fn path() -> Result<()> {
    match CliConfig::config_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", "No configuration directory available".dimmed()),
    }
    Ok(())
}
