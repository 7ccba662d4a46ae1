use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod context;
mod output;

use cli::{Cli, Command};
use context::Context;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = match Context::new(&cli) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&ctx, cli.command) {
        ctx.output.error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "groupstats=debug,groupstats_inference=debug,groupstats_core=debug"
    } else {
        "groupstats=warn,groupstats_inference=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(ctx: &Context, command: Command) -> Result<()> {
    tracing::debug!(?command, "dispatching command");

    match command {
        Command::VarTest(args) => commands::hypothesis::var_test(ctx, args),
        Command::TTest(args) => commands::hypothesis::t_test(ctx, args),
        Command::MeanInterval(args) => commands::intervals::mean_interval(ctx, args),
        Command::BootstrapCorr(args) => commands::intervals::bootstrap_corr(ctx, args),
        Command::Compare(args) => commands::compare::compare(ctx, args),
        Command::Config(cmd) => commands::config::execute(ctx, cmd),
    }
}
