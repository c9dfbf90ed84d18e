//! `gtdb` -- command-line front end for gittextdb.
//!
//! Parses CLI arguments with clap, loads configuration, and dispatches to
//! command handlers.

mod cli;
mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Filter installed by `--verbose`.
const LOG_FILTER: &str = "gtdb=debug,gittextdb_core=debug,gittextdb_config=debug";

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(LOG_FILTER)
            .with_writer(std::io::stderr)
            .init();
    }

    let ctx = match RuntimeContext::from_global_args(&cli.global) {
        Ok(ctx) => ctx,
        Err(e) => {
            output::output_error(&e, cli.global.json);
            std::process::exit(1);
        }
    };
    tracing::debug!(?ctx, "runtime context ready");

    // Handle errors: print message and exit with code 1
    if let Err(e) = dispatch(&ctx, cli.command) {
        output::output_error(&e, ctx.json);
        std::process::exit(1);
    }
}

fn dispatch(ctx: &RuntimeContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Create(args)) => commands::create::run(ctx, &args),
        Some(Commands::Exists(args)) => commands::exists::run(ctx, &args),
        Some(Commands::Info(args)) => commands::info::run(ctx, &args),
        Some(Commands::Version) => commands::version::run(ctx),
        None => {
            // No subcommand -- print help
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    }
}
