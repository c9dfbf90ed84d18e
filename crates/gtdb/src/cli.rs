//! Clap CLI definitions for the `gtdb` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// gtdb -- text database directory checks.
#[derive(Parser, Debug)]
#[command(
    name = "gtdb",
    about = "Check and prepare gittextdb database directories",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Configuration file (default: ./.gittextdb.yaml if present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a new database handle; fails if the directory already exists.
    #[command(alias = "new")]
    Create(DirArgs),

    /// Report whether the database directory exists (exit 2 when absent).
    Exists(DirArgs),

    /// Show the resolved database directory and where it came from.
    Info(DirArgs),

    /// Print version information.
    Version,
}

/// Arguments for commands that operate on one database directory.
#[derive(Args, Debug, Clone)]
pub struct DirArgs {
    /// Database directory (default: `directory` from the config).
    pub dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_create_with_dir() {
        let cli = Cli::try_parse_from(["gtdb", "create", "notes"]).unwrap();
        match cli.command {
            Some(Commands::Create(args)) => assert_eq!(args.dir, Some(PathBuf::from("notes"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gtdb", "exists", "--json", "-q"]).unwrap();
        assert!(cli.global.json);
        assert!(cli.global.quiet);
        assert!(matches!(cli.command, Some(Commands::Exists(DirArgs { dir: None }))));
    }
}
