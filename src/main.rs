#![deny(clippy::unwrap_used)]

mod cmd;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    let cli = Clientlib::parse();

    tracing_subscriber::registry()
        // Filter spans based on the verbosity flags.
        .with(eval_logging(&cli))
        // Markup goes to stdout, so logs go to stderr.
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        // Install this registry as the global tracing registry.
        .try_init()
        .context("error initializing logging")?;

    tracing::debug!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    cli.run()
}

fn eval_logging(cli: &Clientlib) -> tracing_subscriber::EnvFilter {
    let directives = match (cli.verbose, cli.quiet) {
        // quiet overrides verbose
        (_, true) => "error,clientlib=warn",
        // increase verbosity
        (0, false) => "error,clientlib=info",
        (1, false) => "error,clientlib=debug",
        (_, false) => "error,clientlib=trace",
    };
    tracing_subscriber::EnvFilter::new(directives)
}

/// Render client library categories into <link> and <script> markup.
#[derive(Parser)]
#[command(about, author, version)]
struct Clientlib {
    #[command(subcommand)]
    action: ClientlibSubcommands,
    /// Path to the clientlib config file or its directory [default: Clientlib.toml]
    #[arg(long, env = "CLIENTLIB_CONFIG", global(true))]
    pub config: Option<PathBuf>,
    /// Enable verbose logging.
    #[arg(short, long, global(true), action=ArgAction::Count)]
    pub verbose: u8,
    /// Be more quiet, conflicts with --verbose
    #[arg(short, long, global(true), conflicts_with("verbose"))]
    pub quiet: bool,
}

impl Clientlib {
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn run(self) -> Result<()> {
        match self.action {
            ClientlibSubcommands::Include(inner) => inner.run(self.config),
            ClientlibSubcommands::Config(inner) => inner.run(self.config),
        }
    }
}

#[derive(Subcommand)]
enum ClientlibSubcommands {
    /// Render the tags for a set of categories.
    Include(cmd::include::Include),
    /// Clientlib config controls.
    Config(cmd::config::Config),
}

#[cfg(test)]
mod tests {
    use crate::Clientlib;
    use clap::Parser;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Clientlib::command().debug_assert();
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Clientlib::try_parse_from(["clientlib", "-q", "-v", "config", "show"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Clientlib::try_parse_from(["clientlib", "config", "show", "-vv"])
            .expect("arguments are valid");
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
