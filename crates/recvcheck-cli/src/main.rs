//! recvcheck CLI: finds Go types whose methods mix pointer and value receivers.
//!
//! This binary provides the `recvcheck` command with subcommands for checking,
//! initialization, and shell completions. See `recvcheck --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "RECVCHECK_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter: Box<dyn recvcheck_output::OutputFormatter> = if cli.json {
        Box::new(recvcheck_output::json::JsonFormatter)
    } else {
        Box::new(recvcheck_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check { paths, overrides } => {
            commands::check::run(&*formatter, cli.verbose, paths, &overrides)
        }
        Commands::Init => commands::init::run(cli.verbose),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}

/// Diagnostics go to stderr: `--verbose` > `RECVCHECK_LOG` > `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
