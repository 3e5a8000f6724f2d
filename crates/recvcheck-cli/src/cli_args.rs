use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use recvcheck_core::config::{CheckerConfig, ConstructorStrategy};

#[derive(Parser, Debug)]
#[command(
    name = "recvcheck",
    version,
    about = "Find Go types whose methods mix pointer and value receivers"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug details to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check Go packages for mixed receiver kinds
    Check {
        /// Files or directories to check (default: current directory)
        paths: Vec<PathBuf>,
        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Write a default .recvcheck.json in the current directory
    Init,

    /// Generate shell completion scripts
    Completion {
        /// bash, zsh, fish, elvish or powershell
        shell: String,
    },
}

/// Command-line settings layered over `.recvcheck.json`.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct ConfigOverrides {
    /// Also check the result types of constructors
    #[arg(long)]
    pub constructors: bool,

    /// Constructor regex with a named `Type` group
    #[arg(long, value_name = "REGEX", conflicts_with = "constructor_prefix")]
    pub constructor_pattern: Option<String>,

    /// Constructor name prefix
    #[arg(long, value_name = "PREFIX")]
    pub constructor_prefix: Option<String>,

    /// Check standard interface methods (UnmarshalJSON, Scan, Read, ...) too
    #[arg(long)]
    pub no_skip_known: bool,

    /// Leave methods with this name out of the check (repeatable)
    #[arg(long = "skip-method", value_name = "NAME")]
    pub skip_methods: Vec<String>,

    /// Leave methods whose name matches this regex out of the check
    #[arg(long, value_name = "REGEX")]
    pub skip_pattern: Option<String>,

    /// Check generated files as well
    #[arg(long)]
    pub include_generated: bool,

    /// Leave `_test.go` files out
    #[arg(long)]
    pub exclude_tests: bool,
}

impl ConfigOverrides {
    /// Flags only ever turn a setting on or replace a value; an absent flag
    /// keeps what the file says.
    pub fn apply(&self, config: &mut CheckerConfig) {
        if self.constructors {
            config.constructor.enabled = true;
        }
        if let Some(pattern) = &self.constructor_pattern {
            config.constructor.strategy = ConstructorStrategy::Pattern;
            config.constructor.pattern = pattern.clone();
        }
        if let Some(prefix) = &self.constructor_prefix {
            config.constructor.strategy = ConstructorStrategy::FixedPrefix;
            config.constructor.prefix = prefix.clone();
        }
        if self.no_skip_known {
            config.skip_known_interface_methods = false;
        }
        config.skip_methods.extend(self.skip_methods.iter().cloned());
        if let Some(pattern) = &self.skip_pattern {
            config.skip_pattern = Some(pattern.clone());
        }
        if self.include_generated {
            config.skip_generated = false;
        }
        if self.exclude_tests {
            config.include_tests = false;
        }
    }
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
