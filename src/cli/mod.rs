//! cli
//!
//! Command-line interface layer for Lingo.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT read or write catalogs directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! command handlers, which resolve configuration, go through the
//! [`crate::store`] for all catalog I/O, and call the pure engine in
//! [`crate::core`] for all computation.

pub mod args;
pub mod commands;

pub use args::Cli;

use std::path::PathBuf;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Execution context shared by all command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override (`--cwd`).
    pub cwd: Option<PathBuf>,
    /// Config file override (`--config`).
    pub config: Option<PathBuf>,
    /// Minimal output.
    pub quiet: bool,
    /// Diagnostic output.
    pub debug: bool,
}

impl Context {
    /// The verbosity implied by the context's flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        config: cli.config.clone(),
        quiet: cli.quiet,
        debug: cli.debug,
    };

    commands::dispatch(cli.command, &ctx)
}
