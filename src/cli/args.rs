//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--config <path>`: Use a specific config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lingo - keep multi-locale translation catalogs consistent
#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if lingo was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Use this config file instead of searching for lingo.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List keys each locale is missing relative to the base
    #[command(
        name = "audit",
        long_about = "List keys each locale is missing relative to the base locale.\n\n\
            Every key path present in the base catalog but absent from a locale is \
            listed under that locale. A locale whose file does not exist at all is \
            reported as a missing file and the audit continues with the rest.\n\n\
            The command exits non-zero when any locale is out of sync, so it can \
            gate a CI pipeline.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Audit every locale in the locales directory against the base
    lingo audit

    # Audit specific locales against a different base
    lingo audit --base en --locales fr,ar,de"
    )]
    Audit {
        /// Directory holding <locale>.json files
        #[arg(long, value_name = "DIR")]
        locales_dir: Option<PathBuf>,

        /// Base locale whose key structure is authoritative
        #[arg(long, value_name = "LOCALE")]
        base: Option<String>,

        /// Locales to audit (comma separated); defaults to config, then
        /// to every catalog file found in the directory
        #[arg(long, value_name = "LOCALES", value_delimiter = ',')]
        locales: Option<Vec<String>>,
    },

    /// Compare all locales against each other and the base
    #[command(
        name = "compare",
        long_about = "Compare every locale symmetrically.\n\n\
            For each locale, shows how many keys it is missing relative to the union \
            of keys across all locales (with the first few listed), and how many keys \
            it carries that the base locale does not (\"extra keys\").\n\n\
            Unlike audit, a missing locale file fails the whole run: a symmetric \
            comparison over a partial set would be misleading.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Compare all locales found in the locales directory
    lingo compare

    # Compare a fixed list, in this report order
    lingo compare --locales en,fr,ar,de,es"
    )]
    Compare {
        /// Directory holding <locale>.json files
        #[arg(long, value_name = "DIR")]
        locales_dir: Option<PathBuf>,

        /// Base locale extra keys are reported against
        #[arg(long, value_name = "LOCALE")]
        base: Option<String>,

        /// Locales to compare (comma separated)
        #[arg(long, value_name = "LOCALES", value_delimiter = ',')]
        locales: Option<Vec<String>>,
    },

    /// Rewrite every locale with the base's key structure
    #[command(
        name = "propagate",
        long_about = "Rewrite every non-base locale with the base locale's key structure.\n\n\
            Each locale keeps its existing translations wherever it already has the \
            key; keys it lacks are filled with the base locale's value (untranslated, \
            until someone translates them); keys the base does not have are dropped.\n\n\
            All catalogs are read and merged before anything is written, so a parse \
            failure in any locale aborts the run without touching any file.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Preview what would change
    lingo propagate --dry-run

    # Sync every locale file in place
    lingo propagate"
    )]
    Propagate {
        /// Directory holding <locale>.json files
        #[arg(long, value_name = "DIR")]
        locales_dir: Option<PathBuf>,

        /// Base locale whose key structure is propagated
        #[arg(long, value_name = "LOCALE")]
        base: Option<String>,

        /// Locales to rewrite (comma separated)
        #[arg(long, value_name = "LOCALES", value_delimiter = ',')]
        locales: Option<Vec<String>>,

        /// Show what would change without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
SETUP:
    # Bash (add to ~/.bashrc)
    lingo completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    lingo completion zsh >> ~/.zshrc

    # Fish
    lingo completion fish > ~/.config/fish/completions/lingo.fish

    # PowerShell
    lingo completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
