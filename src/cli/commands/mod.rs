//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves configuration (defaults, config file, CLI flags)
//! 2. Loads catalogs through the store
//! 3. Calls the pure engine and formats the result
//!
//! Handlers never compute diffs or merges themselves and never touch
//! catalog files except through [`crate::store::CatalogStore`].

mod audit;
mod compare;
mod completion;
mod propagate;

// Re-export command functions for testing and direct invocation
pub use audit::{audit, render_audit};
pub use compare::{compare, render_compare};
pub use completion::completion;
pub use propagate::propagate;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::args::Command;
use super::Context;
use crate::core::config::Config;
use crate::core::types::LocaleName;
use crate::store::CatalogStore;
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Audit {
            locales_dir,
            base,
            locales,
        } => audit::audit(ctx, locales_dir, base.as_deref(), locales.as_deref()),
        Command::Compare {
            locales_dir,
            base,
            locales,
        } => compare::compare(ctx, locales_dir, base.as_deref(), locales.as_deref()),
        Command::Propagate {
            locales_dir,
            base,
            locales,
            dry_run,
        } => propagate::propagate(ctx, locales_dir, base.as_deref(), locales.as_deref(), dry_run),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// A resolved project: where the catalogs live, which locale is the
/// base, and which locales a command should cover.
#[derive(Debug)]
pub(crate) struct Project {
    pub store: CatalogStore,
    pub base: LocaleName,
    /// All covered locales: the base first, then the rest in the order
    /// they were configured or discovered.
    pub locales: Vec<LocaleName>,
}

impl Project {
    /// The covered locales other than the base.
    pub fn others(&self) -> impl Iterator<Item = &LocaleName> {
        self.locales.iter().filter(move |l| **l != self.base)
    }
}

/// Resolve the project for a command invocation.
///
/// Precedence per value: CLI flag, then config file, then default. The
/// locale list falls back to discovery from the locales directory when
/// neither flag nor config pins one.
pub(crate) fn resolve_project(
    ctx: &Context,
    locales_dir: Option<PathBuf>,
    base: Option<&str>,
    locales: Option<&[String]>,
) -> Result<Project> {
    let cwd = match ctx.cwd.clone() {
        Some(cwd) => cwd,
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };

    let config =
        Config::load(&cwd, ctx.config.as_deref()).context("Failed to load configuration")?;

    let base = match base {
        Some(name) => LocaleName::new(name).context("Invalid base locale")?,
        None => config.base.clone(),
    };

    let dir = match locales_dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => cwd.join(dir),
        None => config.locales_dir.clone(),
    };
    let store = CatalogStore::new(dir);

    let named = match locales {
        Some(names) => Some(
            names
                .iter()
                .map(|name| LocaleName::new(name.clone()))
                .collect::<Result<Vec<_>, _>>()
                .context("Invalid locale name")?,
        ),
        None => config.locales.clone(),
    };
    let named = match named {
        Some(named) => named,
        None => store
            .discover()
            .context("Failed to list catalog files; pass --locales or set locales in lingo.toml")?,
    };

    // Base first, then the rest in configured order.
    let mut covered = vec![base.clone()];
    covered.extend(named.into_iter().filter(|l| *l != base));

    output::debug(
        format!("locales dir: {}", store.dir().display()),
        ctx.verbosity(),
    );
    output::debug(
        format!(
            "base: {}, locales: [{}]",
            base,
            covered
                .iter()
                .map(LocaleName::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        ctx.verbosity(),
    );

    Ok(Project {
        store,
        base,
        locales: covered,
    })
}
