//! propagate command - Rewrite every locale with the base's key structure

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::resolve_project;
use crate::cli::Context;
use crate::core::merge::merge;
use crate::core::tree::Catalog;
use crate::ui::output;

/// Propagate the base locale's key structure into every other locale.
///
/// All catalogs are loaded and merged before anything is written, so a
/// read or parse failure anywhere aborts the run with no file touched.
/// Each file write is itself atomic (temp file + rename).
pub fn propagate(
    ctx: &Context,
    locales_dir: Option<PathBuf>,
    base: Option<&str>,
    locales: Option<&[String]>,
    dry_run: bool,
) -> Result<()> {
    let project = resolve_project(ctx, locales_dir, base, locales)?;
    let verbosity = ctx.verbosity();

    let base_catalog = project
        .store
        .load(&project.base)
        .with_context(|| format!("Failed to load base catalog '{}'", project.base))?;

    // Read-and-merge everything before the first write.
    let mut targets: Vec<Catalog> = Vec::new();
    for locale in project.others() {
        let catalog = project
            .store
            .load(locale)
            .with_context(|| format!("Failed to load catalog '{locale}'"))?;
        targets.push(catalog);
    }

    let mut planned = Vec::with_capacity(targets.len());
    for target in &targets {
        let outcome = merge(&base_catalog, target);
        for path in &outcome.conflicts {
            output::warn(
                format!(
                    "shape conflict at '{path}' between '{}' and '{}' (kept '{}')",
                    project.base,
                    target.locale(),
                    target.locale()
                ),
                verbosity,
            );
        }
        planned.push(outcome.catalog);
    }

    for (target, merged) in targets.iter().zip(&planned) {
        let target_keys = target.flatten();
        let merged_keys = merged.flatten();
        let filled = merged_keys.difference(&target_keys).count();
        let dropped = target_keys.difference(&merged_keys).count();

        if dry_run {
            output::print(
                format!(
                    "Would sync {} ({} key(s) filled from {}, {} dropped)",
                    merged.locale(),
                    filled,
                    project.base,
                    dropped
                ),
                verbosity,
            );
        } else {
            project
                .store
                .save(merged)
                .with_context(|| format!("Failed to write catalog '{}'", merged.locale()))?;
            output::print(format!("Synced {}", merged.locale()), verbosity);
        }
    }

    Ok(())
}
