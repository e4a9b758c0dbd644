//! compare command - Symmetric N-way comparison across all locales

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::resolve_project;
use crate::cli::Context;
use crate::core::diff::{diff, DiffReport};
use crate::core::types::KeyPath;
use crate::ui::output;

/// How many key paths each truncated listing shows.
const LISTING_LIMIT: usize = 10;

/// Compare every covered locale against the union and the base.
///
/// Every catalog must load: a missing file fails the run, because a
/// symmetric comparison over a partial locale set would be misleading.
pub fn compare(
    ctx: &Context,
    locales_dir: Option<PathBuf>,
    base: Option<&str>,
    locales: Option<&[String]>,
) -> Result<()> {
    let project = resolve_project(ctx, locales_dir, base, locales)?;
    let verbosity = ctx.verbosity();

    let mut catalogs = Vec::with_capacity(project.locales.len());
    for locale in &project.locales {
        let catalog = project
            .store
            .load(locale)
            .with_context(|| format!("Failed to load catalog '{locale}'"))?;
        catalogs.push(catalog);
    }

    let report = diff(&catalogs, &project.base)?;
    output::print(render_compare(&report).trim_end(), verbosity);
    Ok(())
}

/// Render the comparison report, one section per locale in report order.
pub fn render_compare(report: &DiffReport) -> String {
    let mut out = String::new();

    for entry in &report.locales {
        out.push_str(&format!("--- {} ---\n", entry.locale));

        out.push_str(&format!("Missing keys: {}\n", entry.missing_from_union.len()));
        push_listing(&mut out, &entry.missing_from_union);

        out.push_str(&format!(
            "Extra keys compared to {}: {}\n",
            report.base,
            entry.extra.len()
        ));
        push_listing(&mut out, &entry.extra);

        if !entry.shape_conflicts.is_empty() {
            out.push_str(&format!(
                "Shape conflicts with {}: {}\n",
                report.base,
                entry.shape_conflicts.len()
            ));
            push_listing(&mut out, &entry.shape_conflicts);
        }

        out.push('\n');
    }

    out
}

/// Append the first [`LISTING_LIMIT`] paths, with an ellipsis when more
/// were cut.
fn push_listing(out: &mut String, paths: &[KeyPath]) {
    for path in paths.iter().take(LISTING_LIMIT) {
        out.push_str(&format!("  - {path}\n"));
    }
    if paths.len() > LISTING_LIMIT {
        out.push_str("  ...\n");
    }
}
