//! audit command - List keys each locale is missing relative to the base

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use super::resolve_project;
use crate::cli::Context;
use crate::core::diff::{diff, DiffReport};
use crate::core::types::{KeyPath, LocaleName};
use crate::store::StoreError;
use crate::ui::output;

/// Audit every covered locale against the base locale.
///
/// A locale without a catalog file is reported and the audit continues;
/// a malformed catalog aborts the run. Exits with an error when any
/// locale is missing keys or a file, so CI can gate on the result.
pub fn audit(
    ctx: &Context,
    locales_dir: Option<PathBuf>,
    base: Option<&str>,
    locales: Option<&[String]>,
) -> Result<()> {
    let project = resolve_project(ctx, locales_dir, base, locales)?;
    let verbosity = ctx.verbosity();

    let base_catalog = project
        .store
        .load(&project.base)
        .with_context(|| format!("Failed to load base catalog '{}'", project.base))?;

    let mut catalogs = vec![base_catalog];
    let mut absent = Vec::new();
    for locale in project.others() {
        match project.store.load(locale) {
            Ok(catalog) => catalogs.push(catalog),
            Err(StoreError::NotFound { .. }) => absent.push(locale.clone()),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to load catalog '{locale}'"))
            }
        }
    }

    let report = diff(&catalogs, &project.base)?;

    for entry in &report.locales {
        if !entry.shape_conflicts.is_empty() {
            output::warn(
                format!(
                    "{} shape conflict(s) between '{}' and '{}': {}",
                    entry.shape_conflicts.len(),
                    project.base,
                    entry.locale,
                    joined(&entry.shape_conflicts)
                ),
                verbosity,
            );
        }
    }

    let rendered = render_audit(&report, &absent);
    if rendered.is_empty() {
        output::print(
            format!(
                "All {} locale(s) in sync with '{}'",
                report.locales.len() - 1,
                project.base
            ),
            verbosity,
        );
        return Ok(());
    }
    output::print(rendered.trim_end(), verbosity);

    let out_of_sync =
        absent.len() + report.locales.iter().filter(|d| !d.is_complete()).count();
    bail!(
        "{} locale(s) out of sync with '{}'",
        out_of_sync,
        project.base
    )
}

/// Render the audit report. Empty when every locale has every base key
/// and every file exists.
pub fn render_audit(report: &DiffReport, absent: &[LocaleName]) -> String {
    let mut out = String::new();

    for locale in absent {
        out.push_str(&format!("Missing file: {locale}.json\n"));
    }

    for entry in &report.locales {
        if entry.locale == report.base || entry.missing.is_empty() {
            continue;
        }
        out.push_str(&format!("Missing in {}:\n", entry.locale));
        for path in &entry.missing {
            out.push_str(&format!("  - {path}\n"));
        }
    }

    out
}

fn joined(paths: &[KeyPath]) -> String {
    paths
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
