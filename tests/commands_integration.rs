//! Integration tests for the lingo commands.
//!
//! These tests exercise the full binary against real locale directories:
//! config resolution, catalog loading, report rendering, and the
//! all-or-nothing write policy of propagate.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Test fixture holding a project directory with a `locales/` subdir.
struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("locales")).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn locale_path(&self, name: &str) -> PathBuf {
        self.path().join("locales").join(format!("{name}.json"))
    }

    fn write_locale(&self, name: &str, contents: &str) {
        fs::write(self.locale_path(name), contents).unwrap();
    }

    fn read_locale(&self, name: &str) -> String {
        fs::read_to_string(self.locale_path(name)).unwrap()
    }

    fn lingo(&self) -> Command {
        let mut cmd = Command::cargo_bin("lingo").expect("binary builds");
        cmd.current_dir(self.path());
        cmd
    }
}

// =============================================================================
// audit
// =============================================================================

#[test]
fn audit_lists_missing_keys_and_fails() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": {"x": "1", "y": "2"}, "b": "3"}"#);
    project.write_locale("fr", r#"{"a": {"x": "9"}}"#);

    project
        .lingo()
        .arg("audit")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Missing in fr:"))
        .stdout(predicate::str::contains("  - a.y"))
        .stdout(predicate::str::contains("  - b"))
        .stderr(predicate::str::contains("out of sync with 'en'"));
}

#[test]
fn audit_succeeds_when_locales_are_in_sync() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "1"}"#);
    project.write_locale("fr", r#"{"a": "un"}"#);

    project
        .lingo()
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("in sync with 'en'"));
}

#[test]
fn audit_reports_missing_file_and_continues() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "1"}"#);
    project.write_locale("fr", r#"{"a": "un"}"#);

    project
        .lingo()
        .args(["audit", "--locales", "fr,de"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Missing file: de.json"))
        // fr still audited despite de being absent.
        .stdout(predicate::str::contains("Missing in").not());
}

#[test]
fn audit_fails_on_malformed_catalog() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "1"}"#);
    project.write_locale("fr", "{not json");

    project
        .lingo()
        .arg("audit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed catalog"))
        .stderr(predicate::str::contains("fr"));
}

#[test]
fn audit_warns_on_shape_conflicts() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "flat"}"#);
    project.write_locale("fr", r#"{"a": {"x": "nested"}}"#);

    project
        .lingo()
        .arg("audit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("shape conflict"));
}

// =============================================================================
// compare
// =============================================================================

#[test]
fn compare_reports_union_missing_and_extras() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "1", "b": "2"}"#);
    project.write_locale("fr", r#"{"a": "un", "c": "trois"}"#);

    project
        .lingo()
        .arg("compare")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- en ---"))
        .stdout(predicate::str::contains("--- fr ---"))
        .stdout(predicate::str::contains("Extra keys compared to en: 1"))
        .stdout(predicate::str::contains("  - c"));
}

#[test]
fn compare_truncates_long_listings() {
    let project = TestProject::new();
    let pairs: Vec<String> = (0..12).map(|i| format!("\"key{i:02}\": \"v\"")).collect();
    project.write_locale("en", &format!("{{{}}}", pairs.join(", ")));
    project.write_locale("fr", "{}");

    let assert = project.lingo().arg("compare").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Missing keys: 12"));
    assert!(stdout.contains("  - key09"));
    assert!(!stdout.contains("  - key10"), "listing should stop at 10");
    assert!(stdout.contains("  ..."));
}

#[test]
fn compare_fails_when_a_file_is_missing() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "1"}"#);

    project
        .lingo()
        .args(["compare", "--locales", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog 'fr'"));
}

// =============================================================================
// propagate
// =============================================================================

#[test]
fn propagate_rewrites_locales_with_base_structure() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": {"x": "1", "y": "2"}, "b": "3"}"#);
    project.write_locale("fr", r#"{"a": {"x": "9"}, "c": "4"}"#);

    project
        .lingo()
        .arg("propagate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Synced fr"));

    // Overrides kept, gaps filled from en, extras dropped, 2-space indent.
    assert_eq!(
        project.read_locale("fr"),
        "{\n  \"a\": {\n    \"x\": \"9\",\n    \"y\": \"2\"\n  },\n  \"b\": \"3\"\n}\n"
    );
    // Base is never rewritten.
    assert_eq!(project.read_locale("en"), r#"{"a": {"x": "1", "y": "2"}, "b": "3"}"#);
}

#[test]
fn propagate_preserves_non_ascii_unescaped() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"greeting": "Hello"}"#);
    project.write_locale("ar", "{}");

    project.lingo().arg("propagate").assert().success();

    project.write_locale("en", r#"{"greeting": "Hello", "extra": "new"}"#);
    project.write_locale("ar", r#"{"greeting": "مرحبا"}"#);
    project.lingo().arg("propagate").assert().success();

    let written = project.read_locale("ar");
    assert!(written.contains("مرحبا"), "translation must stay unescaped");
    assert!(written.contains("\"extra\": \"new\""));
}

#[test]
fn propagate_dry_run_writes_nothing() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "1", "b": "2"}"#);
    project.write_locale("fr", r#"{"a": "un", "c": "3"}"#);
    let before = project.read_locale("fr");

    project
        .lingo()
        .args(["propagate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Would sync fr (1 key(s) filled from en, 1 dropped)",
        ));

    assert_eq!(project.read_locale("fr"), before);
}

#[test]
fn propagate_aborts_before_writing_when_any_catalog_is_malformed() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "1", "b": "2"}"#);
    project.write_locale("fr", r#"{"a": "un"}"#);
    project.write_locale("de", "{broken");
    let fr_before = project.read_locale("fr");

    project
        .lingo()
        .arg("propagate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("de"));

    // fr was loadable and out of sync, but nothing may be written.
    assert_eq!(project.read_locale("fr"), fr_before);
}

// =============================================================================
// configuration
// =============================================================================

#[test]
fn config_file_sets_locales_dir_and_base() {
    let project = TestProject::new();
    fs::create_dir_all(project.path().join("src/i18n/locales")).unwrap();
    fs::write(
        project.path().join("lingo.toml"),
        "locales_dir = \"src/i18n/locales\"\nbase = \"de\"\n",
    )
    .unwrap();
    fs::write(
        project.path().join("src/i18n/locales/de.json"),
        r#"{"a": "1"}"#,
    )
    .unwrap();
    fs::write(
        project.path().join("src/i18n/locales/fr.json"),
        r#"{"a": "un"}"#,
    )
    .unwrap();

    project
        .lingo()
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("in sync with 'de'"));
}

#[test]
fn cwd_flag_runs_from_elsewhere() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "1"}"#);
    project.write_locale("fr", r#"{"a": "un"}"#);

    Command::cargo_bin("lingo")
        .unwrap()
        .args(["--cwd", project.path().to_str().unwrap(), "audit"])
        .assert()
        .success();
}

#[test]
fn flags_override_config_file() {
    let project = TestProject::new();
    fs::write(project.path().join("lingo.toml"), "base = \"de\"\n").unwrap();
    project.write_locale("en", r#"{"a": "1"}"#);
    project.write_locale("fr", r#"{"a": "un"}"#);

    // Config says de (absent); the flag wins and the audit passes.
    project
        .lingo()
        .args(["audit", "--base", "en"])
        .assert()
        .success();
}

#[test]
fn quiet_suppresses_report_output() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "1", "b": "2"}"#);
    project.write_locale("fr", r#"{"a": "un"}"#);

    project
        .lingo()
        .args(["--quiet", "audit"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_locale_flag_is_rejected() {
    let project = TestProject::new();
    project.write_locale("en", r#"{"a": "1"}"#);

    project
        .lingo()
        .args(["audit", "--locales", "../evil"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid locale name"));
}
