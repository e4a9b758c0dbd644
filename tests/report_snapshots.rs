//! Snapshot tests for rendered reports.
//!
//! The report formats are part of the CLI's contract (scripts grep
//! them), so lock them with snapshots.

use lingo::cli::commands::{render_audit, render_compare};
use lingo::core::diff::diff;
use lingo::core::tree::{Catalog, Node};
use lingo::core::types::LocaleName;

fn locale(name: &str) -> LocaleName {
    LocaleName::new(name).unwrap()
}

fn catalog(name: &str, root: Node) -> Catalog {
    Catalog::new(locale(name), root).unwrap()
}

#[test]
fn audit_report_format() {
    let en = catalog(
        "en",
        Node::branch([
            (
                "common",
                Node::branch([("ok", Node::leaf("OK")), ("cancel", Node::leaf("Cancel"))]),
            ),
            ("title", Node::leaf("Home")),
        ]),
    );
    let fr = catalog(
        "fr",
        Node::branch([("common", Node::branch([("ok", Node::leaf("OK"))]))]),
    );

    let report = diff(&[en, fr], &locale("en")).unwrap();
    let rendered = render_audit(&report, &[locale("hi")]);

    insta::assert_snapshot!(rendered.trim_end(), @r"
    Missing file: hi.json
    Missing in fr:
      - common.cancel
      - title
    ");
}

#[test]
fn audit_report_is_empty_when_in_sync() {
    let en = catalog("en", Node::branch([("a", Node::leaf("1"))]));
    let fr = catalog("fr", Node::branch([("a", Node::leaf("un"))]));

    let report = diff(&[en, fr], &locale("en")).unwrap();
    assert_eq!(render_audit(&report, &[]), "");
}

#[test]
fn compare_report_format() {
    let en = catalog(
        "en",
        Node::branch([("a", Node::leaf("1")), ("b", Node::leaf("2"))]),
    );
    let fr = catalog(
        "fr",
        Node::branch([("a", Node::leaf("un")), ("c", Node::leaf("trois"))]),
    );

    let report = diff(&[en, fr], &locale("en")).unwrap();
    let rendered = render_compare(&report);

    insta::assert_snapshot!(rendered.trim_end(), @r"
    --- en ---
    Missing keys: 1
      - c
    Extra keys compared to en: 0

    --- fr ---
    Missing keys: 1
      - b
    Extra keys compared to en: 1
      - c
    ");
}
