//! Fixture tests for the extractor.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::parsing::{extract_comments, snapshot};

#[test]
fn fixture_nested_thread() {
    assert_fixture("nested_thread");
}

#[test]
fn fixture_unterminated_block() {
    assert_fixture("unterminated_block");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let comments = extract_comments(&md);
    snapshot::invariants(&md, &comments);

    let snap = snapshot::normalize(&comments);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_debug_snapshot!(name, snap);
    });
}

#[test]
fn empty_document() {
    assert!(extract_comments("").is_empty());
}

#[test]
fn plain_markdown_has_no_comments() {
    let md = "# Title\n\n> an ordinary quote\n> [!note] another callout\n- list\n";
    assert!(extract_comments(md).is_empty());
}

#[test]
fn extraction_is_idempotent() {
    let md = std::fs::read_to_string(format!(
        "{}/src/parsing/tests/fixtures/nested_thread.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    assert_eq!(extract_comments(&md), extract_comments(&md));
}
