//! End-to-end analysis over real project trees.
//!
//! Each test writes a small checked program into a temp directory,
//! including its convention chains, and runs the full pipeline:
//! discovery → universe → chain decode → scope resolve → evaluate →
//! emit.

use conv_lint::rules::default_rules;
use conv_lint::{Analyzer, LintResult, Severity};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create dirs");
    }
    fs::write(path, content).expect("Failed to write file");
}

fn analyze(root: &Path) -> LintResult {
    let mut builder = Analyzer::builder().root(root);
    for rule in default_rules() {
        builder = builder.rule_box(rule);
    }
    builder
        .build()
        .expect("Failed to build analyzer")
        .analyze()
        .expect("Analysis failed")
}

#[test]
fn class_name_pattern_reports_non_matching_struct() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(
        dir.path(),
        "src/models.rs",
        r"
pub struct User;

#[allow(non_camel_case_types)]
pub struct fooBar;
",
    );
    write(
        dir.path(),
        "src/lib.rs",
        r#"
mod models;

fn conventions() {
    Conventions::for_namespace("crate::models")
        .for_all_classes()
        .require_class_name_pattern("^[A-Z].*", "Model types are PascalCase");
}
"#,
    );

    let result = analyze(dir.path());

    assert_eq!(result.violations.len(), 1);
    let violation = &result.violations[0];
    assert_eq!(violation.message, "Model types are PascalCase: class fooBar");
    assert_eq!(violation.code, "CL001");
    assert_eq!(violation.severity, Severity::Error);
}

#[test]
fn nullable_rule_reaches_sub_namespaces_transitively() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(
        dir.path(),
        "src/app/sub.rs",
        r"
pub struct Widget {
    pub name: String,
}
",
    );
    write(
        dir.path(),
        "src/lib.rs",
        r#"
fn conventions() {
    Conventions::for_all_sub_namespaces_of("crate::app")
        .for_all_properties()
        .require_nullable_properties();
}
"#,
    );

    let result = analyze(dir.path());

    assert_eq!(result.violations.len(), 1);
    assert_eq!(
        result.violations[0].message,
        "Property must be nullable: property name in class Widget."
    );
}

#[test]
fn violations_are_reported_against_the_chain_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(dir.path(), "src/models.rs", "pub struct Data { pub v: Vec<u8> }");
    write(
        dir.path(),
        "src/conventions.rs",
        r#"
fn conventions() {
    Conventions::for_namespace("crate::models")
        .for_all_properties()
        .require_nullable_properties("Must be optional");
}
"#,
    );

    let result = analyze(dir.path());

    assert_eq!(result.violations.len(), 1);
    let location = &result.violations[0].location;
    assert_eq!(location.file, Path::new("src/conventions.rs"));
    assert_eq!((location.line, location.column), (0, 0));
}

#[test]
fn nonexistent_namespace_scope_is_empty_not_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(dir.path(), "src/models.rs", "pub struct zzz;");
    write(
        dir.path(),
        "src/lib.rs",
        r#"
fn conventions() {
    Conventions::for_namespace("crate::nothing_here")
        .for_all_classes()
        .require_class_name_pattern("^Z");
}
"#,
    );

    let result = analyze(dir.path());
    assert!(result.violations.is_empty());
}

#[test]
fn missing_pattern_argument_skips_the_chain_silently() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(dir.path(), "src/models.rs", "pub struct definitely_wrong;");
    write(
        dir.path(),
        "src/lib.rs",
        r#"
fn conventions() {
    Conventions::for_namespace("crate::models")
        .for_all_classes()
        .require_class_name_pattern();
}
"#,
    );

    let result = analyze(dir.path());
    assert!(result.violations.is_empty());
}

#[test]
fn invalid_regex_aborts_only_its_own_chain() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(
        dir.path(),
        "src/models.rs",
        r"
pub struct Widget {
    pub name: String,
}
",
    );
    write(
        dir.path(),
        "src/lib.rs",
        r#"
fn conventions() {
    Conventions::for_namespace("crate::models")
        .for_all_classes()
        .require_class_name_pattern("^(unclosed", "Broken chain");

    Conventions::for_namespace("crate::models")
        .for_all_properties()
        .require_nullable_properties("Must be optional");
}
"#,
    );

    let result = analyze(dir.path());

    // The broken pattern reports nothing; the healthy chain still runs.
    assert_eq!(result.violations.len(), 1);
    assert_eq!(
        result.violations[0].message,
        "Must be optional: property name in class Widget."
    );
}

#[test]
fn mismatched_target_kind_drops_the_chain() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(dir.path(), "src/models.rs", "pub struct W { pub f: String }");
    write(
        dir.path(),
        "src/lib.rs",
        r#"
fn conventions() {
    Conventions::for_namespace("crate::models")
        .for_all_classes()
        .require_nullable_properties("Wrong pairing");
}
"#,
    );

    let result = analyze(dir.path());
    assert!(result.violations.is_empty());
}

#[test]
fn overlapping_chains_produce_independent_violation_sets() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write(
        dir.path(),
        "src/models.rs",
        r"
pub struct Widget {
    pub name: String,
}
",
    );
    write(
        dir.path(),
        "src/lib.rs",
        r#"
fn conventions() {
    Conventions::for_namespace("crate::models")
        .for_all_properties()
        .require_nullable_properties("First");

    Conventions::for_all_sub_namespaces_of("crate")
        .for_all_properties()
        .require_nullable_properties("Second");
}
"#,
    );

    let result = analyze(dir.path());

    let messages: Vec<&str> = result
        .violations
        .iter()
        .map(|v| v.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "First: property name in class Widget.",
            "Second: property name in class Widget.",
        ]
    );
}
