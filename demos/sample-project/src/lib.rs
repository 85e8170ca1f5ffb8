//! Sample project checked by conv-lint.
//!
//! The conventions below are declared once and enforced over every type
//! in `crate::models` by the `check!()` test in `tests/conventions.rs`.

pub mod models;

use conv_lint::dsl::Conventions;

/// Declares the conventions this crate is checked against.
///
/// The chains are never executed; conv-lint pattern-matches them during
/// analysis.
pub fn conventions() {
    Conventions::for_namespace("crate::models")
        .for_all_classes()
        .require_class_name_pattern("^[A-Z]", "Model types are PascalCase");

    Conventions::for_namespace("crate::models")
        .for_all_properties()
        .require_nullable_properties("Model fields must be optional");
}
