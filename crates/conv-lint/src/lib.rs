//! # conv-lint
//!
//! In-source convention checker for Rust: naming and nullability rules
//! declared as call chains inside the code they constrain.
//!
//! This is the main facade crate that re-exports the core framework, the
//! built-in rules, and the declaration DSL.
//!
//! ## Declaring conventions
//!
//! Conventions are written in the checked program itself, scoped to a
//! module path:
//!
//! ```
//! use conv_lint::dsl::Conventions;
//!
//! Conventions::for_namespace("crate::models")
//!     .for_all_classes()
//!     .require_class_name_pattern("^[A-Z]", "Model types are PascalCase");
//!
//! Conventions::for_all_sub_namespaces_of("crate::api")
//!     .for_all_properties()
//!     .require_nullable_properties("API fields must be optional");
//! ```
//!
//! The chains are never executed; the analyzer pattern-matches their
//! syntax and evaluates the rules against every type declaration in the
//! named scope.
//!
//! ## Quick Start — `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! conv-lint = "0.1"
//! ```
//!
//! ```rust,ignore
//! // tests/conventions.rs
//! conv_lint::check!();
//! ```
//!
//! This runs conv-lint as part of `cargo test`. Configure via
//! `conv-lint.toml`.
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use conv_lint::Analyzer;
//! use conv_lint::rules::default_rules;
//!
//! let mut builder = Analyzer::builder().root("./src");
//! for rule in default_rules() {
//!     builder = builder.rule_box(rule);
//! }
//! let result = builder.build()?.analyze()?;
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use conv_lint_core::*;

/// Built-in rule evaluators.
pub mod rules {
    pub use conv_lint_rules::*;
}

pub mod dsl;

mod runner;

#[doc(hidden)]
pub mod __internal {
    pub use crate::runner::run_check;
}

/// Generates a `#[test]` that runs conv-lint over the enclosing project.
///
/// Fails the test with a formatted report when violations at or above
/// the configured `fail_on` severity are found.
///
/// ```rust,ignore
/// // tests/conventions.rs
/// conv_lint::check!();
///
/// // or, with explicit settings:
/// conv_lint::check!(config = "conv-lint.toml", fail_on = "warning");
/// ```
#[macro_export]
macro_rules! check {
    () => {
        #[test]
        fn conv_lint_check() {
            $crate::__internal::run_check(None, None);
        }
    };
    (config = $config:literal) => {
        #[test]
        fn conv_lint_check() {
            $crate::__internal::run_check(Some($config), None);
        }
    };
    (fail_on = $fail_on:literal) => {
        #[test]
        fn conv_lint_check() {
            $crate::__internal::run_check(None, Some($fail_on));
        }
    };
    (config = $config:literal, fail_on = $fail_on:literal $(,)?) => {
        #[test]
        fn conv_lint_check() {
            $crate::__internal::run_check(Some($config), Some($fail_on));
        }
    };
}
