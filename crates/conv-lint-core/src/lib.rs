//! # conv-lint-core
//!
//! Core framework for in-source convention checking based on `syn` AST
//! analysis.
//!
//! Convention rules are declared inside the checked program itself as
//! chained method calls scoped to a namespace. This crate provides:
//!
//! - [`chain::decode`] for recovering a typed [`ConfigChain`] from a
//!   call-chain expression
//! - [`DeclUniverse`] and [`scope::resolve`] for resolving the namespace
//!   scope into concrete type declarations
//! - [`ConventionRule`] trait for pluggable rule evaluators
//! - [`Analyzer`] for orchestrating the whole run
//! - [`Violation`] and [`LintResult`] for reporting findings
//!
//! ## Example
//!
//! ```ignore
//! use conv_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod types;

/// Configuration chain decoding.
pub mod chain;
/// Compile-time constant extraction.
pub mod constant;
/// Diagnostic emission.
pub mod emit;
/// Rule evaluator trait.
pub mod rule;
/// Namespace scope resolution.
pub mod scope;
/// The declaration universe.
pub mod universe;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use chain::{ConfigChain, RuleKind, RuleSpec, ScopeSpec, TargetKind};
pub use config::{AnalyzerConfig, Config, ConfigError};
pub use context::FileContext;
pub use emit::{ConventionViolation, DIAGNOSTIC_CODE, DIAGNOSTIC_RULE};
pub use rule::{ConventionRule, ConventionRuleBox, EvaluateError};
pub use scope::ScopeMatch;
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
pub use universe::{DeclUniverse, FieldDecl, Nullability, TypeDecl};
