//! # conv-lint-rules
//!
//! Built-in rule evaluators for conv-lint.
//!
//! Unlike a conventional linter, rules here carry no configuration of
//! their own: every parameter (scope, pattern, message) arrives in the
//! decoded configuration chain from the checked source. One evaluator
//! exists per chain rule kind.
//!
//! | Terminal call | Evaluator |
//! |---------------|-----------|
//! | `require_class_name_pattern(pattern, message?)` | [`NamingPatternRule`] |
//! | `require_nullable_properties(message?)` | [`NullablePropertyRule`] |
//!
//! ## Usage
//!
//! ```ignore
//! use conv_lint_core::Analyzer;
//! use conv_lint_rules::default_rules;
//!
//! let mut builder = Analyzer::builder().root("./src");
//! for rule in default_rules() {
//!     builder = builder.rule_box(rule);
//! }
//! let result = builder.build()?.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod naming_pattern;
mod nullable_property;

pub use naming_pattern::NamingPatternRule;
pub use nullable_property::NullablePropertyRule;

/// Re-export core types for convenience.
pub use conv_lint_core::{ConventionRule, ConventionRuleBox, Severity, Violation};

/// Returns one evaluator per supported rule kind.
#[must_use]
pub fn default_rules() -> Vec<ConventionRuleBox> {
    vec![
        Box::new(NamingPatternRule::new()),
        Box::new(NullablePropertyRule::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use conv_lint_core::RuleKind;

    #[test]
    fn default_rules_cover_every_rule_kind() {
        let kinds: Vec<RuleKind> = default_rules().iter().map(|r| r.kind()).collect();
        assert!(kinds.contains(&RuleKind::NamePattern));
        assert!(kinds.contains(&RuleKind::NullableRequired));
    }
}
