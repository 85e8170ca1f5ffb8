//! Rule requiring type names in scope to match a regular expression.
//!
//! Configured in the checked source as:
//!
//! ```ignore
//! Conventions::for_namespace("crate::forms")
//!     .for_all_classes()
//!     .require_class_name_pattern("^Form.*", "Form types must start with Form");
//! ```
//!
//! Matching uses unanchored search semantics; the pattern author is
//! responsible for anchors.

use conv_lint_core::{
    ConfigChain, ConventionRule, ConventionViolation, EvaluateError, RuleKind, RuleSpec,
    ScopeMatch, TargetKind,
};
use regex::Regex;

/// Rule name for naming-pattern.
pub const NAME: &str = "naming-pattern";

/// Checks simple type names against the chain's regular expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamingPatternRule;

impl NamingPatternRule {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ConventionRule for NamingPatternRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn kind(&self) -> RuleKind {
        RuleKind::NamePattern
    }

    fn target(&self) -> TargetKind {
        TargetKind::Classes
    }

    fn description(&self) -> &'static str {
        "Requires type names in scope to match a regular expression"
    }

    fn evaluate(
        &self,
        chain: &ConfigChain,
        scope: &ScopeMatch<'_>,
    ) -> Result<Vec<ConventionViolation>, EvaluateError> {
        let RuleSpec::NamePattern { pattern, message } = &chain.rule else {
            return Ok(Vec::new());
        };

        let regex = Regex::new(pattern).map_err(|e| EvaluateError::Pattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;

        let mut violations = Vec::new();
        for decl in scope.types() {
            if !regex.is_match(&decl.name) {
                violations.push(ConventionViolation::class(
                    &decl.name,
                    format!("{message}: class {}", decl.name),
                ));
            }
        }

        Ok(violations)
    }
}
