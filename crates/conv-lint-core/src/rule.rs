//! The rule evaluator trait.

use crate::chain::{ConfigChain, RuleKind, TargetKind};
use crate::emit::ConventionViolation;
use crate::scope::ScopeMatch;
use thiserror::Error;

/// Errors a rule evaluator can surface.
///
/// Malformed configuration is otherwise skipped silently; an invalid
/// pattern is the one authoring mistake that is surfaced, because it
/// indicates a broken rule rather than an absent one. The analyzer
/// aborts only the offending chain.
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// The rule's regular expression failed to compile.
    #[error("invalid name pattern `{pattern}`: {reason}")]
    Pattern {
        /// The pattern as written in the checked program.
        pattern: String,
        /// The regex engine's message.
        reason: String,
    },
}

/// A convention rule evaluator.
///
/// One implementation exists per [`RuleKind`]. Evaluators are read-only
/// over the declaration universe and must be idempotent: the same chain
/// and scope always produce the same violation set, so overlapping
/// evaluations may run concurrently on the host's worker threads.
///
/// # Example
///
/// ```ignore
/// use conv_lint_core::{ConfigChain, ConventionRule, RuleKind, ScopeMatch, TargetKind};
///
/// pub struct NamingPatternRule;
///
/// impl ConventionRule for NamingPatternRule {
///     fn name(&self) -> &'static str { "naming-pattern" }
///     fn kind(&self) -> RuleKind { RuleKind::NamePattern }
///     fn target(&self) -> TargetKind { TargetKind::Classes }
///
///     fn evaluate(&self, chain: &ConfigChain, scope: &ScopeMatch<'_>)
///         -> Result<Vec<ConventionViolation>, EvaluateError> { ... }
/// }
/// ```
pub trait ConventionRule: Send + Sync {
    /// Returns the kebab-case name of this rule, for logging.
    fn name(&self) -> &'static str;

    /// The decoded rule kind this evaluator handles.
    fn kind(&self) -> RuleKind;

    /// The target kind this evaluator expects. A decoded chain whose
    /// target disagrees is invalid and dropped without evaluation.
    fn target(&self) -> TargetKind;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Evaluates the chain against the resolved scope.
    ///
    /// # Errors
    ///
    /// Returns an error when the rule's parameters are unusable (e.g. an
    /// invalid regular expression); the analyzer then drops this chain
    /// and reports nothing for it.
    fn evaluate(
        &self,
        chain: &ConfigChain,
        scope: &ScopeMatch<'_>,
    ) -> Result<Vec<ConventionViolation>, EvaluateError>;
}

/// Type alias for boxed `ConventionRule` trait objects.
pub type ConventionRuleBox = Box<dyn ConventionRule>;
