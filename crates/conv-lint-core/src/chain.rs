//! Decoding of embedded configuration chains.
//!
//! A convention rule is declared inside the checked program as a chain of
//! nested method calls:
//!
//! ```ignore
//! Conventions::for_namespace("crate::models")
//!     .for_all_classes()
//!     .require_class_name_pattern("^[A-Z]", "Model types are PascalCase");
//! ```
//!
//! [`decode`] walks the receiver nesting upward from the terminal rule
//! invocation and recovers a typed [`ConfigChain`]. Method names are only
//! ever matched here, at the syntax boundary; everything downstream works
//! on the decoded variants.

use crate::constant::str_constant;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Expr, ExprMethodCall};

/// Default message for `require_class_name_pattern` when the message
/// argument is missing or not a string literal.
pub const DEFAULT_NAME_PATTERN_MESSAGE: &str = "Class name does not match regex";

/// Default message for `require_nullable_properties` when the message
/// argument is missing or not a string literal.
pub const DEFAULT_NULLABLE_MESSAGE: &str = "Property must be nullable";

/// The declaration kind a chain targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Type-level checks (`for_all_classes()`).
    Classes,
    /// Member-level checks (`for_all_properties()`).
    Properties,
}

/// The validation a chain requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Simple type names must match a regular expression.
    NamePattern,
    /// Properties must carry a nullable annotation (`Option<T>`).
    NullableRequired,
}

/// The namespace scope a chain applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeSpec {
    /// Fully-qualified module path, e.g. `crate::models`.
    pub namespace: String,
    /// Whether descendant namespaces are included.
    pub transitive: bool,
}

/// Rule parameters, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSpec {
    /// `require_class_name_pattern(pattern, message?)`
    NamePattern {
        /// Regular expression the simple type name must match.
        pattern: String,
        /// Message prefix for violations.
        message: String,
    },
    /// `require_nullable_properties(message?)`
    NullableRequired {
        /// Message prefix for violations.
        message: String,
    },
}

impl RuleSpec {
    /// The rule kind this spec parameterizes.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::NamePattern { .. } => RuleKind::NamePattern,
            Self::NullableRequired { .. } => RuleKind::NullableRequired,
        }
    }
}

/// A fully decoded configuration chain.
///
/// Built fresh per analyzed call-chain node, immutable once built, and
/// discarded after evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChain {
    /// The namespace scope the rule applies to.
    pub scope: ScopeSpec,
    /// The declaration kind the rule targets.
    pub target: TargetKind,
    /// The rule and its parameters.
    pub rule: RuleSpec,
}

/// A call shape the decoder can inspect: method call or path call.
struct Invocation<'a> {
    name: String,
    args: &'a Punctuated<Expr, Comma>,
    receiver: Option<&'a Expr>,
}

fn as_invocation(expr: &Expr) -> Option<Invocation<'_>> {
    match expr {
        Expr::MethodCall(call) => Some(Invocation {
            name: call.method.to_string(),
            args: &call.args,
            receiver: Some(&call.receiver),
        }),
        Expr::Call(call) => match call.func.as_ref() {
            Expr::Path(path) => path.path.segments.last().map(|segment| Invocation {
                name: segment.ident.to_string(),
                args: &call.args,
                receiver: None,
            }),
            _ => None,
        },
        Expr::Paren(inner) => as_invocation(&inner.expr),
        Expr::Group(inner) => as_invocation(&inner.expr),
        _ => None,
    }
}

/// Decodes a terminal rule invocation into a [`ConfigChain`].
///
/// Returns `None` for any call that is not a recognized chain: wrong
/// method name, wrong nesting, wrong arity, or a non-literal namespace or
/// pattern argument. That outcome is normal and silent; a checked program
/// full of unrelated method calls decodes to nothing.
#[must_use]
pub fn decode(terminal: &ExprMethodCall) -> Option<ConfigChain> {
    let kind = match terminal.method.to_string().as_str() {
        "require_class_name_pattern" => RuleKind::NamePattern,
        "require_nullable_properties" => RuleKind::NullableRequired,
        _ => return None,
    };

    let target_call = as_invocation(&terminal.receiver)?;
    let target = match target_call.name.as_str() {
        "for_all_classes" => TargetKind::Classes,
        "for_all_properties" => TargetKind::Properties,
        _ => return None,
    };
    if !target_call.args.is_empty() {
        return None;
    }

    let scope_call = as_invocation(target_call.receiver?)?;
    let transitive = match scope_call.name.as_str() {
        "for_namespace" => false,
        "for_all_sub_namespaces_of" => true,
        _ => return None,
    };
    let namespace = str_constant(scope_call.args.first()?)?;

    let rule = match kind {
        RuleKind::NamePattern => RuleSpec::NamePattern {
            // The pattern is required; a missing or computed pattern
            // aborts the whole chain.
            pattern: str_constant(terminal.args.first()?)?,
            message: terminal
                .args
                .iter()
                .nth(1)
                .and_then(str_constant)
                .unwrap_or_else(|| DEFAULT_NAME_PATTERN_MESSAGE.to_string()),
        },
        RuleKind::NullableRequired => RuleSpec::NullableRequired {
            message: terminal
                .args
                .first()
                .and_then(str_constant)
                .unwrap_or_else(|| DEFAULT_NULLABLE_MESSAGE.to_string()),
        },
    };

    Some(ConfigChain {
        scope: ScopeSpec {
            namespace,
            transitive,
        },
        target,
        rule,
    })
}
