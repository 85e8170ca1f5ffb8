//! Rule requiring properties in scope to carry a nullable annotation.
//!
//! Configured in the checked source as:
//!
//! ```ignore
//! Conventions::for_all_sub_namespaces_of("crate::models")
//!     .for_all_properties()
//!     .require_nullable_properties("Model fields must be optional");
//! ```
//!
//! A named field violates when its type is neither `Option<T>` nor a
//! primitive scalar. Only fields declared directly on the type are
//! checked.

use conv_lint_core::{
    ConfigChain, ConventionRule, ConventionViolation, EvaluateError, Nullability, RuleKind,
    RuleSpec, ScopeMatch, TargetKind,
};

/// Rule name for nullable-property.
pub const NAME: &str = "nullable-property";

/// Checks that every named field in scope is `Option`-wrapped or scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullablePropertyRule;

impl NullablePropertyRule {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ConventionRule for NullablePropertyRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn kind(&self) -> RuleKind {
        RuleKind::NullableRequired
    }

    fn target(&self) -> TargetKind {
        TargetKind::Properties
    }

    fn description(&self) -> &'static str {
        "Requires properties in scope to be Option-typed"
    }

    fn evaluate(
        &self,
        chain: &ConfigChain,
        scope: &ScopeMatch<'_>,
    ) -> Result<Vec<ConventionViolation>, EvaluateError> {
        let RuleSpec::NullableRequired { message } = &chain.rule else {
            return Ok(Vec::new());
        };

        let mut violations = Vec::new();
        for decl in scope.types() {
            for field in &decl.fields {
                if field.nullability == Nullability::NonNullable {
                    violations.push(ConventionViolation::property(
                        &decl.name,
                        &field.name,
                        format!(
                            "{message}: property {} in class {}.",
                            field.name, decl.name
                        ),
                    ));
                }
            }
        }

        Ok(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conv_lint_core::{scope, DeclUniverse, ScopeSpec};

    fn universe(source: &str) -> DeclUniverse {
        let ast = syn::parse_file(source).expect("Failed to parse");
        let mut universe = DeclUniverse::new();
        universe.add_file("crate", &ast);
        universe
    }

    fn chain(namespace: &str, transitive: bool, message: &str) -> ConfigChain {
        ConfigChain {
            scope: ScopeSpec {
                namespace: namespace.to_string(),
                transitive,
            },
            target: TargetKind::Properties,
            rule: RuleSpec::NullableRequired {
                message: message.to_string(),
            },
        }
    }

    fn evaluate(universe: &DeclUniverse, chain: &ConfigChain) -> Vec<ConventionViolation> {
        let matched = scope::resolve(universe, &chain.scope);
        NullablePropertyRule::new()
            .evaluate(chain, &matched)
            .expect("evaluation should succeed")
    }

    #[test]
    fn reports_non_nullable_field_in_sub_namespace() {
        let universe = universe(
            r"
mod app {
    mod sub {
        struct Widget {
            name: String,
        }
    }
}
",
        );
        let chain = chain("crate::app", true, "Property must be nullable");

        let violations = evaluate(&universe, &chain);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Property must be nullable: property name in class Widget."
        );
        assert_eq!(violations[0].property.as_deref(), Some("name"));
    }

    #[test]
    fn option_and_scalar_fields_never_violate() {
        let universe = universe(
            r"
mod models {
    struct Account {
        id: u64,
        active: bool,
        nickname: Option<String>,
    }
}
",
        );
        let chain = chain("crate::models", false, "Property must be nullable");

        assert!(evaluate(&universe, &chain).is_empty());
    }

    #[test]
    fn reports_fields_in_declaration_order() {
        let universe = universe(
            r"
mod models {
    struct Order {
        customer: String,
        address: Address,
        total: Option<u64>,
        note: String,
    }
}
",
        );
        let chain = chain("crate::models", false, "msg");

        let violations = evaluate(&universe, &chain);
        let fields: Vec<&str> = violations
            .iter()
            .map(|v| v.property.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(fields, vec!["customer", "address", "note"]);
    }

    #[test]
    fn exact_scope_ignores_sub_namespaces() {
        let universe = universe(
            r"
mod app {
    mod sub {
        struct Widget {
            name: String,
        }
    }
}
",
        );
        let chain = chain("crate::app", false, "msg");

        assert!(evaluate(&universe, &chain).is_empty());
    }

    #[test]
    fn mismatched_rule_spec_produces_nothing() {
        let universe = universe("mod app { struct W { f: String } }");
        let mismatched = ConfigChain {
            scope: ScopeSpec {
                namespace: "crate::app".to_string(),
                transitive: false,
            },
            target: TargetKind::Properties,
            rule: RuleSpec::NamePattern {
                pattern: "^W".to_string(),
                message: "irrelevant".to_string(),
            },
        };
        let matched = scope::resolve(&universe, &mismatched.scope);

        let violations = NullablePropertyRule::new()
            .evaluate(&mismatched, &matched)
            .expect("evaluation should succeed");
        assert!(violations.is_empty());
    }
}
