//! Namespace scope resolution over the declaration universe.

use crate::chain::ScopeSpec;
use crate::universe::{DeclUniverse, TypeDecl};

/// The set of declarations a scope covers, in universe discovery order.
#[derive(Debug)]
pub struct ScopeMatch<'u> {
    types: Vec<&'u TypeDecl>,
}

impl<'u> ScopeMatch<'u> {
    /// The matched declarations.
    #[must_use]
    pub fn types(&self) -> &[&'u TypeDecl] {
        &self.types
    }

    /// Number of matched declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the scope matched nothing. An empty match is a normal
    /// outcome, not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Resolves a scope against the declaration universe.
///
/// A declaration matches when its namespace equals `scope.namespace`
/// exactly, or, for transitive scopes, when it is a `::`-descendant.
/// Comparison is case-sensitive with no separator normalization.
#[must_use]
pub fn resolve<'u>(universe: &'u DeclUniverse, scope: &ScopeSpec) -> ScopeMatch<'u> {
    let prefix = format!("{}::", scope.namespace);
    let types = universe
        .types()
        .iter()
        .filter(|decl| {
            decl.namespace == scope.namespace
                || (scope.transitive && decl.namespace.starts_with(&prefix))
        })
        .collect();

    ScopeMatch { types }
}
