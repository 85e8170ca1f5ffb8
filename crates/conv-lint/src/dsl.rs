//! Compile-time anchors for the embedded configuration chain.
//!
//! These types exist so that checked programs can write convention
//! chains that compile; they carry no runtime behavior. The analyzer
//! never executes a chain, it only pattern-matches the call syntax.
//!
//! ```
//! use conv_lint::dsl::Conventions;
//!
//! Conventions::for_namespace("crate::models")
//!     .for_all_properties()
//!     .require_nullable_properties("Model fields must be optional");
//! ```

// Inert call anchors; receivers and arguments exist only for chaining.
#![allow(clippy::unused_self)]

/// Entry point for declaring a convention chain.
#[derive(Debug, Clone, Copy)]
pub struct Conventions;

impl Conventions {
    /// Scopes the rule to exactly `namespace`.
    #[must_use]
    pub fn for_namespace(_namespace: &str) -> NamespaceScope {
        NamespaceScope
    }

    /// Scopes the rule to `namespace` and all of its descendants.
    #[must_use]
    pub fn for_all_sub_namespaces_of(_namespace: &str) -> NamespaceScope {
        NamespaceScope
    }
}

/// A chain with its namespace scope declared.
#[derive(Debug, Clone, Copy)]
pub struct NamespaceScope;

impl NamespaceScope {
    /// Targets every type declaration in scope.
    #[must_use]
    pub fn for_all_classes(self) -> ClassTarget {
        ClassTarget
    }

    /// Targets every property declared on types in scope.
    #[must_use]
    pub fn for_all_properties(self) -> PropertyTarget {
        PropertyTarget
    }
}

/// A chain targeting type declarations.
#[derive(Debug, Clone, Copy)]
pub struct ClassTarget;

impl ClassTarget {
    /// Requires type names to match `pattern`, reporting violations with
    /// `message`.
    pub fn require_class_name_pattern(self, _pattern: &str, _message: &str) -> Self {
        self
    }
}

/// A chain targeting properties.
#[derive(Debug, Clone, Copy)]
pub struct PropertyTarget;

impl PropertyTarget {
    /// Requires properties to be `Option`-typed, reporting violations
    /// with `message`.
    pub fn require_nullable_properties(self, _message: &str) -> Self {
        self
    }
}
