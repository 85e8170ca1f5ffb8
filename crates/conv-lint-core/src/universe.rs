//! The declaration universe: every type declaration visible to analysis.
//!
//! Struct declarations are collected per file, keyed by the enclosing
//! module path in its fully-qualified display form (`crate::a::b`).
//! Inline `mod` items extend the file's namespace; declarations inside
//! function bodies are not visible to convention rules.

use std::collections::HashSet;

/// Nullability classification of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullability {
    /// `Option<T>` in any path spelling.
    Nullable,
    /// Primitive scalar (`bool`, `char`, integers, floats); exempt from
    /// nullability rules.
    Value,
    /// Anything else; must be `Option`-wrapped to satisfy
    /// `require_nullable_properties`.
    NonNullable,
}

/// A named field declared directly on a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,
    /// Nullability classification of the field type.
    pub nullability: Nullability,
}

/// A type declaration with its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Simple type name.
    pub name: String,
    /// Fully-qualified enclosing namespace, e.g. `crate::models`.
    pub namespace: String,
    /// Named fields in declaration order. Tuple and unit structs have
    /// none.
    pub fields: Vec<FieldDecl>,
}

/// The full set of type declarations collected from the analyzed program.
///
/// Declarations are kept in discovery order and deduplicated on
/// (namespace, name), so no declaration is ever matched twice.
#[derive(Debug, Default)]
pub struct DeclUniverse {
    types: Vec<TypeDecl>,
    seen: HashSet<(String, String)>,
}

impl DeclUniverse {
    /// Creates an empty universe.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects all struct declarations from a parsed file.
    ///
    /// `namespace` is the file's own module path (e.g. `crate::models`
    /// for `src/models.rs`); inline modules extend it.
    pub fn add_file(&mut self, namespace: &str, ast: &syn::File) {
        self.add_items(namespace, &ast.items);
    }

    /// The collected declarations, in discovery order.
    #[must_use]
    pub fn types(&self) -> &[TypeDecl] {
        &self.types
    }

    /// Number of collected declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the universe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn add_items(&mut self, namespace: &str, items: &[syn::Item]) {
        for item in items {
            match item {
                syn::Item::Struct(decl) => self.add_struct(namespace, decl),
                syn::Item::Mod(module) => {
                    if let Some((_, items)) = &module.content {
                        let nested = format!("{namespace}::{}", module.ident);
                        self.add_items(&nested, items);
                    }
                }
                _ => {}
            }
        }
    }

    fn add_struct(&mut self, namespace: &str, decl: &syn::ItemStruct) {
        let name = decl.ident.to_string();
        if !self
            .seen
            .insert((namespace.to_string(), name.clone()))
        {
            return;
        }

        let fields = match &decl.fields {
            syn::Fields::Named(named) => named
                .named
                .iter()
                .filter_map(|field| {
                    field.ident.as_ref().map(|ident| FieldDecl {
                        name: ident.to_string(),
                        nullability: classify(&field.ty),
                    })
                })
                .collect(),
            syn::Fields::Unnamed(_) | syn::Fields::Unit => Vec::new(),
        };

        self.types.push(TypeDecl {
            name,
            namespace: namespace.to_string(),
            fields,
        });
    }
}

const SCALAR_TYPES: &[&str] = &[
    "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32",
    "u64", "u128", "usize",
];

/// Classifies a field type for nullability checking.
///
/// Only the outermost type constructor is inspected: `Option` by any
/// path spelling is nullable, primitive scalars are value types, and
/// everything else (including references, tuples, and generic
/// containers) counts as non-nullable.
#[must_use]
pub fn classify(ty: &syn::Type) -> Nullability {
    match ty {
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) => {
                let ident = segment.ident.to_string();
                if ident == "Option" {
                    Nullability::Nullable
                } else if SCALAR_TYPES.contains(&ident.as_str()) {
                    Nullability::Value
                } else {
                    Nullability::NonNullable
                }
            }
            None => Nullability::NonNullable,
        },
        syn::Type::Paren(inner) => classify(&inner.elem),
        syn::Type::Group(inner) => classify(&inner.elem),
        _ => Nullability::NonNullable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe_from(namespace: &str, source: &str) -> DeclUniverse {
        let ast = syn::parse_file(source).expect("Failed to parse");
        let mut universe = DeclUniverse::new();
        universe.add_file(namespace, &ast);
        universe
    }

    #[test]
    fn collects_structs_with_fields() {
        let universe = universe_from(
            "crate::models",
            r"
pub struct User {
    pub name: Option<String>,
    pub age: u32,
    pub email: String,
}
",
        );

        assert_eq!(universe.len(), 1);
        let user = &universe.types()[0];
        assert_eq!(user.name, "User");
        assert_eq!(user.namespace, "crate::models");
        assert_eq!(
            user.fields,
            vec![
                FieldDecl {
                    name: "name".to_string(),
                    nullability: Nullability::Nullable,
                },
                FieldDecl {
                    name: "age".to_string(),
                    nullability: Nullability::Value,
                },
                FieldDecl {
                    name: "email".to_string(),
                    nullability: Nullability::NonNullable,
                },
            ]
        );
    }

    #[test]
    fn inline_modules_extend_the_namespace() {
        let universe = universe_from(
            "crate",
            r"
mod app {
    mod models {
        struct Widget;
    }
    struct Panel;
}
",
        );

        let namespaces: Vec<&str> = universe
            .types()
            .iter()
            .map(|t| t.namespace.as_str())
            .collect();
        assert_eq!(namespaces, vec!["crate::app::models", "crate::app"]);
    }

    #[test]
    fn duplicate_declarations_are_collected_once() {
        let ast = syn::parse_file("struct User { name: String }").expect("Failed to parse");
        let mut universe = DeclUniverse::new();
        universe.add_file("crate::models", &ast);
        universe.add_file("crate::models", &ast);

        assert_eq!(universe.len(), 1);
    }

    #[test]
    fn tuple_and_unit_structs_have_no_fields() {
        let universe = universe_from("crate", "struct Pair(u32, u32);\nstruct Marker;");
        assert!(universe.types().iter().all(|t| t.fields.is_empty()));
    }

    #[test]
    fn classify_recognizes_option_spellings() {
        for source in ["Option<String>", "std::option::Option<String>"] {
            let ty: syn::Type = syn::parse_str(source).expect("Failed to parse type");
            assert_eq!(classify(&ty), Nullability::Nullable);
        }
    }

    #[test]
    fn classify_treats_references_as_non_nullable() {
        let ty: syn::Type = syn::parse_str("&'static str").expect("Failed to parse type");
        assert_eq!(classify(&ty), Nullability::NonNullable);
    }

    #[test]
    fn classify_scalars_as_value_types() {
        for source in ["bool", "u64", "f32", "char"] {
            let ty: syn::Type = syn::parse_str(source).expect("Failed to parse type");
            assert_eq!(classify(&ty), Nullability::Value);
        }
    }
}
