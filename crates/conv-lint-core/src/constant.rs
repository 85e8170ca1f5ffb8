//! Compile-time string constant extraction from call arguments.

use syn::{Expr, ExprLit, Lit};

/// Returns the string value of an argument expression when it is a
/// compile-time string literal.
///
/// Parentheses and invisible groups are unwrapped; anything else
/// (identifiers, calls, concatenations, non-string literals) yields
/// `None`. No coercion is performed.
#[must_use]
pub fn str_constant(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Some(lit.value()),
        Expr::Paren(inner) => str_constant(&inner.expr),
        Expr::Group(inner) => str_constant(&inner.expr),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Expr {
        syn::parse_str(source).expect("Failed to parse expression")
    }

    #[test]
    fn extracts_string_literal() {
        assert_eq!(
            str_constant(&parse(r#""app::models""#)),
            Some("app::models".to_string())
        );
    }

    #[test]
    fn unwraps_parentheses() {
        assert_eq!(
            str_constant(&parse(r#"(("^Form.*"))"#)),
            Some("^Form.*".to_string())
        );
    }

    #[test]
    fn rejects_identifier() {
        assert_eq!(str_constant(&parse("namespace_name")), None);
    }

    #[test]
    fn rejects_non_string_literal() {
        assert_eq!(str_constant(&parse("42")), None);
    }

    #[test]
    fn rejects_computed_expression() {
        assert_eq!(str_constant(&parse(r#"format!("{}", ns)"#)), None);
    }
}
