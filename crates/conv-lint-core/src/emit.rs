//! Diagnostic emission.
//!
//! Every violation produced by this system shares a single diagnostic
//! identity; rule kind and message differentiate violations only in
//! message text. Diagnostics are reported against the analysis unit (the
//! file containing the configuration chain) as a whole, not against the
//! violating declaration.

use crate::types::{Location, Severity, Violation};
use std::path::Path;

/// The fixed diagnostic code shared by all convention violations.
pub const DIAGNOSTIC_CODE: &str = "CL001";

/// The fixed rule identity shared by all convention violations.
pub const DIAGNOSTIC_RULE: &str = "source-conventions";

/// One concrete rule failure, as produced by a rule evaluator.
///
/// Carries data from the evaluator to the emitter; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionViolation {
    /// Simple name of the offending type.
    pub type_name: String,
    /// Offending property, for member-level rules.
    pub property: Option<String>,
    /// Fully rendered message.
    pub message: String,
}

impl ConventionViolation {
    /// Creates a type-level violation.
    #[must_use]
    pub fn class(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            property: None,
            message: message.into(),
        }
    }

    /// Creates a member-level violation.
    #[must_use]
    pub fn property(
        type_name: impl Into<String>,
        property: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            property: Some(property.into()),
            message: message.into(),
        }
    }
}

/// Converts one rule failure into exactly one host diagnostic.
#[must_use]
pub fn emit(violation: ConventionViolation, unit: &Path) -> Violation {
    Violation::new(
        DIAGNOSTIC_CODE,
        DIAGNOSTIC_RULE,
        Severity::Error,
        Location::whole_file(unit.to_path_buf()),
        violation.message,
    )
}
