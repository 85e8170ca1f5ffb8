//! Data models, all satisfying the declared conventions.

/// A customer record. Scalar fields are exempt from the nullability
/// convention; everything else is `Option`-wrapped.
pub struct Customer {
    /// Stable identifier.
    pub id: u64,
    /// Display name, if the customer provided one.
    pub name: Option<String>,
    /// Contact address, if known.
    pub email: Option<String>,
}

/// An invoice issued to a customer.
pub struct Invoice {
    /// Sequential invoice number.
    pub number: u32,
    /// External reference, if any.
    pub reference: Option<String>,
    /// Whether the invoice has been settled.
    pub paid: bool,
}
