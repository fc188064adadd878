use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericField {
    Paid,
    Weight,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::Paid => f.write_str("paid"),
            NumericField::Weight => f.write_str("weight"),
        }
    }
}

/// Precondition violations rejected at the engine boundary.
///
/// The degenerate split (no participants or zero total weight) is not an error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("{field} of '{name}' is not a finite number")]
    NonFinite { name: String, field: NumericField },
    #[error("amount of '{name}' does not fit in the cent range")]
    AmountOutOfRange { name: String },
    #[error("total amount overflows the cent range")]
    TotalOverflow,
}
