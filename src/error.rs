//! Errors shared by the closed name sets parsed from text.

/// A textual value that names no known variant.
///
/// Returned by the `FromStr` impls of the state enums and of
/// [`ColorId`](crate::color::ColorId).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseStateError {
    /// What was being parsed, e.g. `status` or `color`
    pub kind: &'static str,
    pub value: String,
}

impl ParseStateError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
