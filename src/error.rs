//! Error type for colour parsing.
//!
//! Parsing is all-or-nothing: the first failure is returned to the caller
//! as-is, with no partial result and no fallback colour.

use thiserror::Error;

/// Errors that can occur when converting a colour string to an RGB triple.
///
/// # Examples
///
/// ```rust
/// use colour_contrast::{FormatError, Rgb};
///
/// let result = Rgb::parse("not-a-color");
/// assert!(matches!(result, Err(FormatError::Unrecognised(_))));
/// ```
#[derive(Error, Clone, Debug, PartialEq)]
pub enum FormatError {
    /// The input matches none of the recognised colour shapes.
    ///
    /// Recognised shapes are an `hsl` prefix, an `rgb` substring anywhere,
    /// or a `#` prefix.
    #[error("unrecognised colour format: {0:?}")]
    Unrecognised(String),

    /// A numeric component is not a decimal number with an optional `%` suffix.
    #[error("invalid numeric component: {0:?}")]
    BadNumber(String),
}
