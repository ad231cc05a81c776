//! Colour string parsing.
//!
//! [`parse_colour`] dispatches on the shape of the input to one of three
//! branch parsers and normalises the result to an [`Rgb`] triple:
//!
//! - `hsl(…)` / `hsla(…)` — sextant HSL conversion
//! - `rgb(…)` / `rgba(…)` — numeric tokens mapped against 0-255 limits
//! - `#fff` / `#ffffff` — hex digit collection
//!
//! The rgb and hsl branches share a token scanner and percentage rule; the
//! scan is format-agnostic, so the surrounding `rgb(`/`)` framing and
//! separators are never structurally validated.

mod hex;
mod hsl;
mod tokens;

use crate::error::FormatError;
use crate::types::Rgb;

/// Per-channel limits for the rgb branch.
const RGB_LIMITS: [f64; 3] = [255.0, 255.0, 255.0];

/// Converts a colour string to an [`Rgb`] triple.
///
/// Dispatch is first-match-wins: an `hsl` prefix, then an `rgb` substring
/// anywhere in the input, then a `#` prefix. Anything else is rejected with
/// [`FormatError::Unrecognised`]. A branch that fails on its numeric tokens
/// does not fall back to another branch.
pub fn parse_colour(input: &str) -> Result<Rgb, FormatError> {
    if input.starts_with("hsl") {
        log::trace!("parse_colour: hsl branch for {input:?}");
        return hsl::parse(input);
    }
    if input.contains("rgb") {
        log::trace!("parse_colour: rgb branch for {input:?}");
        let [r, g, b] = tokens::apply_limits(&tokens::scan(input), RGB_LIMITS)?;
        return Ok(Rgb::new(r, g, b));
    }
    if input.starts_with('#') {
        log::trace!("parse_colour: hex branch for {input:?}");
        return Ok(hex::parse(input));
    }
    Err(FormatError::Unrecognised(input.to_string()))
}
