//! RGB triple type.
//!
//! [`Rgb`] is the normalised form every supported colour notation is parsed
//! into before the luminance transform. Channels are `f64` because values
//! derived from `hsl()` input are fractional and are deliberately not
//! rounded; rounding before linearisation would shift the computed contrast.

use crate::error::FormatError;
use crate::parser;

/// An RGB colour with each channel conceptually in `[0, 255]`.
///
/// Alpha components present in the source notation (`rgba()`, `hsla()`,
/// 8-digit hex) are parsed over and discarded.
///
/// # Examples
///
/// ```
/// use colour_contrast::Rgb;
///
/// let white = Rgb::parse("#fff").unwrap();
/// assert_eq!(white, Rgb::new(255.0, 255.0, 255.0));
///
/// let same = Rgb::parse("rgb(100%, 100%, 100%)").unwrap();
/// assert_eq!(white, same);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: f64,
    /// Green channel (0-255).
    pub g: f64,
    /// Blue channel (0-255).
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses a colour string in any of the supported notations.
    ///
    /// Supported formats:
    /// - Hex: `#RGB`, `#RRGGBB` (longer forms accepted, extra digits ignored)
    /// - RGB: `rgb(r, g, b)`, `rgba(r, g, b, a)`, channels as 0-255 or `N%`
    /// - HSL: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        parser::parse_colour(input)
    }

    /// Channel values in (red, green, blue) order.
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}
