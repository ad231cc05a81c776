//! `hsl()` / `hsla()` colours and the sextant HSL→RGB conversion.

use super::tokens;
use crate::error::FormatError;
use crate::types::Rgb;

/// Per-position limits: hue in degrees, saturation/lightness as fractions.
const HSL_LIMITS: [f64; 3] = [360.0, 1.0, 1.0];

pub(super) fn parse(input: &str) -> Result<Rgb, FormatError> {
    let [h, s, l] = tokens::apply_limits(&tokens::scan(input), HSL_LIMITS)?;
    Ok(hsl_to_rgb(h, s, l))
}

/// Converts HSL (hue in degrees, saturation and lightness in `[0, 1]`) to
/// an RGB triple with fractional channels.
///
/// The hue is not wrapped modulo 360 before the band tests: a hue of 360 or
/// more fails every test and lands in the final `[300, 360)` formula. This
/// mirrors the behaviour of the reference implementation.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let (max, min) = if l < 0.5 {
        (255.0 * (l + s * l), 255.0 * (l - s * l))
    } else {
        (255.0 * (l + s * (1.0 - l)), 255.0 * (l - s * (1.0 - l)))
    };
    let span = max - min;

    if h < 60.0 {
        Rgb::new(max, h / 60.0 * span + min, min)
    } else if h < 120.0 {
        Rgb::new((120.0 - h) / 60.0 * span + min, max, min)
    } else if h < 180.0 {
        Rgb::new(min, max, (h - 120.0) / 60.0 * span + min)
    } else if h < 240.0 {
        Rgb::new(min, (240.0 - h) / 60.0 * span + min, max)
    } else if h < 300.0 {
        Rgb::new((h - 240.0) / 60.0 * span + min, min, max)
    } else {
        Rgb::new(max, min, (360.0 - h) / 60.0 * span + min)
    }
}
