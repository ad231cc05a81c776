//! Relative luminance and the WCAG contrast ratio.

use crate::error::FormatError;
use crate::types::Rgb;

/// Channel weights of the sRGB relative luminance transform (ITU-R BT.709).
const LUMINANCE_COEFFICIENTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// WCAG AA minimum contrast for normal text.
pub const AA_THRESHOLD: f64 = 4.5;

/// WCAG AAA minimum contrast for normal text.
pub const AAA_THRESHOLD: f64 = 7.0;

impl Rgb {
    /// Relative luminance of this colour, in `[0.0, 1.0]`.
    ///
    /// Each channel is scaled to `[0, 1]`, linearised, and summed under the
    /// BT.709 weights. The piecewise linearisation corrects for the
    /// nonlinear toe of the sRGB gamma curve near black.
    pub fn relative_luminance(&self) -> f64 {
        self.channels()
            .into_iter()
            .zip(LUMINANCE_COEFFICIENTS)
            .map(|(channel, weight)| weight * srgb_to_linear(channel / 255.0))
            .sum()
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Combines two relative luminances into a contrast ratio.
///
/// Symmetric in its arguments, always at least 1, and exactly 1 when the
/// luminances are equal.
pub fn contrast_ratio_of(lum_a: f64, lum_b: f64) -> f64 {
    let (lighter, darker) = if lum_a >= lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colour strings, in `[1.0, 21.0]`.
///
/// Parses both inputs, computes the relative luminance of each, and
/// combines them. The first parse failure is propagated unmodified.
///
/// # Examples
///
/// ```
/// use colour_contrast::contrast_ratio;
///
/// let ratio = contrast_ratio("#ffffff", "#2660a1").unwrap();
/// assert!(ratio > 4.5);
///
/// assert!(contrast_ratio("#fff", "chartreuse").is_err());
/// ```
pub fn contrast_ratio(colour_a: &str, colour_b: &str) -> Result<f64, FormatError> {
    let lum_a = Rgb::parse(colour_a)?.relative_luminance();
    let lum_b = Rgb::parse(colour_b)?.relative_luminance();
    Ok(contrast_ratio_of(lum_a, lum_b))
}

/// Whether a ratio satisfies WCAG AA for normal text (4.5:1).
pub fn meets_aa(ratio: f64) -> bool {
    ratio >= AA_THRESHOLD
}

/// Whether a ratio satisfies WCAG AAA for normal text (7:1).
pub fn meets_aaa(ratio: f64) -> bool {
    ratio >= AAA_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_luminance_extremes() {
        let black = Rgb::new(0.0, 0.0, 0.0).relative_luminance();
        assert!(black.abs() < EPSILON);

        let white = Rgb::new(255.0, 255.0, 255.0).relative_luminance();
        assert!((white - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_luminance_green_dominates() {
        // BT.709 weights green far above red and blue.
        let green = Rgb::new(0.0, 255.0, 0.0).relative_luminance();
        let red = Rgb::new(255.0, 0.0, 0.0).relative_luminance();
        let blue = Rgb::new(0.0, 0.0, 255.0).relative_luminance();
        assert!(green > red);
        assert!(red > blue);
        assert!((green - 0.7152).abs() < EPSILON);
    }

    #[test]
    fn test_dark_channel_takes_linear_segment() {
        // 8/255 is below the 0.03928 knee.
        let lum = Rgb::new(8.0, 0.0, 0.0).relative_luminance();
        assert!((lum - 0.2126 * (8.0 / 255.0) / 12.92).abs() < EPSILON);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        assert_eq!(contrast_ratio_of(0.2, 0.8), contrast_ratio_of(0.8, 0.2));
    }

    #[test]
    fn test_ratio_of_equal_luminances_is_one() {
        assert_eq!(contrast_ratio_of(0.37, 0.37), 1.0);
    }

    #[test]
    fn test_ratio_extremes() {
        // Black on white is the maximum possible contrast.
        let ratio = contrast_ratio_of(1.0, 0.0);
        assert!((ratio - 21.0).abs() < EPSILON);
    }

    #[test]
    fn test_thresholds() {
        assert!(meets_aa(4.5));
        assert!(!meets_aa(4.4));
        assert!(meets_aaa(7.0));
        assert!(!meets_aaa(6.9));
    }
}
