//! Hex colour codes (`#fff`, `#ffffff`, longer forms with alpha).

use crate::types::Rgb;

/// Parses a hex colour code into an [`Rgb`] triple.
///
/// Every ASCII hex digit in the string is collected, case-insensitive, and
/// non-hex characters are skipped. Fewer than 6 digits selects the
/// shorthand form: each of the first 3 digits is doubled into a byte
/// (`f` → `0xff`) and an absent digit reads as `f`. With 6 or more digits,
/// consecutive 2-digit groups form the channels and groups past the third
/// (an alpha pair) are ignored.
///
/// This branch is total: once dispatched here, any string produces a triple.
pub(super) fn parse(input: &str) -> Rgb {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(16)).collect();

    let mut channels = [0.0; 3];
    if digits.len() < 6 {
        for (index, channel) in channels.iter_mut().enumerate() {
            let digit = digits.get(index).copied().unwrap_or(0xf);
            *channel = f64::from(digit * 16 + digit);
        }
    } else {
        for (index, channel) in channels.iter_mut().enumerate() {
            let hi = digits.get(index * 2).copied().unwrap_or(0xf);
            let lo = digits.get(index * 2 + 1).copied().unwrap_or(0xf);
            *channel = f64::from(hi * 16 + lo);
        }
    }

    let [r, g, b] = channels;
    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digit() {
        assert_eq!(parse("#ff0000"), Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(parse("#2660a1"), Rgb::new(38.0, 96.0, 161.0));
    }

    #[test]
    fn test_shorthand_doubles_each_digit() {
        assert_eq!(parse("#abc"), parse("#aabbcc"));
        assert_eq!(parse("#f00"), Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn test_shorthand_missing_digits_read_as_f() {
        assert_eq!(parse("#"), Rgb::new(255.0, 255.0, 255.0));
        assert_eq!(parse("#a"), Rgb::new(170.0, 255.0, 255.0));
        assert_eq!(parse("#ab"), Rgb::new(170.0, 187.0, 255.0));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse("#AABBCC"), parse("#aabbcc"));
        assert_eq!(parse("#AaBbCc"), parse("#aabbcc"));
    }

    #[test]
    fn test_alpha_digits_ignored() {
        assert_eq!(parse("#ff000080"), parse("#ff0000"));
        assert_eq!(parse("#abcd"), parse("#abc"));
    }

    #[test]
    fn test_non_hex_characters_skipped() {
        assert_eq!(parse("#gg-ff0000"), parse("#ff0000"));
    }
}
