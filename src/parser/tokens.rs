//! Numeric token scanning and the percentage rule shared by the rgb and hsl
//! branches.

use nom::IResult;
use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::combinator::{map_res, opt};
use nom::sequence::pair;

use crate::error::FormatError;

/// Default for an absent component: 100% of the position's limit.
const MISSING_TOKEN: &str = "100%";

fn is_token_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '%'
}

/// Collects every maximal run of `[0-9.%]` characters in the input.
///
/// The scan looks at the whole string, so a number embedded in arbitrary
/// surrounding text is picked up like any other component.
pub(super) fn scan(input: &str) -> Vec<&str> {
    input
        .split(|c| !is_token_char(c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse a decimal number followed by an optional `%`.
fn number_with_unit(input: &str) -> IResult<&str, (f64, Option<char>)> {
    pair(
        map_res(
            take_while1(|c: char| c.is_ascii_digit() || c == '.'),
            str::parse::<f64>,
        ),
        opt(char('%')),
    )(input)
}

/// Maps raw tokens against per-position limits.
///
/// An absent token defaults to `"100%"`. Each token must then parse, in
/// full, as a decimal number with an optional `%` suffix. With `%` the value
/// is `limit * number / 100`; without, the number is taken verbatim and the
/// limit is ignored — a unitless rgb channel is absolute 0-255, a unitless
/// hue is absolute degrees, unitless saturation/lightness are absolute 0-1
/// fractions. Tokens beyond the limits (an alpha component) are never read.
pub(super) fn apply_limits<const N: usize>(
    raw: &[&str],
    limits: [f64; N],
) -> Result<[f64; N], FormatError> {
    let mut values = [0.0; N];
    for (index, limit) in limits.into_iter().enumerate() {
        let token = raw.get(index).copied().unwrap_or(MISSING_TOKEN);
        let (rest, (number, percent)) =
            number_with_unit(token).map_err(|_| FormatError::BadNumber(token.to_string()))?;
        if !rest.is_empty() {
            return Err(FormatError::BadNumber(token.to_string()));
        }
        values[index] = match percent {
            Some(_) => limit * number / 100.0,
            None => number,
        };
    }
    Ok(values)
}
