//! Abbreviated view-count parsing ("1.2M views" → 1_200_000).

use once_cell::sync::Lazy;
use regex::Regex;

/// Digits with optional `,` / `.`, an optional K/M/B suffix, then "view" or "views".
///
/// Case folding is ASCII-only: with Unicode folding the Kelvin sign would
/// match `K` and the long s would match `s`.
static VIEWS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9,.]+(?i-u:[KMB])?)\s*(?i-u:views?)$").expect("view-count pattern is valid")
});

/// Parse a human-readable view count into an exact integer.
///
/// Text that does not look like a view count ("Streamed live", "No views yet",
/// empty metadata) yields 0; this never fails.
///
/// With a magnitude suffix the numeric part is read as a decimal prefix and
/// scaled, truncating toward zero. Without a suffix it is read as an integer
/// prefix, which stops at the decimal point: `"12.5 views"` is 12.
pub fn parse_view_count(text: &str) -> u64 {
    let Some(captures) = VIEWS_PATTERN.captures(text.trim()) else {
        return 0;
    };

    let number = captures[1].to_ascii_uppercase().replace(',', "");
    let (numeric, exponent) = match number.as_bytes().last() {
        Some(b'K') => (&number[..number.len() - 1], 3),
        Some(b'M') => (&number[..number.len() - 1], 6),
        Some(b'B') => (&number[..number.len() - 1], 9),
        _ => return parse_integer_prefix(&number).unwrap_or(0),
    };

    scale_decimal_prefix(numeric, exponent).unwrap_or(0)
}

/// Leading ASCII digits as an integer, saturating at `u64::MAX`.
fn parse_integer_prefix(s: &str) -> Option<u64> {
    let digits: Vec<u64> = s
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| u64::from(b - b'0'))
        .collect();

    if digits.is_empty() {
        return None;
    }

    Some(
        digits
            .into_iter()
            .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(d)),
    )
}

/// Read the longest `digits[.digits]` prefix and multiply it by `10^exponent`.
///
/// The fractional part is shifted digit by digit, so the result is exact
/// rather than subject to binary floating-point error.
fn scale_decimal_prefix(s: &str, exponent: u32) -> Option<u64> {
    let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, rest) = s.split_at(int_len);

    let frac_part = rest
        .strip_prefix('.')
        .map(|f| {
            let len = f.bytes().take_while(u8::is_ascii_digit).count();
            &f[..len]
        })
        .unwrap_or("");

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let scale = 10u64.pow(exponent);
    let whole = parse_integer_prefix(int_part)
        .unwrap_or(0)
        .saturating_mul(scale);

    let fraction = frac_part
        .bytes()
        .map(|b| u64::from(b - b'0'))
        .chain(std::iter::repeat(0))
        .take(exponent as usize)
        .fold(0u64, |acc, d| acc * 10 + d);

    Some(whole.saturating_add(fraction))
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
