use super::*;

#[test]
fn test_parse_table() {
    let cases = [
        ("1,234 views", 1_234),
        ("1.2K views", 1_200),
        ("3M views", 3_000_000),
        ("2.5B views", 2_500_000_000),
        ("12.5", 0),
        ("", 0),
        ("No views yet", 0),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_view_count(input), expected, "input: {:?}", input);
    }
}

#[test]
fn test_parse_singular_view() {
    assert_eq!(parse_view_count("1 view"), 1);
}

#[test]
fn test_parse_case_insensitive() {
    assert_eq!(parse_view_count("1.5m VIEWS"), 1_500_000);
    assert_eq!(parse_view_count("7k Views"), 7_000);
    assert_eq!(parse_view_count("3b view"), 3_000_000_000);
}

#[test]
fn test_parse_without_space_before_views() {
    assert_eq!(parse_view_count("42views"), 42);
    assert_eq!(parse_view_count("4.2Kviews"), 4_200);
}

#[test]
fn test_parse_surrounding_whitespace_trimmed() {
    assert_eq!(parse_view_count("  \n 10,000 views \t"), 10_000);
}

#[test]
fn test_no_suffix_decimal_truncates_at_point() {
    assert_eq!(parse_view_count("12.5 views"), 12);
    assert_eq!(parse_view_count("999.999 views"), 999);
}

#[test]
fn test_suffix_fraction_truncates() {
    assert_eq!(parse_view_count("1.2345K views"), 1_234);
    assert_eq!(parse_view_count("1.9999999999M views"), 1_999_999);
}

#[test]
fn test_suffix_fraction_is_exact() {
    // 1.15 * 1000 and 4.35 * 1e6 are inexact in binary floating point.
    assert_eq!(parse_view_count("1.15K views"), 1_150);
    assert_eq!(parse_view_count("4.35M views"), 4_350_000);
}

#[test]
fn test_suffix_with_separators() {
    assert_eq!(parse_view_count("1,234.5K views"), 1_234_500);
}

#[test]
fn test_leading_point_with_suffix() {
    assert_eq!(parse_view_count(".5K views"), 500);
}

#[test]
fn test_trailing_point_with_suffix() {
    assert_eq!(parse_view_count("5.K views"), 5_000);
}

#[test]
fn test_second_point_stops_decimal_prefix() {
    assert_eq!(parse_view_count("1.2.3K views"), 1_200);
}

#[test]
fn test_unparseable_numeric_part_is_zero() {
    assert_eq!(parse_view_count("..K views"), 0);
    assert_eq!(parse_view_count(".5 views"), 0);
    assert_eq!(parse_view_count(", views"), 0);
}

#[test]
fn test_non_matching_text_is_zero() {
    assert_eq!(parse_view_count("Streamed 2 days ago"), 0);
    assert_eq!(parse_view_count("Streamed live"), 0);
    assert_eq!(parse_view_count("views"), 0);
    assert_eq!(parse_view_count("1.2KK views"), 0);
    assert_eq!(parse_view_count("about 5 views"), 0);
    assert_eq!(parse_view_count("5 views ago"), 0);
    assert_eq!(parse_view_count("-5 views"), 0);
}

#[test]
fn test_non_ascii_digits_rejected() {
    assert_eq!(parse_view_count("١٢ views"), 0);
}

#[test]
fn test_huge_counts_saturate() {
    assert_eq!(parse_view_count("99999999999999999999999 views"), u64::MAX);
    assert_eq!(parse_view_count("99999999999999999999B views"), u64::MAX);
}

#[test]
fn test_parse_integer_prefix() {
    assert_eq!(parse_integer_prefix("123abc"), Some(123));
    assert_eq!(parse_integer_prefix("007"), Some(7));
    assert_eq!(parse_integer_prefix(".5"), None);
    assert_eq!(parse_integer_prefix(""), None);
}

#[test]
fn test_scale_decimal_prefix() {
    assert_eq!(scale_decimal_prefix("1.2", 3), Some(1_200));
    assert_eq!(scale_decimal_prefix("0.0001", 3), Some(0));
    assert_eq!(scale_decimal_prefix(".", 6), None);
    assert_eq!(scale_decimal_prefix("", 9), None);
}

#[test]
fn test_case_folding_is_ascii_only() {
    // U+212A KELVIN SIGN and U+017F LATIN SMALL LETTER LONG S fold to K and s under Unicode rules.
    assert_eq!(parse_view_count("1.2\u{212A} views"), 0);
    assert_eq!(parse_view_count("5 view\u{17F}"), 0);
    assert_eq!(parse_view_count("1.2k VIEWS"), 1_200);
}
