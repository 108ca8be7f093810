// Tests for printf/scanf emulation

use clecture::format::printf::render;
use clecture::format::scanf::{scan, ScanStatus};
use clecture::format::{
    format_value, parse_float_prefix, parse_int_prefix, FormatSpec, RawValue,
};
use proptest::prelude::*;

#[test]
fn test_float_right_justified() {
    let spec = FormatSpec::float().with_width(8).with_precision(2);
    let out = format_value(&RawValue::Float(3.14159), &spec);

    assert_eq!(out.text, "    3.14");
    assert_eq!(out.directive, "%8.2f");
}

#[test]
fn test_float_left_justified() {
    let spec = FormatSpec::float().with_width(8).with_precision(2).left(true);
    let out = format_value(&RawValue::Float(3.14159), &spec);

    assert_eq!(out.text, "3.14    ");
    assert_eq!(out.directive, "%-8.2f");
}

#[test]
fn test_float_default_precision_is_two() {
    let out = format_value(&RawValue::Float(2.0), &FormatSpec::float());
    assert_eq!(out.text, "2.00");
    assert_eq!(out.directive, "%.2f");
}

#[test]
fn test_integer_ignores_precision() {
    let spec = FormatSpec::integer().with_width(5).with_precision(3);
    let out = format_value(&RawValue::Int(42), &spec);

    assert_eq!(out.text, "   42");
    // Precision is not part of an integer directive
    assert_eq!(out.directive, "%5d");
}

#[test]
fn test_integer_from_float_truncates() {
    let out = format_value(&RawValue::Float(-7.9), &FormatSpec::integer());
    assert_eq!(out.text, "-7");
}

#[test]
fn test_string_precision_truncates() {
    let spec = FormatSpec::string().with_width(8).with_precision(5);
    let out = format_value(&RawValue::from("Hello, World"), &spec);
    assert_eq!(out.text, "   Hello");
    assert_eq!(out.directive, "%8.5s");
}

#[test]
fn test_string_zero_precision_keeps_everything() {
    let spec = FormatSpec::string().with_precision(0);
    let out = format_value(&RawValue::from("Hello"), &spec);
    assert_eq!(out.text, "Hello");
}

#[test]
fn test_width_never_truncates() {
    let spec = FormatSpec::integer().with_width(4);
    let out = format_value(&RawValue::Int(123_456_789), &spec);
    assert_eq!(out.text, "123456789");
}

#[test]
fn test_malformed_input_is_zero() {
    let float = format_value(&RawValue::from("abc"), &FormatSpec::float());
    assert_eq!(float.text, "0.00");

    let int = format_value(&RawValue::from("xyz"), &FormatSpec::integer());
    assert_eq!(int.text, "0");

    let empty = format_value(&RawValue::from(""), &FormatSpec::float().with_width(6));
    assert_eq!(empty.text, "  0.00");
}

#[test]
fn test_numeric_prefix_parsing() {
    assert_eq!(parse_int_prefix("12abc"), 12);
    assert_eq!(parse_int_prefix("  -42"), -42);
    assert_eq!(parse_int_prefix("+7"), 7);
    assert_eq!(parse_int_prefix("-"), 0);
    assert_eq!(parse_int_prefix("99999999999999999999999"), i64::MAX);

    assert_eq!(parse_float_prefix("3.5kg"), 3.5);
    assert_eq!(parse_float_prefix(".5"), 0.5);
    assert_eq!(parse_float_prefix("  -3.5e1x"), -35.0);
    assert_eq!(parse_float_prefix("2e"), 2.0);
    assert_eq!(parse_float_prefix("."), 0.0);
}

#[test]
fn test_printf_template() {
    let output = render(
        "|%-8.2f|%5d|%s|",
        &[RawValue::Float(3.14159), RawValue::Int(42), RawValue::from("hi")],
    );
    assert_eq!(output, "|3.14    |   42|hi|");
}

#[test]
fn test_printf_c_defaults_and_conversions() {
    // %f without a precision uses C's default of 6 digits
    assert_eq!(render("%f", &[RawValue::Float(1.5)]), "1.500000");
    assert_eq!(render("%x", &[RawValue::Int(255)]), "ff");
    assert_eq!(render("%X", &[RawValue::Int(255)]), "FF");
    assert_eq!(render("%u", &[RawValue::Int(-1)]), "4294967295");
    assert_eq!(render("%c%c", &[RawValue::Int(65), RawValue::from("bee")]), "Ab");
    assert_eq!(render("%ld", &[RawValue::Int(5)]), "5");
}

#[test]
fn test_printf_lenient_cases() {
    // Missing arguments render as zero
    assert_eq!(render("%d and %d", &[RawValue::Int(7)]), "7 and 0");
    assert_eq!(render("100%%", &[]), "100%");
    // Unknown conversions are copied as written
    assert_eq!(render("%q", &[]), "%q");
    // Template ending inside a directive
    assert_eq!(render("50%", &[]), "50%");
}

#[test]
fn test_printf_escapes() {
    assert_eq!(render("a\\nb\\t\\\"c\\\"", &[]), "a\nb\t\"c\"");
}

#[test]
fn test_scanf_int_and_float() {
    let result = scan("%d %f", "42 3.5");
    assert_eq!(result.values, vec![RawValue::Int(42), RawValue::Float(3.5)]);
    assert_eq!(result.status, ScanStatus::Complete);
    assert_eq!(result.assigned(), 2);
}

#[test]
fn test_scanf_literal_mismatch() {
    let result = scan("%d,%d", "10 20");
    assert_eq!(result.assigned(), 1);
    assert_eq!(result.status, ScanStatus::MatchingFailure { position: 2 });
}

#[test]
fn test_scanf_no_digits() {
    let result = scan("%d", "abc");
    assert_eq!(result.assigned(), 0);
    assert_eq!(result.status, ScanStatus::MatchingFailure { position: 0 });
}

#[test]
fn test_scanf_input_exhausted() {
    let result = scan("%d %d", "5");
    assert_eq!(result.values, vec![RawValue::Int(5)]);
    assert_eq!(result.status, ScanStatus::InputExhausted);
}

#[test]
fn test_scanf_width_and_char() {
    let result = scan("%3d%c", "12345x");
    assert_eq!(
        result.values,
        vec![RawValue::Int(123), RawValue::Text("4".to_string())]
    );
    assert_eq!(result.status, ScanStatus::Complete);
}

#[test]
fn test_scanf_string_stops_at_whitespace() {
    let result = scan("%s %d", "Alice 20");
    assert_eq!(
        result.values,
        vec![RawValue::Text("Alice".to_string()), RawValue::Int(20)]
    );
}

proptest! {
    #[test]
    fn prop_float_output_length(
        value in -1000.0f64..1000.0,
        width in 0usize..20,
        precision in 1usize..7,
        left in any::<bool>(),
    ) {
        let spec = FormatSpec::float().with_width(width).with_precision(precision).left(left);
        let out = format_value(&RawValue::Float(value), &spec);
        let content = out.text.trim();

        prop_assert_eq!(out.text.chars().count(), width.max(content.chars().count()));

        let parts: Vec<&str> = content.split('.').collect();
        prop_assert_eq!(parts.len(), 2);
        prop_assert_eq!(parts[1].len(), precision);

        if left {
            prop_assert!(out.text.starts_with(content));
        } else {
            prop_assert!(out.text.ends_with(content));
        }
    }

    #[test]
    fn prop_string_padding_keeps_content(
        text in "[a-z]{0,12}",
        width in 0usize..16,
    ) {
        let spec = FormatSpec::string().with_width(width);
        let out = format_value(&RawValue::Text(text.clone()), &spec);
        prop_assert_eq!(out.text.chars().count(), width.max(text.len()));
        prop_assert!(out.text.ends_with(&text));
    }
}
