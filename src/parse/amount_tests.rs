#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_basic() {
    assert_eq!(parse_amount("1500.00").unwrap(), dec!(1500.00));
    assert_eq!(parse_amount("2500").unwrap(), dec!(2500));
}

#[test]
fn test_parse_amount_thousands_separators() {
    assert_eq!(parse_amount("1,500.00").unwrap(), dec!(1500.00));
    assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
}

#[test]
fn test_parse_amount_is_exact() {
    // 0.1 + 0.2 drifts in binary floating point
    let sum = parse_amount("0.10").unwrap() + parse_amount("0.20").unwrap();
    assert_eq!(sum, dec!(0.30));
}

#[test]
fn test_parse_amount_zero() {
    assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    assert_eq!(parse_amount("0.00").unwrap(), Decimal::ZERO);
}

#[test]
fn test_parse_amount_only_separators() {
    assert!(parse_amount(",,,").is_err());
    assert!(parse_amount(",").is_err());
}

#[test]
fn test_parse_amount_empty() {
    assert!(parse_amount("").is_err());
    assert!(parse_amount("  ").is_err());
}

#[test]
fn test_parse_amount_rejects_sign() {
    assert!(parse_amount("-5.00").is_err());
    assert!(parse_amount("+5.00").is_err());
}

#[test]
fn test_parse_amount_invalid() {
    assert!(parse_amount("not_a_number").is_err());
    assert!(parse_amount("1.2.3").is_err());
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1500)), "1,500.00");
    assert_eq!(format_amount(dec!(8500.00)), "8,500.00");
    assert_eq!(format_amount(dec!(1234567.89)), "1,234,567.89");
}

#[test]
fn test_format_amount_small() {
    assert_eq!(format_amount(dec!(0)), "0.00");
    assert_eq!(format_amount(dec!(0.5)), "0.50");
    assert_eq!(format_amount(dec!(999.99)), "999.99");
}

#[test]
fn test_format_amount_group_boundaries() {
    assert_eq!(format_amount(dec!(100)), "100.00");
    assert_eq!(format_amount(dec!(1000)), "1,000.00");
    assert_eq!(format_amount(dec!(100000)), "100,000.00");
}

#[test]
fn test_format_amount_rounds_to_cents() {
    assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
    assert_eq!(format_amount(dec!(-0.001)), "0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-1200.5)), "-1,200.50");
}

#[test]
fn test_format_then_parse_returns_original() {
    for value in [
        dec!(0.00),
        dec!(0.01),
        dec!(2.00),
        dec!(999.99),
        dec!(1000.00),
        dec!(1500.00),
        dec!(123456.78),
        dec!(98765432.10),
    ] {
        let text = format_amount(value);
        assert_eq!(parse_amount(&text).unwrap(), value, "via {text}");
    }
}
