use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a captured amount such as `1,500.00` or `2500`.
///
/// The captured group never carries a currency marker or a sign.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s.trim().replace(',', "");
    if cleaned.is_empty() || !cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        anyhow::bail!("Not an amount: '{s}'");
    }
    let value = Decimal::from_str(&cleaned).context(format!("Failed to parse '{s}' as decimal"))?;
    if value.is_sign_negative() {
        anyhow::bail!("Negative amount: '{s}'");
    }
    Ok(value)
}

/// Amount as written in notices: grouped thousands, two places, no currency.
/// `1234567.891` becomes `"1,234,567.89"`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = val.abs().round_dp(2);
    let text = format!("{rounded:.2}");
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if val.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(cents);
    grouped
}

#[cfg(test)]
#[path = "amount_tests.rs"]
mod tests;
