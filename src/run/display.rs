use crate::models::{Balances, LedgerEntry, TransactionRecord};
use crate::parse::format_amount;
use crate::service::Processed;

const DESCRIPTION_WIDTH: usize = 28;

/// Fit a column of `max` characters, ending with "…" when cut.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some(_) if max == 0 => String::new(),
        Some(_) => {
            let keep: String = s.chars().take(max - 1).collect();
            keep + "…"
        }
    }
}

pub(crate) fn recent_header() -> String {
    format!(
        "{:<10} {:<8} {:<6} {:<12} {:>12} {:>12}  Description",
        "Date", "Time", "From", "Type", "Amount", "Balance"
    )
}

pub(crate) fn recent_row(e: &LedgerEntry) -> String {
    format!(
        "{:<10} {:<8} {:<6} {:<12} {:>12} {:>12}  {}",
        e.date,
        e.time,
        e.platform.as_str(),
        e.transaction_type.as_str(),
        format_amount(e.amount),
        format_amount(e.balance),
        truncate(&e.description, DESCRIPTION_WIDTH),
    )
}

pub(crate) fn balances_report(b: &Balances) -> Vec<String> {
    vec![
        format!("  Bank balance:     {:>14}", format_amount(b.bank_balance)),
        format!("  Wallet balance:   {:>14}", format_amount(b.wallet_balance)),
        format!("  Total balance:    {:>14}", format_amount(b.total_balance)),
        format!("  Today's expense:  {:>14}", format_amount(b.today_expense)),
        format!("  Monthly expense:  {:>14}", format_amount(b.monthly_expense)),
    ]
}

fn record_summary(r: &TransactionRecord) -> String {
    format!(
        "{} {} {} ({})",
        r.platform,
        r.transaction_type,
        format_amount(r.amount),
        truncate(&r.description, DESCRIPTION_WIDTH)
    )
}

pub(crate) fn outcome_line(outcome: &Processed) -> String {
    match outcome {
        Processed::Logged { id, record } => format!("logged #{id}: {}", record_summary(record)),
        Processed::Duplicate(record) => format!("duplicate: {}", record_summary(record)),
        Processed::Ignored => "ignored".to_string(),
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
