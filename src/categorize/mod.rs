//! Keyword rules that decide the economic nature of a matched notice.
//!
//! Each platform has a decision list evaluated top to bottom; the first rule
//! that fires decides. Anything that falls through is `Unknown` so the record
//! can still be kept and reconciled by hand.

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::{Platform, Shape, TransactionType};

/// Wallet provider name as it appears in bank notices.
const WALLET_PROVIDER: &str = "bkash";

/// Bank description keywords that always mean money spent.
const BANK_EXPENSE_KEYWORDS: &[&str] = &["cash wd", "purchase"];

/// Wallet message keywords that mean money spent.
const WALLET_EXPENSE_KEYWORDS: &[&str] = &["payment", "cash out", "send money"];

/// Deposit sources that mean the money came from the linked bank card.
/// Whole words only: "Ricardo" is a person, not a card.
const LINKED_CARD_PATTERN: &str = r"(?i)\b(?:card|ebl)\b";

const WALLET_TO_BANK: &str = "bkash to bank";

/// Raw matched fields the rules look at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Clues<'a> {
    /// Lowercased verb, e.g. "debited".
    pub(crate) verb: &'a str,
    /// Counterparty, location, or source text.
    pub(crate) counterparty: &'a str,
    pub(crate) description: &'a str,
    /// The whole notice.
    pub(crate) message: &'a str,
}

/// Holds the compiled source patterns; build once and reuse.
pub(crate) struct Categorizer {
    linked_card: Regex,
}

impl Categorizer {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            linked_card: Regex::new(LINKED_CARD_PATTERN)
                .context("Invalid linked card pattern")?,
        })
    }

    pub(crate) fn categorize(&self, shape: Shape, clues: &Clues<'_>) -> TransactionType {
        match shape.platform() {
            Platform::BankCard => categorize_bank(shape, clues),
            Platform::MobileWallet => self.categorize_wallet(clues),
        }
    }

    fn categorize_wallet(&self, clues: &Clues<'_>) -> TransactionType {
        let msg = clues.message.to_lowercase();

        if contains_any(&msg, WALLET_EXPENSE_KEYWORDS) {
            return TransactionType::Expense;
        }

        if msg.contains("cash in") {
            return TransactionType::Income;
        }

        if msg.contains("received deposit") {
            if self.linked_card.is_match(clues.counterparty) {
                return TransactionType::InternalTransferIn;
            }
            return TransactionType::Income;
        }

        if msg.contains(WALLET_TO_BANK) {
            return TransactionType::InternalTransferOut;
        }

        TransactionType::Unknown
    }
}

fn categorize_bank(shape: Shape, clues: &Clues<'_>) -> TransactionType {
    let desc = clues.description.to_lowercase();

    if contains_any(&desc, BANK_EXPENSE_KEYWORDS) || clues.verb == "debited" {
        // Money leaving the account toward the wallet is not spending
        if desc.contains(WALLET_PROVIDER) {
            return TransactionType::InternalTransferOut;
        }
        return TransactionType::Expense;
    }

    if clues.verb == "credited" {
        return TransactionType::Income;
    }

    if shape == Shape::BankFundTransfer {
        if clues.counterparty.to_lowercase().contains(WALLET_PROVIDER) {
            return TransactionType::InternalTransferIn;
        }
        return TransactionType::Income;
    }

    TransactionType::Unknown
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests;
