use chrono::DateTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Platform, Shape};

/// Economic nature of a transaction.
///
/// Transfers between the bank account and the wallet are directional and are
/// never counted as income or expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionType {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
    #[serde(rename = "transfer_in")]
    InternalTransferIn,
    #[serde(rename = "transfer_out")]
    InternalTransferOut,
    #[serde(rename = "unknown")]
    Unknown,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::InternalTransferIn => "transfer_in",
            Self::InternalTransferOut => "transfer_out",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "income" => Self::Income,
            "expense" => Self::Expense,
            "transfer_in" => Self::InternalTransferIn,
            "transfer_out" => Self::InternalTransferOut,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a record's timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampSource {
    /// Parsed from the date embedded in the notice.
    Message,
    /// The embedded date did not parse; the clock was used instead.
    Fallback,
}

impl TimestampSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Fallback => "fallback",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "message" => Some(Self::Message),
            "fallback" => Some(Self::Fallback),
            _ => None,
        }
    }
}

/// A transaction extracted from one notice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub platform: Platform,
    pub shape: Shape,
    pub transaction_type: TransactionType,
    pub raw_type: String,
    pub amount: Decimal,
    /// Balance after the transaction, as stated by the notice.
    pub balance: Decimal,
    pub fee: Option<Decimal>,
    pub description: String,
    pub transaction_id: Option<String>,
    pub timestamp: DateTime<Tz>,
    pub timestamp_source: TimestampSource,
    pub raw_message: String,
}

impl TransactionRecord {
    pub fn fee_or_zero(&self) -> Decimal {
        self.fee.unwrap_or(Decimal::ZERO)
    }
}
