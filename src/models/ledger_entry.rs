use rust_decimal::Decimal;

use super::{Platform, Shape, TimestampSource, TransactionRecord, TransactionType};

/// A persisted ledger row.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub id: Option<i64>,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    /// Format: "HH:MM:SS"
    pub time: String,
    pub platform: Platform,
    pub transaction_type: TransactionType,
    pub raw_type: String,
    pub amount: Decimal,
    pub balance: Decimal,
    pub description: String,
    pub fee: Decimal,
    pub transaction_id: String,
    pub raw_message: String,
    pub shape: Shape,
    /// RFC 3339, with the configured zone's offset.
    pub timestamp: String,
    pub timestamp_source: TimestampSource,
    pub import_hash: String,
    pub created_at: String,
}

impl LedgerEntry {
    pub fn from_record(record: &TransactionRecord) -> Self {
        Self {
            id: None,
            date: record.timestamp.format("%Y-%m-%d").to_string(),
            time: record.timestamp.format("%H:%M:%S").to_string(),
            platform: record.platform,
            transaction_type: record.transaction_type,
            raw_type: record.raw_type.clone(),
            amount: record.amount,
            balance: record.balance,
            description: record.description.clone(),
            fee: record.fee_or_zero(),
            transaction_id: record.transaction_id.clone().unwrap_or_default(),
            raw_message: record.raw_message.clone(),
            shape: record.shape,
            timestamp: record.timestamp.to_rfc3339(),
            timestamp_source: record.timestamp_source,
            import_hash: import_hash(&record.raw_message),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Dedup key for a notice: 64-bit FNV-1a of the text as 16 hex digits.
/// Must stay stable across releases, since stored rows are compared with it.
pub fn import_hash(raw_message: &str) -> String {
    let hash = raw_message
        .bytes()
        .fold(FNV_OFFSET_BASIS, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
    format!("{hash:016x}")
}
