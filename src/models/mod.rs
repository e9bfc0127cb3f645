mod balances;
mod ledger_entry;
mod platform;
mod transaction;

pub use balances::Balances;
pub use ledger_entry::{import_hash, LedgerEntry};
pub use platform::{Platform, Shape};
pub use transaction::{TimestampSource, TransactionRecord, TransactionType};
