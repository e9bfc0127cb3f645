use anyhow::{Context, Result};

use crate::db::Database;
use crate::models::{Balances, LedgerEntry, TransactionRecord};
use crate::parse::{format_amount, SmsParser};

/// What happened to one incoming notice.
#[derive(Debug)]
pub(crate) enum Processed {
    /// Recognized and appended to the ledger.
    Logged { id: i64, record: TransactionRecord },
    /// Recognized, but the same notice is already in the ledger.
    Duplicate(TransactionRecord),
    /// Not a transaction notice.
    Ignored,
}

/// Parser plus ledger: the entry point for incoming notices.
pub(crate) struct SmsLedger {
    parser: SmsParser,
    db: Database,
}

impl SmsLedger {
    pub(crate) fn new(parser: SmsParser, db: Database) -> Self {
        Self { parser, db }
    }

    pub(crate) fn parser(&self) -> &SmsParser {
        &self.parser
    }

    pub(crate) fn db(&self) -> &Database {
        &self.db
    }

    pub(crate) fn process_message(&mut self, text: &str) -> Result<Processed> {
        tracing::debug!(len = text.len(), "received message");

        let Some(record) = self.parser.parse(text) else {
            tracing::info!("ignored message: not a transaction notice");
            return Ok(Processed::Ignored);
        };

        let entry = LedgerEntry::from_record(&record);
        let appended = self
            .db
            .append(&entry)
            .context("Failed to append transaction to ledger")?;

        match appended {
            Some(id) => {
                tracing::info!(
                    id,
                    platform = %record.platform,
                    amount = %format_amount(record.amount),
                    transaction_type = %record.transaction_type,
                    "logged transaction"
                );
                Ok(Processed::Logged { id, record })
            }
            None => {
                tracing::info!(hash = %entry.import_hash, "duplicate notice skipped");
                Ok(Processed::Duplicate(record))
            }
        }
    }

    /// Summary as of today in the configured zone.
    pub(crate) fn current_balances(&self) -> Result<Balances> {
        self.db
            .current_balances(self.parser.today())
            .context("Failed to compute balances")
    }
}
