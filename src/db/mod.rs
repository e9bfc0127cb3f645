mod schema;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::*;

const ENTRY_COLUMNS: &str = "id, date, time, platform, transaction_type, raw_type, amount, balance,
     description, fee, transaction_id, raw_message, shape, timestamp, timestamp_source,
     import_hash, created_at";

/// Header row for CSV export, in ledger column order.
const EXPORT_HEADERS: [&str; 10] = [
    "Date",
    "Time",
    "Platform",
    "Transaction Type",
    "Transaction Amount",
    "Balance After",
    "Description",
    "Fee",
    "Transaction ID",
    "Raw Message",
];

/// Local transaction ledger.
pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Bring the ledger to `schema::CURRENT_VERSION`. A fresh file gets the
    /// full schema; an older one gets each pending migration in order. Runs
    /// in one transaction, so a failed step leaves the file untouched.
    fn migrate(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        let has_version_table: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;
        let stored: Option<i32> = if has_version_table {
            // An empty version table is treated as v0
            let version = tx
                .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                    row.get(0)
                })
                .optional()?;
            Some(version.unwrap_or(0))
        } else {
            None
        };

        match stored {
            None => {
                tx.execute_batch(schema::SCHEMA_V1)?;
                tx.execute(
                    "INSERT INTO schema_version (version) VALUES (?1)",
                    params![schema::CURRENT_VERSION],
                )?;
                tracing::info!(version = schema::CURRENT_VERSION, "created ledger schema");
            }
            Some(version) if version < schema::CURRENT_VERSION => {
                for (from, sql) in pending_migrations(version) {
                    tx.execute_batch(sql)
                        .with_context(|| format!("Migration from v{from} failed"))?;
                }
                tx.execute("DELETE FROM schema_version", [])?;
                tx.execute(
                    "INSERT INTO schema_version (version) VALUES (?1)",
                    params![schema::CURRENT_VERSION],
                )?;
                tracing::info!(from = version, to = schema::CURRENT_VERSION, "migrated ledger");
            }
            Some(_) => {}
        }

        tx.commit()?;
        Ok(())
    }

    pub(crate) fn schema_version(&self) -> Result<i32> {
        Ok(self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })?)
    }

    // ── Transactions ──────────────────────────────────────────

    /// Append a row. Returns `None` when a row with the same import hash is
    /// already present.
    pub(crate) fn append(&mut self, entry: &LedgerEntry) -> Result<Option<i64>> {
        let tx = self.conn.transaction()?;
        if !entry.import_hash.is_empty() {
            let exists: bool = tx.query_row(
                "SELECT EXISTS(SELECT 1 FROM transactions WHERE import_hash = ?1)",
                params![entry.import_hash],
                |row| row.get(0),
            )?;
            if exists {
                return Ok(None);
            }
        }
        tx.execute(
            "INSERT INTO transactions (date, time, platform, transaction_type, raw_type, amount, balance,
                 description, fee, transaction_id, raw_message, shape, timestamp, timestamp_source,
                 import_hash, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            params![
                entry.date,
                entry.time,
                entry.platform.as_str(),
                entry.transaction_type.as_str(),
                entry.raw_type,
                entry.amount.to_string(),
                entry.balance.to_string(),
                entry.description,
                entry.fee.to_string(),
                entry.transaction_id,
                entry.raw_message,
                entry.shape.as_str(),
                entry.timestamp,
                entry.timestamp_source.as_str(),
                entry.import_hash,
                entry.created_at,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Some(id))
    }

    pub(crate) fn get_transaction_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?)
    }

    /// Most recently appended rows first.
    pub(crate) fn get_recent(&self, limit: u32) -> Result<Vec<LedgerEntry>> {
        let sql = format!("SELECT {ENTRY_COLUMNS} FROM transactions ORDER BY id DESC LIMIT ?1");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![limit], entry_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Rows in ledger order, optionally limited to one "YYYY-MM" month.
    pub(crate) fn get_entries(&self, month: Option<&str>) -> Result<Vec<LedgerEntry>> {
        let filter = if month.is_some() { "WHERE date LIKE ?1" } else { "" };
        let sql = format!("SELECT {ENTRY_COLUMNS} FROM transactions {filter} ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = match month {
            Some(m) => stmt
                .query_map(params![format!("{m}%")], entry_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?,
            None => stmt
                .query_map([], entry_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?,
        };
        Ok(rows)
    }

    // ── Summary ───────────────────────────────────────────────

    /// Balance stated by the most recently appended notice for a platform.
    pub(crate) fn get_latest_balance(&self, platform: Platform) -> Result<Decimal> {
        let result = self.conn.query_row(
            "SELECT balance FROM transactions WHERE platform = ?1 ORDER BY id DESC LIMIT 1",
            params![platform.as_str()],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(s) => Ok(Decimal::from_str(&s).unwrap_or_default()),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(Decimal::ZERO),
            Err(e) => Err(e.into()),
        }
    }

    /// Sum of expense amounts whose date starts with `date_prefix`
    /// ("YYYY-MM-DD" for a day, "YYYY-MM" for a month).
    pub(crate) fn get_expense_total(&self, date_prefix: &str) -> Result<Decimal> {
        let mut stmt = self.conn.prepare(
            "SELECT amount FROM transactions WHERE transaction_type = ?1 AND date LIKE ?2",
        )?;
        let rows = stmt.query_map(
            params![TransactionType::Expense.as_str(), format!("{date_prefix}%")],
            |row| row.get::<_, String>(0),
        )?;
        let mut total = Decimal::ZERO;
        for amount in rows {
            total += Decimal::from_str(&amount?).unwrap_or_default();
        }
        Ok(total)
    }

    pub(crate) fn current_balances(&self, today: NaiveDate) -> Result<Balances> {
        Ok(Balances::new(
            self.get_latest_balance(Platform::BankCard)?,
            self.get_latest_balance(Platform::MobileWallet)?,
            self.get_expense_total(&today.format("%Y-%m-%d").to_string())?,
            self.get_expense_total(&today.format("%Y-%m").to_string())?,
        ))
    }

    // ── Export ────────────────────────────────────────────────

    pub(crate) fn export_to_csv(&self, path: &Path, month: Option<&str>) -> Result<usize> {
        let entries = self.get_entries(month)?;
        if entries.is_empty() {
            return Ok(0);
        }

        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        wtr.write_record(EXPORT_HEADERS)?;
        for e in &entries {
            let amount = e.amount.to_string();
            let balance = e.balance.to_string();
            let fee = e.fee.to_string();
            wtr.write_record([
                e.date.as_str(),
                e.time.as_str(),
                e.platform.as_str(),
                e.transaction_type.as_str(),
                amount.as_str(),
                balance.as_str(),
                e.description.as_str(),
                fee.as_str(),
                e.transaction_id.as_str(),
                e.raw_message.as_str(),
            ])?;
        }
        wtr.flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(entries.len())
    }
}

/// Migrations still to apply to a ledger at `version`, oldest first.
fn pending_migrations(version: i32) -> impl Iterator<Item = (i32, &'static str)> {
    schema::MIGRATIONS
        .iter()
        .copied()
        .filter(move |&(from, _)| from >= version)
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<LedgerEntry> {
    let platform = parse_column(row, 3, Platform::parse)?;
    let shape = parse_column(row, 12, Shape::parse)?;
    let timestamp_source = parse_column(row, 14, TimestampSource::parse)?;
    let amount: String = row.get(6)?;
    let balance: String = row.get(7)?;
    let fee: String = row.get(9)?;
    Ok(LedgerEntry {
        id: Some(row.get(0)?),
        date: row.get(1)?,
        time: row.get(2)?,
        platform,
        transaction_type: TransactionType::parse(&row.get::<_, String>(4)?),
        raw_type: row.get(5)?,
        amount: Decimal::from_str(&amount).unwrap_or_default(),
        balance: Decimal::from_str(&balance).unwrap_or_default(),
        description: row.get(8)?,
        fee: Decimal::from_str(&fee).unwrap_or_default(),
        transaction_id: row.get(10)?,
        raw_message: row.get(11)?,
        shape,
        timestamp: row.get(13)?,
        timestamp_source,
        import_hash: row.get(15)?,
        created_at: row.get(16)?,
    })
}

/// Read a text label column back into its enum.
fn parse_column<T>(row: &Row<'_>, idx: usize, parse: fn(&str) -> Option<T>) -> rusqlite::Result<T> {
    let label: String = row.get(idx)?;
    parse(&label).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("unknown label '{label}'").into(),
        )
    })
}
