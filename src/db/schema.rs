pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS transactions (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    date              TEXT NOT NULL,
    time              TEXT NOT NULL,
    platform          TEXT NOT NULL,
    transaction_type  TEXT NOT NULL,
    raw_type          TEXT NOT NULL DEFAULT '',
    amount            TEXT NOT NULL,
    balance           TEXT NOT NULL,
    description       TEXT NOT NULL DEFAULT '',
    fee               TEXT NOT NULL DEFAULT '0',
    transaction_id    TEXT NOT NULL DEFAULT '',
    raw_message       TEXT NOT NULL,
    shape             TEXT NOT NULL,
    timestamp         TEXT NOT NULL,
    timestamp_source  TEXT NOT NULL DEFAULT 'message',
    import_hash       TEXT NOT NULL DEFAULT '',
    created_at        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
CREATE INDEX IF NOT EXISTS idx_transactions_platform ON transactions(platform);
CREATE INDEX IF NOT EXISTS idx_transactions_type ON transactions(transaction_type);
CREATE UNIQUE INDEX IF NOT EXISTS idx_transactions_hash_unique ON transactions(import_hash) WHERE import_hash != '';
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[];
