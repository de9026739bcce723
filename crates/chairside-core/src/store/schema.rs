//! SQLite schema for the key-value store.

/// Complete schema for the backing store.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Key-value records
-- ============================================================================

CREATE TABLE IF NOT EXISTS kv_records (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,                         -- JSON document
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Store metadata
-- ============================================================================

CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

INSERT OR IGNORE INTO store_meta (key, value) VALUES ('schema_version', '1');
"#;
