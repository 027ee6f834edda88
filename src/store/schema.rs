//! Cache schema
//!
//! All statements use IF NOT EXISTS so the schema can be applied on every
//! open.

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS exchanges (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT NOT NULL UNIQUE,
    market_share    REAL NOT NULL,
    created_at      INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS monthly_data (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    exchange_id     INTEGER NOT NULL REFERENCES exchanges(id) ON DELETE CASCADE,
    period          TEXT NOT NULL,
    volume          REAL NOT NULL,
    commission      REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS yearly_data (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    exchange_id     INTEGER NOT NULL REFERENCES exchanges(id) ON DELETE CASCADE,
    year            TEXT NOT NULL,
    volume          REAL NOT NULL,
    commission      REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS fee_structures (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    exchange_id     INTEGER NOT NULL REFERENCES exchanges(id) ON DELETE CASCADE,
    tier            TEXT NOT NULL,
    maker_fee       REAL NOT NULL,
    taker_fee       REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS crypto_prices (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    coin_id         TEXT NOT NULL,
    name            TEXT NOT NULL,
    symbol          TEXT NOT NULL,
    price_usd       REAL NOT NULL,
    change_24h      REAL,
    updated_at      INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS news_items (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    title           TEXT NOT NULL,
    description     TEXT,
    url             TEXT,
    published_at    TEXT,
    created_at      INTEGER NOT NULL
);
"#;
