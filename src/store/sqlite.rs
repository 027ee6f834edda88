//! SQLite cache implementation

use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::backend::{CacheBackend, StoreError};
use super::schema::SCHEMA;
use crate::catalog;
use crate::fetcher::{NewsItem, PriceQuote, TRACKED_COINS};
use crate::series_core::{ExchangeDataset, ExchangeSeries};

/// SQLite-backed dashboard cache
pub struct SqliteCache {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCache {
    /// Open (or create) the cache and apply the schema.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute_batch(SCHEMA)?;

        log::info!("✅ SQLite cache opened");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn exchange_count(conn: &Connection) -> Result<i64, StoreError> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM exchanges", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[async_trait]
impl CacheBackend for SqliteCache {
    async fn init_exchange_data(&self, dataset: &ExchangeDataset) -> Result<bool, StoreError> {
        let mut conn = self.conn.lock().unwrap();

        let existing = Self::exchange_count(&conn)?;
        if existing > 0 {
            log::info!(
                "Cache already holds {} exchanges, skipping initialization",
                existing
            );
            return Ok(false);
        }

        let now = chrono::Utc::now().timestamp();
        // Dropped (rolled back) automatically if any insert fails
        let tx = conn.transaction()?;

        for (name, series) in dataset {
            tx.execute(
                "INSERT INTO exchanges (name, market_share, created_at) VALUES (?1, ?2, ?3)",
                params![name, catalog::market_share(name), now],
            )?;
            let exchange_id = tx.last_insert_rowid();

            for ((period, volume), commission) in series
                .monthly_periods
                .iter()
                .zip(&series.monthly_volume)
                .zip(&series.monthly_commission)
            {
                tx.execute(
                    "INSERT INTO monthly_data (exchange_id, period, volume, commission)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![exchange_id, period, volume, commission],
                )?;
            }

            for ((year, volume), commission) in series
                .yearly_periods
                .iter()
                .zip(&series.yearly_volume)
                .zip(&series.yearly_commission)
            {
                tx.execute(
                    "INSERT INTO yearly_data (exchange_id, year, volume, commission)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![exchange_id, year, volume, commission],
                )?;
            }

            for ((tier, maker), taker) in series
                .fee_tiers
                .iter()
                .zip(&series.maker_fee_rate)
                .zip(&series.taker_fee_rate)
            {
                tx.execute(
                    "INSERT INTO fee_structures (exchange_id, tier, maker_fee, taker_fee)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![exchange_id, tier, maker, taker],
                )?;
            }
        }

        tx.commit()?;

        log::info!("✅ Cache initialized with {} exchanges", dataset.len());
        Ok(true)
    }

    async fn load_exchange_data(&self) -> Result<ExchangeDataset, StoreError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare("SELECT id, name FROM exchanges ORDER BY id")?;
        let exchanges: Vec<(i64, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;

        let mut dataset = Vec::with_capacity(exchanges.len());

        for (exchange_id, name) in exchanges {
            let mut series = ExchangeSeries {
                monthly_periods: Vec::new(),
                monthly_volume: Vec::new(),
                monthly_commission: Vec::new(),
                yearly_periods: Vec::new(),
                yearly_volume: Vec::new(),
                yearly_commission: Vec::new(),
                fee_tiers: Vec::new(),
                maker_fee_rate: Vec::new(),
                taker_fee_rate: Vec::new(),
            };

            let mut stmt = conn.prepare(
                "SELECT period, volume, commission FROM monthly_data
                 WHERE exchange_id = ?1 ORDER BY id",
            )?;
            let rows = stmt.query_map([exchange_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?, row.get::<_, f64>(2)?))
            })?;
            for row in rows {
                let (period, volume, commission) = row?;
                series.monthly_periods.push(period);
                series.monthly_volume.push(volume);
                series.monthly_commission.push(commission);
            }

            let mut stmt = conn.prepare(
                "SELECT year, volume, commission FROM yearly_data
                 WHERE exchange_id = ?1 ORDER BY id",
            )?;
            let rows = stmt.query_map([exchange_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?, row.get::<_, f64>(2)?))
            })?;
            for row in rows {
                let (year, volume, commission) = row?;
                series.yearly_periods.push(year);
                series.yearly_volume.push(volume);
                series.yearly_commission.push(commission);
            }

            let mut stmt = conn.prepare(
                "SELECT tier, maker_fee, taker_fee FROM fee_structures
                 WHERE exchange_id = ?1 ORDER BY id",
            )?;
            let rows = stmt.query_map([exchange_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?, row.get::<_, f64>(2)?))
            })?;
            for row in rows {
                let (tier, maker, taker) = row?;
                series.fee_tiers.push(tier);
                series.maker_fee_rate.push(maker);
                series.taker_fee_rate.push(taker);
            }

            if series.fee_tiers.is_empty() {
                return Err(StoreError::Corrupt(format!(
                    "exchange {} has no fee structure rows",
                    name
                )));
            }

            dataset.push((name, series));
        }

        Ok(dataset)
    }

    async fn store_prices(&self, prices: &HashMap<String, PriceQuote>) -> Result<(), StoreError> {
        let mut conn = self.conn.lock().unwrap();
        let now = chrono::Utc::now().timestamp();

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM crypto_prices", [])?;

        for (coin_id, name, symbol) in TRACKED_COINS {
            if let Some(quote) = prices.get(coin_id) {
                tx.execute(
                    "INSERT INTO crypto_prices (coin_id, name, symbol, price_usd, change_24h, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![coin_id, name, symbol, quote.usd, quote.usd_24h_change, now],
                )?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    async fn load_prices(&self) -> Result<HashMap<String, PriceQuote>, StoreError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare("SELECT coin_id, price_usd, change_24h FROM crypto_prices")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                PriceQuote {
                    usd: row.get(1)?,
                    usd_24h_change: row.get::<_, Option<f64>>(2)?.unwrap_or(0.0),
                },
            ))
        })?;

        let mut prices = HashMap::new();
        for row in rows {
            let (coin_id, quote) = row?;
            prices.insert(coin_id, quote);
        }
        Ok(prices)
    }

    async fn store_news(&self, items: &[NewsItem]) -> Result<(), StoreError> {
        let mut conn = self.conn.lock().unwrap();
        let now = chrono::Utc::now().timestamp();

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM news_items", [])?;

        for item in items {
            tx.execute(
                "INSERT INTO news_items (title, description, url, published_at, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![item.title, item.description, item.url, item.published_at, now],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    async fn load_news(&self) -> Result<Vec<NewsItem>, StoreError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT title, description, url, published_at FROM news_items ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(NewsItem {
                title: row.get(0)?,
                description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                url: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                published_at: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    fn backend_type(&self) -> &'static str {
        "SQLite"
    }
}
