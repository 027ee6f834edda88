//! Persistent dashboard cache
//!
//! Holds the generated dataset plus side data (prices, news), keyed by
//! exchange name. Written wholesale once per initialization run inside a
//! transaction, read wholesale at startup.

pub mod backend;
pub mod schema;
pub mod sqlite;

pub use backend::{CacheBackend, StoreError};
pub use sqlite::SqliteCache;
