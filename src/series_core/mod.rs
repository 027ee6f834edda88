//! Series Core - Synthetic Exchange Series Engine
//!
//! Produces the monthly and yearly volume/commission series the dashboard
//! consumes, plus the derived metrics computed over a completed dataset.
//!
//! # Architecture
//!
//! ```text
//! catalog (share, size class) + fees (resolved schedule)
//!     ↓
//! SeriesGenerator (seasonality × trend × noise, growth curves)
//!     ↓
//! ExchangeSeries map → metrics (totals, efficiency, ranking)
//!     ↓
//! store (SQLite cache) or presentation layer
//! ```

pub mod generator;
pub mod metrics;
pub mod periods;
pub mod types;

pub use generator::{GeneratorError, SeriesGenerator, VolumeBasis};
pub use metrics::{format_large_number, ExchangeTotals};
pub use periods::{monthly_labels, yearly_labels, MONTHLY_POINTS, YEARLY_POINTS};
pub use types::{ExchangeDataset, ExchangeSeries};
