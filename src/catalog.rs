//! Exchange catalog: the fixed set of tracked exchanges
//!
//! Order is significant: the dashboard uses the first three entries as its
//! default filter selection. Lookups are total; unrecognized identifiers get
//! default weights rather than errors.

/// Market share assumed for exchanges not in the catalog.
pub const DEFAULT_MARKET_SHARE: f64 = 0.05;

/// Rough size bucket used to scale synthetic volume bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

impl SizeClass {
    /// Scale factor range drawn for the synthetic volume basis.
    pub fn scale_range(&self) -> (f64, f64) {
        match self {
            SizeClass::Large => (8.0, 12.0),
            SizeClass::Medium => (4.0, 8.0),
            SizeClass::Small => (1.0, 4.0),
        }
    }
}

struct ExchangeInfo {
    name: &'static str,
    /// Approximate relative market share, asserted from public rankings.
    market_share: f64,
    size: SizeClass,
}

static EXCHANGES: [ExchangeInfo; 9] = [
    ExchangeInfo { name: "Binance", market_share: 0.40, size: SizeClass::Large },
    ExchangeInfo { name: "Coinbase", market_share: 0.25, size: SizeClass::Large },
    ExchangeInfo { name: "Bybit", market_share: 0.15, size: SizeClass::Medium },
    ExchangeInfo { name: "Upbit", market_share: 0.10, size: SizeClass::Medium },
    ExchangeInfo { name: "Kraken", market_share: 0.12, size: SizeClass::Medium },
    ExchangeInfo { name: "Kucoin", market_share: 0.08, size: SizeClass::Small },
    ExchangeInfo { name: "CoinDCX", market_share: 0.03, size: SizeClass::Small },
    ExchangeInfo { name: "Bitget", market_share: 0.05, size: SizeClass::Small },
    ExchangeInfo { name: "OKX", market_share: 0.07, size: SizeClass::Small },
];

/// All tracked exchange identifiers, in catalog order.
pub fn list_exchanges() -> Vec<&'static str> {
    EXCHANGES.iter().map(|e| e.name).collect()
}

fn lookup(exchange: &str) -> Option<&'static ExchangeInfo> {
    EXCHANGES.iter().find(|e| e.name == exchange)
}

/// Market share weight in (0, 1]. Unrecognized identifiers get
/// [`DEFAULT_MARKET_SHARE`].
pub fn market_share(exchange: &str) -> f64 {
    lookup(exchange).map_or(DEFAULT_MARKET_SHARE, |e| e.market_share)
}

/// Size bucket for an exchange. Unrecognized identifiers count as small.
pub fn size_class(exchange: &str) -> SizeClass {
    lookup(exchange).map_or(SizeClass::Small, |e| e.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_fixed() {
        let exchanges = list_exchanges();
        assert_eq!(exchanges.len(), 9);
        // First three drive the dashboard's default selection
        assert_eq!(&exchanges[..3], &["Binance", "Coinbase", "Bybit"]);
        assert_eq!(exchanges, list_exchanges());
    }

    #[test]
    fn test_known_market_shares() {
        assert_eq!(market_share("Binance"), 0.40);
        assert_eq!(market_share("CoinDCX"), 0.03);
    }

    #[test]
    fn test_unknown_exchange_gets_defaults() {
        assert_eq!(market_share("NotAnExchange"), DEFAULT_MARKET_SHARE);
        assert_eq!(size_class("NotAnExchange"), SizeClass::Small);
    }

    #[test]
    fn test_size_classes() {
        assert_eq!(size_class("Binance"), SizeClass::Large);
        assert_eq!(size_class("Kraken"), SizeClass::Medium);
        assert_eq!(size_class("OKX"), SizeClass::Small);

        let (lo, hi) = SizeClass::Large.scale_range();
        assert_eq!((lo, hi), (8.0, 12.0));
    }
}
