use std::collections::BTreeMap;

/// Selectable instruments grouped by asset class.
///
/// Supplied to the host as an explicit value rather than process-wide
/// state; irrelevant to analysis correctness.
#[derive(Debug, Clone)]
pub struct InstrumentCatalog {
    groups: BTreeMap<String, Vec<String>>,
}

impl InstrumentCatalog {
    pub fn new(groups: BTreeMap<String, Vec<String>>) -> Self {
        Self { groups }
    }

    /// Built-in symbol set covering the common asset classes.
    pub fn default_set() -> Self {
        let mut groups = BTreeMap::new();
        let insert = |groups: &mut BTreeMap<String, Vec<String>>, class: &str, symbols: &[&str]| {
            groups.insert(
                class.to_string(),
                symbols.iter().map(|s| s.to_string()).collect(),
            );
        };

        insert(
            &mut groups,
            "Stocks",
            &[
                "AAPL", "MSFT", "AMZN", "GOOGL", "META", "TSLA", "NVDA", "AMD", "NFLX", "JPM",
                "V", "WMT", "KO", "DIS", "PG", "JNJ", "XOM", "ORCL", "INTC", "ADBE",
            ],
        );
        insert(
            &mut groups,
            "ETFs",
            &["SPY", "QQQ", "VOO", "IWM", "DIA", "XLK", "XLE", "XLF", "GLD", "SLV"],
        );
        insert(
            &mut groups,
            "Crypto",
            &["BTC-USD", "ETH-USD", "SOL-USD", "XRP-USD", "ADA-USD", "DOGE-USD"],
        );
        insert(
            &mut groups,
            "Forex",
            &["EURUSD=X", "GBPUSD=X", "USDJPY=X", "AUDUSD=X", "USDCAD=X"],
        );
        insert(
            &mut groups,
            "Commodities",
            &["GC=F", "SI=F", "CL=F", "NG=F", "HG=F"],
        );
        insert(
            &mut groups,
            "Indices",
            &["^GSPC", "^DJI", "^IXIC", "^RUT", "^FTSE", "^N225"],
        );

        Self::new(groups)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn symbols(&self, class: &str) -> Option<&[String]> {
        self.groups.get(class).map(Vec::as_slice)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.groups
            .values()
            .any(|symbols| symbols.iter().any(|s| s == symbol))
    }
}
