use std::collections::HashMap;
use std::error::Error;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use analytics_core::{DateRange, RawFrame};
use tracing::debug;

use crate::source::QuoteSource;

type CacheKey = (String, Option<DateRange>);

struct CacheEntry {
    frame: RawFrame,
    fetched_at: Instant,
}

/// Time-bounded memoization of raw fetches, keyed by (symbol, start, end).
///
/// Wraps any [`QuoteSource`]; a stored frame is served until it is older
/// than the freshness window, then refetched.
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl<S> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<S: QuoteSource> QuoteSource for CachedSource<S> {
    fn fetch(
        &self,
        symbol: &str,
        range: Option<&DateRange>,
    ) -> Result<RawFrame, Box<dyn Error>> {
        let key = (symbol.to_string(), range.copied());

        if let Ok(entries) = self.entries.read() {
            if let Some(entry) = entries.get(&key) {
                if entry.fetched_at.elapsed() < self.ttl {
                    debug!(symbol, "serving cached fetch");
                    return Ok(entry.frame.clone());
                }
            }
        }

        let frame = self.inner.fetch(symbol, range)?;
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                key,
                CacheEntry {
                    frame: frame.clone(),
                    fetched_at: Instant::now(),
                },
            );
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingSource {
        calls: Cell<usize>,
    }

    impl QuoteSource for CountingSource {
        fn fetch(
            &self,
            _symbol: &str,
            _range: Option<&DateRange>,
        ) -> Result<RawFrame, Box<dyn Error>> {
            self.calls.set(self.calls.get() + 1);
            Ok(RawFrame::default())
        }
    }

    #[test]
    fn test_fresh_entry_is_reused() {
        let source = CachedSource::new(
            CountingSource { calls: Cell::new(0) },
            Duration::from_secs(3600),
        );

        source.fetch("AAPL", None).unwrap();
        source.fetch("AAPL", None).unwrap();
        assert_eq!(source.inner.calls.get(), 1);

        // A different symbol is a different key.
        source.fetch("MSFT", None).unwrap();
        assert_eq!(source.inner.calls.get(), 2);
    }

    #[test]
    fn test_expired_entry_is_refetched() {
        let source = CachedSource::new(CountingSource { calls: Cell::new(0) }, Duration::ZERO);

        source.fetch("AAPL", None).unwrap();
        source.fetch("AAPL", None).unwrap();
        assert_eq!(source.inner.calls.get(), 2);
    }
}
