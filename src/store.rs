use crate::api::{self, FetchError};
use crate::config::{API_BASE, FALLBACK_BASE, FALLBACK_RATES};
use crate::models::Snapshot;
use chrono::Local;
use log::{info, warn};
use std::collections::HashMap;

/// Result of a fetch. `Fallback` is a degraded success, not a fatal error:
/// the store always ends up holding a usable snapshot.
#[derive(Debug)]
#[must_use]
pub enum FetchOutcome {
    /// Live rates were fetched and installed.
    Fetched,
    /// The request failed; the offline fallback table was installed instead.
    Fallback(FetchError),
}

impl FetchOutcome {
    pub fn is_live(&self) -> bool {
        matches!(self, FetchOutcome::Fetched)
    }
}

/// Owns the current rate [`Snapshot`]. One store per converter session;
/// callers hold it explicitly rather than going through global state.
pub struct RateStore {
    api_base: String,
    snapshot: Snapshot,
}

impl RateStore {
    pub fn new() -> Self {
        Self::with_api_base(API_BASE)
    }

    /// Point the store at a different endpoint. Used by tests; the public
    /// constructor always targets the real API.
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.to_string(),
            snapshot: Snapshot::empty(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Fetch rates for `base` and replace the snapshot wholesale.
    ///
    /// On any network, timeout, or HTTP error the fallback table (base USD)
    /// is installed instead and the error is reported in the outcome. The
    /// previous timestamp is left as-is in that case, since the fallback
    /// rates carry no meaningful freshness.
    pub async fn fetch(&mut self, base: &str) -> FetchOutcome {
        let base = base.to_uppercase();
        match api::fetch_latest(&self.api_base, &base).await {
            Ok(response) => {
                info!("fetched {} rates for base {}", response.rates.len(), base);
                self.snapshot = Snapshot {
                    rates: response.rates,
                    base,
                    last_updated: Some(Local::now()),
                };
                FetchOutcome::Fetched
            }
            Err(err) => {
                warn!("rate fetch failed ({}), using offline rates", err);
                self.snapshot = Snapshot {
                    rates: fallback_table(),
                    base: FALLBACK_BASE.to_string(),
                    last_updated: self.snapshot.last_updated,
                };
                FetchOutcome::Fallback(err)
            }
        }
    }
}

impl Default for RateStore {
    fn default() -> Self {
        Self::new()
    }
}

fn fallback_table() -> HashMap<String, f64> {
    FALLBACK_RATES
        .iter()
        .map(|(code, rate)| (code.to_string(), *rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = RateStore::new();
        assert!(store.snapshot().rates.is_empty());
        assert_eq!(store.snapshot().base, "USD");
        assert!(store.snapshot().last_updated.is_none());
    }

    #[tokio::test]
    async fn unreachable_endpoint_installs_fallback() {
        // Nothing listens on this port; connection is refused immediately.
        let mut store = RateStore::with_api_base("http://127.0.0.1:1/v4/latest/");
        let outcome = store.fetch("eur").await;

        assert!(!outcome.is_live());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.base, "USD");
        assert_eq!(snapshot.rates.len(), FALLBACK_RATES.len());
        assert_eq!(snapshot.rates["EUR"], 0.92);
        assert!(snapshot.last_updated.is_none());
    }
}
