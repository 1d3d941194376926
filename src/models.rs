use chrono::{DateTime, Local};
use serde::Deserialize;
use std::collections::HashMap;

use crate::config::FALLBACK_BASE;

/// Wire format of `GET {API_BASE}{base}`. Only the `rates` field matters;
/// everything else in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct RatesResponse {
    pub rates: HashMap<String, f64>,
}

/// One immutable set of exchange rates. Rates are expressed as "units of the
/// keyed currency per 1 unit of `base`". The base currency itself is worth
/// 1.0 whether or not it appears as a key.
///
/// A snapshot is replaced wholesale on each fetch, never merged.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub rates: HashMap<String, f64>,
    pub base: String,
    pub last_updated: Option<DateTime<Local>>,
}

impl Snapshot {
    /// Snapshot of a store that has never fetched: no rates, base USD.
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
            base: FALLBACK_BASE.to_string(),
            last_updated: None,
        }
    }
}
