use crate::models::Snapshot;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// No rates loaded yet (never-fetched store).
    #[error("exchange rates not available")]
    NotAvailable,
    /// Code is neither the base currency nor a table key.
    #[error("currency not found: {0}")]
    UnknownCurrency(String),
}

impl Snapshot {
    /// Convert `amount` between two currencies via the base: the amount is
    /// first expressed in base units, then in target units. Codes are
    /// case-insensitive. No rounding here; display formatting is the CLI's
    /// job.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        if self.rates.is_empty() {
            return Err(ConvertError::NotAvailable);
        }

        let rate_from = self.rate_of(&from.to_uppercase())?;
        let rate_to = self.rate_of(&to.to_uppercase())?;
        Ok(amount / rate_from * rate_to)
    }

    /// Exchange rate between two currencies: how many units of `to` one unit
    /// of `from` buys.
    pub fn get_rate(&self, from: &str, to: &str) -> Result<f64, ConvertError> {
        self.convert(1.0, from, to)
    }

    /// All supported codes: table keys plus the base currency, deduplicated
    /// and sorted.
    pub fn currencies(&self) -> Vec<String> {
        let mut codes: BTreeSet<&str> = self.rates.keys().map(String::as_str).collect();
        codes.insert(&self.base);
        codes.into_iter().map(str::to_string).collect()
    }

    // The base currency is worth 1.0 even when absent from the table.
    fn rate_of(&self, code: &str) -> Result<f64, ConvertError> {
        if code == self.base {
            return Ok(1.0);
        }
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| ConvertError::UnknownCurrency(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FALLBACK_RATES;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn fallback_snapshot() -> Snapshot {
        Snapshot {
            rates: FALLBACK_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
            base: "USD".to_string(),
            last_updated: None,
        }
    }

    // Base absent from the table, like a live API response for e.g. PLN.
    fn baseless_snapshot() -> Snapshot {
        Snapshot {
            rates: HashMap::from([("USD".to_string(), 0.25), ("EUR".to_string(), 0.23)]),
            base: "PLN".to_string(),
            last_updated: None,
        }
    }

    #[test]
    fn identity_conversion() {
        let snapshot = fallback_snapshot();
        for (code, _) in FALLBACK_RATES {
            assert_relative_eq!(snapshot.convert(42.5, code, code).unwrap(), 42.5);
        }
    }

    #[test]
    fn linearity() {
        let snapshot = fallback_snapshot();
        let one = snapshot.convert(3.0, "GBP", "JPY").unwrap();
        let scaled = snapshot.convert(3.0 * 7.0, "GBP", "JPY").unwrap();
        assert_relative_eq!(scaled, one * 7.0, max_relative = 1e-12);
    }

    #[test]
    fn rate_reciprocity() {
        let snapshot = fallback_snapshot();
        let there = snapshot.get_rate("CHF", "INR").unwrap();
        let back = snapshot.get_rate("INR", "CHF").unwrap();
        assert_relative_eq!(there * back, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn codes_are_case_insensitive() {
        let snapshot = fallback_snapshot();
        assert_eq!(
            snapshot.convert(100.0, "usd", "eur").unwrap(),
            snapshot.convert(100.0, "USD", "EUR").unwrap()
        );
    }

    #[test]
    fn fallback_arithmetic() {
        let snapshot = fallback_snapshot();
        assert_relative_eq!(snapshot.convert(100.0, "USD", "EUR").unwrap(), 92.0);
        assert_relative_eq!(
            snapshot.convert(100.0, "EUR", "USD").unwrap(),
            100.0 / 0.92,
            max_relative = 1e-12
        );
    }

    #[test]
    fn base_implicitly_rates_one() {
        let snapshot = baseless_snapshot();
        assert_relative_eq!(snapshot.convert(10.0, "PLN", "PLN").unwrap(), 10.0);
        assert_relative_eq!(snapshot.convert(4.0, "PLN", "USD").unwrap(), 1.0);
    }

    #[test]
    fn unknown_currency() {
        let snapshot = fallback_snapshot();
        assert_eq!(
            snapshot.convert(100.0, "USD", "XYZ"),
            Err(ConvertError::UnknownCurrency("XYZ".to_string()))
        );
        assert_eq!(
            snapshot.get_rate("ABC", "USD"),
            Err(ConvertError::UnknownCurrency("ABC".to_string()))
        );
    }

    #[test]
    fn empty_snapshot_is_not_available() {
        let snapshot = Snapshot::empty();
        assert_eq!(
            snapshot.convert(1.0, "USD", "EUR"),
            Err(ConvertError::NotAvailable)
        );
    }

    #[test]
    fn currencies_sorted_and_deduplicated() {
        let expected: Vec<String> = [
            "AUD", "CAD", "CHF", "CNY", "EUR", "GBP", "INR", "JPY", "MXN", "USD",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        // USD is both the base and a table key; it must appear once.
        assert_eq!(fallback_snapshot().currencies(), expected);
    }

    #[test]
    fn currencies_include_missing_base() {
        assert_eq!(baseless_snapshot().currencies(), ["EUR", "PLN", "USD"]);
    }
}
