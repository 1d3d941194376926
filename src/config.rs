use std::time::Duration;

pub const API_BASE: &str = "https://api.exchangerate-api.com/v4/latest/";

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub const FALLBACK_BASE: &str = "USD";

// Offline rates, always keyed to base USD.
pub const FALLBACK_RATES: [(&str, f64); 10] = [
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 149.50),
    ("CAD", 1.32),
    ("AUD", 1.53),
    ("CHF", 0.88),
    ("CNY", 7.24),
    ("INR", 83.12),
    ("MXN", 17.05),
];
