//! Work settings model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default daily normal-hour threshold.
pub const DEFAULT_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Process-wide work settings.
///
/// Stored settings are partial; the store reader merges them over
/// [`Settings::default`], so `threshold` is always a usable positive value by
/// the time the engine sees it.
///
/// # Example
///
/// ```
/// use worklog::models::{Settings, DEFAULT_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let settings = Settings::default();
/// assert_eq!(settings.threshold, DEFAULT_THRESHOLD);
/// assert_eq!(settings.rate, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Hourly rate for normal hours.
    pub rate: Decimal,
    /// Hourly rate for overtime hours.
    #[serde(rename = "rateOver")]
    pub rate_over: Decimal,
    /// Default daily normal-hour threshold.
    pub threshold: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rate: Decimal::ZERO,
            rate_over: Decimal::ZERO,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Settings {
    /// Returns default settings with the given threshold.
    pub fn with_threshold(threshold: Decimal) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}
