//! Price data access port trait.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::error::ForesightError;
use crate::domain::series::PriceSeries;

/// Source of trading-day-indexed price history. Implementations fill gaps
/// (forward then backward) before returning, so the domain can treat every
/// series as complete over its range.
pub trait PricePort {
    fn get_prices(
        &self,
        symbols: &[String],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<HashMap<String, PriceSeries>, ForesightError>;
}
