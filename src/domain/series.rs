//! Time series primitives: prices, trades, and derived value series.

use chrono::NaiveDate;

use super::error::ForesightError;

/// A single quoted price on a trading day.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Daily price history for one symbol. Dates are strictly increasing with one
/// value per trading day; missing source data is filled before construction.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, rejecting out-of-order or duplicate dates.
    pub fn new(symbol: String, points: Vec<PricePoint>) -> Result<Self, ForesightError> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ForesightError::Data {
                    reason: format!(
                        "price dates must be strictly increasing: {} then {}",
                        pair[0].date, pair[1].date
                    ),
                });
            }
        }
        Ok(PriceSeries { symbol, points })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Price on an exact trading date, if present.
    pub fn price_on(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| self.points[i].price)
    }
}

/// Change in position on one date. A zero delta means no trade that day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeEntry {
    pub date: NaiveDate,
    pub delta_shares: i64,
}

/// Ordered position deltas, aligned 1:1 with a price series' dates.
/// Read-only once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeSequence {
    pub entries: Vec<TradeEntry>,
}

impl TradeSequence {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Running positions implied by the deltas, starting from flat.
    pub fn positions(&self) -> Vec<i64> {
        let mut held = 0i64;
        self.entries
            .iter()
            .map(|e| {
                held += e.delta_shares;
                held
            })
            .collect()
    }
}

/// A dated scalar, used for portfolio values and report series.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A labelled value series handed to the report port.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub name: String,
    pub points: Vec<ValuePoint>,
}
