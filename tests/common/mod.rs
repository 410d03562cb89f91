#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use foresight::domain::error::ForesightError;
use foresight::domain::series::{PricePoint, PriceSeries, TradeEntry, TradeSequence};
use foresight::ports::data_port::PricePort;

pub struct MockPricePort {
    pub data: HashMap<String, PriceSeries>,
    pub errors: HashMap<String, String>,
}

impl MockPricePort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.data.insert(series.symbol().to_string(), series);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl PricePort for MockPricePort {
    fn get_prices(
        &self,
        symbols: &[String],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<HashMap<String, PriceSeries>, ForesightError> {
        let mut out = HashMap::new();
        for symbol in symbols {
            if let Some(reason) = self.errors.get(symbol) {
                return Err(ForesightError::Data {
                    reason: reason.clone(),
                });
            }
            let points = self
                .data
                .get(symbol)
                .map(|series| {
                    series
                        .points()
                        .iter()
                        .filter(|p| p.date >= start_date && p.date <= end_date)
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            out.insert(symbol.clone(), PriceSeries::new(symbol.clone(), points)?);
        }
        Ok(out)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_series(symbol: &str, start: NaiveDate, prices: &[f64]) -> PriceSeries {
    let points = prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint {
            date: start + chrono::Duration::days(i as i64),
            price,
        })
        .collect();
    PriceSeries::new(symbol.to_string(), points).unwrap()
}

pub fn make_trades(prices: &PriceSeries, deltas: &[i64]) -> TradeSequence {
    TradeSequence {
        entries: prices
            .points()
            .iter()
            .zip(deltas)
            .map(|(p, &delta_shares)| TradeEntry {
                date: p.date,
                delta_shares,
            })
            .collect(),
    }
}
