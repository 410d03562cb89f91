//! MACD (Moving Average Convergence Divergence) indicator.
//!
//! Line = EWM(short) - EWM(long)
//! Signal = EWM(line, signal span)
//!
//! The exponentially-weighted means use span smoothing (k = 2/(span+1)) seeded
//! with the first observation, so every point carries a value and none are
//! marked invalid.
//!
//! Default parameters: short=12, long=26, signal=9.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::series::PriceSeries;

pub const DEFAULT_SHORT: usize = 12;
pub const DEFAULT_LONG: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

pub fn calculate_macd(
    prices: &PriceSeries,
    short: usize,
    long: usize,
    signal_span: usize,
) -> IndicatorSeries {
    let indicator_type = IndicatorType::Macd {
        short,
        long,
        signal: signal_span,
    };

    if prices.is_empty() || short == 0 || long == 0 || signal_span == 0 {
        return IndicatorSeries {
            indicator_type,
            values: Vec::new(),
        };
    }

    let closes: Vec<f64> = prices.points().iter().map(|p| p.price).collect();
    let ewm_short = ewm(&closes, short);
    let ewm_long = ewm(&closes, long);

    let line: Vec<f64> = ewm_short
        .iter()
        .zip(&ewm_long)
        .map(|(s, l)| s - l)
        .collect();
    let signal = ewm(&line, signal_span);

    let values = prices
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| IndicatorPoint {
            date: point.date,
            valid: true,
            value: IndicatorValue::Macd {
                line: line[i],
                signal: signal[i],
            },
        })
        .collect();

    IndicatorSeries {
        indicator_type,
        values,
    }
}

pub fn calculate_macd_default(prices: &PriceSeries) -> IndicatorSeries {
    calculate_macd(prices, DEFAULT_SHORT, DEFAULT_LONG, DEFAULT_SIGNAL)
}

/// Exponentially-weighted mean seeded with the first value.
fn ewm(values: &[f64], span: usize) -> Vec<f64> {
    let k = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut ema = 0.0;
    for (i, &v) in values.iter().enumerate() {
        ema = if i == 0 { v } else { v * k + ema * (1.0 - k) };
        out.push(ema);
    }
    out
}
