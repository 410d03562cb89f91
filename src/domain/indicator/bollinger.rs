//! Bollinger Bands indicator.
//!
//! - Middle: SMA over `window` prices
//! - Upper: middle + 2 x StdDev
//! - Lower: middle - 2 x StdDev
//! - %B: (price - lower) / (upper - lower)
//!
//! StdDev is the sample standard deviation (divides by N-1).
//! Warmup: first (window-1) points are invalid.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::series::PriceSeries;

pub const DEFAULT_WINDOW: usize = 20;
const STDDEV_MULT: f64 = 2.0;

pub fn calculate_bollinger(prices: &PriceSeries, window: usize) -> IndicatorSeries {
    if window < 2 || prices.is_empty() {
        return IndicatorSeries {
            indicator_type: IndicatorType::Bollinger(window),
            values: Vec::new(),
        };
    }

    let points = prices.points();
    let warmup = window - 1;
    let mut values = Vec::with_capacity(points.len());

    for (i, point) in points.iter().enumerate() {
        let valid = i >= warmup;

        let (upper, lower, percent_b) = if valid {
            let slice = &points[i + 1 - window..=i];
            let mean = slice.iter().map(|p| p.price).sum::<f64>() / window as f64;
            let variance = slice
                .iter()
                .map(|p| {
                    let diff = p.price - mean;
                    diff * diff
                })
                .sum::<f64>()
                / (window - 1) as f64;
            let stddev = variance.sqrt();

            let upper = mean + STDDEV_MULT * stddev;
            let lower = mean - STDDEV_MULT * stddev;
            let percent_b = (point.price - lower) / (upper - lower);
            (upper, lower, percent_b)
        } else {
            (0.0, 0.0, 0.0)
        };

        values.push(IndicatorPoint {
            date: point.date,
            valid,
            value: IndicatorValue::Bollinger {
                upper,
                lower,
                percent_b,
            },
        });
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Bollinger(window),
        values,
    }
}
