//! RSI (Relative Strength Index) oscillator.
//!
//! Gains and losses are the positive/negative parts of the daily price change,
//! averaged with a simple rolling mean over `window` changes:
//!   RS = avg_gain / avg_loss
//!   RSI = 100 - (100 / (1 + RS))
//! If avg_loss == 0: RSI = 100.
//!
//! Output is bounded to [0, 100].
//! Warmup: first `window` points are invalid (a change needs two prices).

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::series::PriceSeries;

pub const DEFAULT_WINDOW: usize = 14;

pub fn calculate_rsi(prices: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 || prices.is_empty() {
        return IndicatorSeries {
            indicator_type: IndicatorType::Rsi(window),
            values: Vec::new(),
        };
    }

    let points = prices.points();
    let mut gains = Vec::with_capacity(points.len().saturating_sub(1));
    let mut losses = Vec::with_capacity(points.len().saturating_sub(1));
    for pair in points.windows(2) {
        let change = pair[1].price - pair[0].price;
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut values = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let valid = i >= window;

        let rsi = if valid {
            let slice_start = i - window;
            let avg_gain = gains[slice_start..i].iter().sum::<f64>() / window as f64;
            let avg_loss = losses[slice_start..i].iter().sum::<f64>() / window as f64;
            if avg_loss == 0.0 {
                100.0
            } else {
                100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
            }
        } else {
            0.0
        };

        values.push(IndicatorPoint {
            date: point.date,
            valid,
            value: IndicatorValue::Simple(rsi),
        });
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Rsi(window),
        values,
    }
}
