//! Momentum indicator.
//!
//! Momentum[i] = price[i] / price[i - window] - 1.
//! Warmup: first `window` points are invalid.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::series::PriceSeries;

pub const DEFAULT_WINDOW: usize = 14;

pub fn calculate_momentum(prices: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 || prices.is_empty() {
        return IndicatorSeries {
            indicator_type: IndicatorType::Momentum(window),
            values: Vec::new(),
        };
    }

    let points = prices.points();
    let mut values = Vec::with_capacity(points.len());

    for (i, point) in points.iter().enumerate() {
        let valid = i >= window;
        let momentum = if valid {
            point.price / points[i - window].price - 1.0
        } else {
            0.0
        };

        values.push(IndicatorPoint {
            date: point.date,
            valid,
            value: IndicatorValue::Simple(momentum),
        });
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Momentum(window),
        values,
    }
}
