//! Simple Moving Average indicator.
//!
//! SMA[i] = mean of the last `window` prices.
//! Warmup: first (window-1) points are invalid.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::series::PriceSeries;

pub const DEFAULT_WINDOW: usize = 20;

pub fn calculate_sma(prices: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 || prices.is_empty() {
        return IndicatorSeries {
            indicator_type: IndicatorType::Sma(window),
            values: Vec::new(),
        };
    }

    let points = prices.points();
    let mut values = Vec::with_capacity(points.len());
    let mut window_sum = 0.0;

    for (i, point) in points.iter().enumerate() {
        window_sum += point.price;
        if i >= window {
            window_sum -= points[i - window].price;
        }

        let valid = i >= window - 1;
        let sma = if valid { window_sum / window as f64 } else { 0.0 };

        values.push(IndicatorPoint {
            date: point.date,
            valid,
            value: IndicatorValue::Simple(sma),
        });
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Sma(window),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::PricePoint;
    use chrono::NaiveDate;

    fn make_series(prices: &[f64]) -> PriceSeries {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                date: NaiveDate::from_ymd_opt(2024, 1, (i + 1) as u32).unwrap(),
                price,
            })
            .collect();
        PriceSeries::new("TEST".into(), points).unwrap()
    }

    #[test]
    fn sma_warmup() {
        let prices = make_series(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let series = calculate_sma(&prices, 3);

        assert!(!series.values[0].valid);
        assert!(!series.values[1].valid);
        assert!(series.values[2].valid);
        assert!(series.values[3].valid);
        assert!(series.values[4].valid);
    }

    #[test]
    fn sma_rolling_mean() {
        let prices = make_series(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let series = calculate_sma(&prices, 3);

        let expected = [20.0, 30.0, 40.0];
        for (point, want) in series.values[2..].iter().zip(expected) {
            if let IndicatorValue::Simple(v) = point.value {
                assert!((v - want).abs() < 1e-10);
            } else {
                panic!("Expected Simple value");
            }
        }
    }

    #[test]
    fn sma_window_1_is_identity() {
        let prices = make_series(&[10.0, 20.0, 30.0]);
        let series = calculate_sma(&prices, 1);

        for (point, price) in series.values.iter().zip([10.0, 20.0, 30.0]) {
            assert!(point.valid);
            if let IndicatorValue::Simple(v) = point.value {
                assert!((v - price).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn sma_constant_prices() {
        let prices = make_series(&[100.0, 100.0, 100.0, 100.0]);
        let series = calculate_sma(&prices, 2);

        for point in series.values.iter().filter(|p| p.valid) {
            if let IndicatorValue::Simple(v) = point.value {
                assert!((v - 100.0).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn sma_indicator_type() {
        let prices = make_series(&[10.0, 20.0]);
        let series = calculate_sma(&prices, 20);
        assert_eq!(series.indicator_type, IndicatorType::Sma(20));
    }

    #[test]
    fn sma_empty_and_zero_window() {
        let empty = PriceSeries::new("TEST".into(), Vec::new()).unwrap();
        assert!(calculate_sma(&empty, 3).values.is_empty());

        let prices = make_series(&[10.0, 20.0]);
        assert!(calculate_sma(&prices, 0).values.is_empty());
    }
}
