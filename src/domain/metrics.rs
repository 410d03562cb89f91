//! Summary statistics for a portfolio value series.

use super::series::ValuePoint;

#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub terminal_value: f64,
    pub cumulative_return: f64,
    pub avg_daily_return: f64,
    pub stddev_daily_return: f64,
}

impl Metrics {
    pub fn compute(values: &[ValuePoint]) -> Self {
        let terminal_value = values.last().map(|p| p.value).unwrap_or(0.0);
        let initial_value = values.first().map(|p| p.value).unwrap_or(0.0);

        let cumulative_return = if initial_value > 0.0 {
            terminal_value / initial_value - 1.0
        } else {
            0.0
        };

        let daily_returns: Vec<f64> = values
            .windows(2)
            .filter(|pair| pair[0].value != 0.0)
            .map(|pair| pair[1].value / pair[0].value - 1.0)
            .collect();

        let avg_daily_return = if daily_returns.is_empty() {
            0.0
        } else {
            daily_returns.iter().sum::<f64>() / daily_returns.len() as f64
        };

        // Sample standard deviation.
        let stddev_daily_return = if daily_returns.len() < 2 {
            0.0
        } else {
            let variance = daily_returns
                .iter()
                .map(|r| {
                    let diff = r - avg_daily_return;
                    diff * diff
                })
                .sum::<f64>()
                / (daily_returns.len() - 1) as f64;
            variance.sqrt()
        };

        Metrics {
            terminal_value,
            cumulative_return,
            avg_daily_return,
            stddev_daily_return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_values(values: &[f64]) -> Vec<ValuePoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| ValuePoint {
                date: NaiveDate::from_ymd_opt(2024, 1, (i + 1) as u32).unwrap(),
                value,
            })
            .collect()
    }

    #[test]
    fn empty_series() {
        let metrics = Metrics::compute(&[]);
        assert!((metrics.terminal_value - 0.0).abs() < f64::EPSILON);
        assert!((metrics.cumulative_return - 0.0).abs() < f64::EPSILON);
        assert!((metrics.avg_daily_return - 0.0).abs() < f64::EPSILON);
        assert!((metrics.stddev_daily_return - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn constant_series() {
        let metrics = Metrics::compute(&make_values(&[100_000.0, 100_000.0, 100_000.0]));
        assert!((metrics.terminal_value - 100_000.0).abs() < f64::EPSILON);
        assert!((metrics.cumulative_return - 0.0).abs() < f64::EPSILON);
        assert!((metrics.avg_daily_return - 0.0).abs() < f64::EPSILON);
        assert!((metrics.stddev_daily_return - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cumulative_return() {
        let metrics = Metrics::compute(&make_values(&[100_000.0, 105_000.0, 110_000.0]));
        assert!((metrics.cumulative_return - 0.1).abs() < 1e-10);
        assert!((metrics.terminal_value - 110_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn daily_return_statistics() {
        // Daily returns: +0.10, -0.10.
        let metrics = Metrics::compute(&make_values(&[100.0, 110.0, 99.0]));
        assert!((metrics.avg_daily_return - 0.0).abs() < 1e-10);

        let expected_std = ((0.1f64.powi(2) + 0.1f64.powi(2)) / 1.0).sqrt();
        assert!((metrics.stddev_daily_return - expected_std).abs() < 1e-10);
    }

    #[test]
    fn single_point_series() {
        let metrics = Metrics::compute(&make_values(&[100_000.0]));
        assert!((metrics.terminal_value - 100_000.0).abs() < f64::EPSILON);
        assert!((metrics.cumulative_return - 0.0).abs() < f64::EPSILON);
        assert!((metrics.stddev_daily_return - 0.0).abs() < f64::EPSILON);
    }
}
