//! Technical indicator types and implementations.
//!
//! - `IndicatorPoint`: a single point in an indicator time series
//! - `IndicatorValue`: enum for different indicator output shapes
//! - `IndicatorType`: enum for indicator identity + parameters
//! - `IndicatorSeries`: a time series of indicator values
//!
//! All indicators are pure rolling-window transforms over a price series.
//! Points before the window is satisfied are marked invalid.

pub mod sma;
pub mod bollinger;
pub mod rsi;
pub mod momentum;
pub mod macd;

pub use bollinger::calculate_bollinger;
pub use macd::{calculate_macd, calculate_macd_default};
pub use momentum::calculate_momentum;
pub use rsi::calculate_rsi;
pub use sma::calculate_sma;

use chrono::NaiveDate;
use std::fmt;

use super::series::{NamedSeries, ValuePoint};

#[derive(Debug, Clone)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub valid: bool,
    pub value: IndicatorValue,
}

#[derive(Debug, Clone)]
pub enum IndicatorValue {
    Simple(f64),
    Bollinger {
        upper: f64,
        lower: f64,
        percent_b: f64,
    },
    Macd {
        line: f64,
        signal: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndicatorType {
    Sma(usize),
    Bollinger(usize),
    Rsi(usize),
    Momentum(usize),
    Macd {
        short: usize,
        long: usize,
        signal: usize,
    },
}

#[derive(Debug, Clone)]
pub struct IndicatorSeries {
    pub indicator_type: IndicatorType,
    pub values: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// Flatten into labelled columns for reporting, skipping invalid points.
    pub fn to_named_series(&self) -> Vec<NamedSeries> {
        let mut columns: Vec<NamedSeries> = match self.indicator_type {
            IndicatorType::Bollinger(_) => vec![
                NamedSeries {
                    name: "Upper Band".into(),
                    points: Vec::new(),
                },
                NamedSeries {
                    name: "Lower Band".into(),
                    points: Vec::new(),
                },
                NamedSeries {
                    name: "%B".into(),
                    points: Vec::new(),
                },
            ],
            IndicatorType::Macd { .. } => vec![
                NamedSeries {
                    name: "MACD".into(),
                    points: Vec::new(),
                },
                NamedSeries {
                    name: "Signal".into(),
                    points: Vec::new(),
                },
            ],
            _ => vec![NamedSeries {
                name: self.indicator_type.to_string(),
                points: Vec::new(),
            }],
        };

        for point in self.values.iter().filter(|p| p.valid) {
            match point.value {
                IndicatorValue::Simple(v) => {
                    columns[0].points.push(ValuePoint {
                        date: point.date,
                        value: v,
                    });
                }
                IndicatorValue::Bollinger {
                    upper,
                    lower,
                    percent_b,
                } => {
                    for (column, v) in columns.iter_mut().zip([upper, lower, percent_b]) {
                        column.points.push(ValuePoint {
                            date: point.date,
                            value: v,
                        });
                    }
                }
                IndicatorValue::Macd { line, signal } => {
                    for (column, v) in columns.iter_mut().zip([line, signal]) {
                        column.points.push(ValuePoint {
                            date: point.date,
                            value: v,
                        });
                    }
                }
            }
        }

        columns
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Sma(window) => write!(f, "SMA({})", window),
            IndicatorType::Bollinger(window) => write!(f, "BOLLINGER({})", window),
            IndicatorType::Rsi(window) => write!(f, "RSI({})", window),
            IndicatorType::Momentum(window) => write!(f, "MOMENTUM({})", window),
            IndicatorType::Macd {
                short,
                long,
                signal,
            } => write!(f, "MACD({},{},{})", short, long, signal),
        }
    }
}
