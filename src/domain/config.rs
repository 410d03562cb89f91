//! Backtest configuration: construction from a config port and validation.

use chrono::NaiveDate;

use super::error::ForesightError;
use super::optimal::DEFAULT_LOT_SIZE;
use crate::ports::config_port::ConfigPort;

pub const DEFAULT_SYMBOL: &str = "JPM";
pub const DEFAULT_START_VALUE: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BacktestConfig {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_value: f64,
    pub commission: f64,
    pub impact: f64,
    pub lot_size: i64,
}

pub fn build_backtest_config(config: &dyn ConfigPort) -> Result<BacktestConfig, ForesightError> {
    let start_str =
        config
            .get_string("backtest", "start_date")
            .ok_or_else(|| ForesightError::ConfigMissing {
                section: "backtest".into(),
                key: "start_date".into(),
            })?;
    let end_str =
        config
            .get_string("backtest", "end_date")
            .ok_or_else(|| ForesightError::ConfigMissing {
                section: "backtest".into(),
                key: "end_date".into(),
            })?;

    Ok(BacktestConfig {
        symbol: config
            .get_string("backtest", "symbol")
            .unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
        start_date: parse_date(&start_str, "start_date")?,
        end_date: parse_date(&end_str, "end_date")?,
        start_value: config.get_double("backtest", "start_value", DEFAULT_START_VALUE),
        commission: config.get_double("backtest", "commission", 0.0),
        impact: config.get_double("backtest", "impact", 0.0),
        lot_size: config.get_int("backtest", "lot_size", DEFAULT_LOT_SIZE),
    })
}

pub fn validate_backtest_config(config: &dyn ConfigPort) -> Result<(), ForesightError> {
    validate_start_value(config)?;
    validate_costs(config)?;
    validate_lot_size(config)?;
    validate_dates(config)?;
    validate_symbol(config)?;
    Ok(())
}

fn validate_start_value(config: &dyn ConfigPort) -> Result<(), ForesightError> {
    let value = config.get_double("backtest", "start_value", DEFAULT_START_VALUE);
    if value < 0.0 {
        return Err(ForesightError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "start_value".to_string(),
            reason: "start_value must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_costs(config: &dyn ConfigPort) -> Result<(), ForesightError> {
    let commission = config.get_double("backtest", "commission", 0.0);
    if commission < 0.0 {
        return Err(ForesightError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "commission".to_string(),
            reason: "commission must be non-negative".to_string(),
        });
    }
    let impact = config.get_double("backtest", "impact", 0.0);
    if impact < 0.0 {
        return Err(ForesightError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "impact".to_string(),
            reason: "impact must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_lot_size(config: &dyn ConfigPort) -> Result<(), ForesightError> {
    let value = config.get_int("backtest", "lot_size", DEFAULT_LOT_SIZE);
    if value <= 0 {
        return Err(ForesightError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "lot_size".to_string(),
            reason: "lot_size must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_dates(config: &dyn ConfigPort) -> Result<(), ForesightError> {
    let start_str = config.get_string("backtest", "start_date");
    let end_str = config.get_string("backtest", "end_date");

    let start_date = match start_str {
        Some(s) => parse_date(&s, "start_date")?,
        None => {
            return Err(ForesightError::ConfigMissing {
                section: "backtest".to_string(),
                key: "start_date".to_string(),
            });
        }
    };
    let end_date = match end_str {
        Some(s) => parse_date(&s, "end_date")?,
        None => {
            return Err(ForesightError::ConfigMissing {
                section: "backtest".to_string(),
                key: "end_date".to_string(),
            });
        }
    };

    if start_date >= end_date {
        return Err(ForesightError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "start_date".to_string(),
            reason: "start_date must be before end_date".to_string(),
        });
    }
    Ok(())
}

fn validate_symbol(config: &dyn ConfigPort) -> Result<(), ForesightError> {
    match config.get_string("backtest", "symbol") {
        Some(s) if s.trim().is_empty() => Err(ForesightError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "symbol".to_string(),
            reason: "symbol must not be blank".to_string(),
        }),
        _ => Ok(()),
    }
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, ForesightError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ForesightError::ConfigInvalid {
        section: "backtest".to_string(),
        key: field.to_string(),
        reason: format!("invalid {} format, expected YYYY-MM-DD", field),
    })
}
