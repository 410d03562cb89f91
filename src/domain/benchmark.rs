//! Benchmark trade sequence: buy one lot on the first date and hold.

use super::error::ForesightError;
use super::series::{PriceSeries, TradeEntry, TradeSequence};

pub fn buy_and_hold_trades(
    prices: &PriceSeries,
    lot_size: i64,
) -> Result<TradeSequence, ForesightError> {
    if prices.is_empty() {
        return Err(ForesightError::EmptyInput);
    }
    if lot_size <= 0 {
        return Err(ForesightError::InvalidConfig {
            reason: format!("lot_size must be positive, got {lot_size}"),
        });
    }

    let entries = prices
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| TradeEntry {
            date: point.date,
            delta_shares: if i == 0 { lot_size } else { 0 },
        })
        .collect();

    Ok(TradeSequence { entries })
}
