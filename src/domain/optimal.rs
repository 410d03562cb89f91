//! Theoretically-optimal trade generation under perfect foresight.
//!
//! For each date except the last, the target position entering that date is set
//! from the known move to the next date: +lot on an up move, -lot on a down
//! move, and the previous target is held on a flat day. The final date emits a
//! closing trade so the sequence always ends flat.
//!
//! This is a zero-cost upper bound used as a benchmark ceiling, not an
//! executable strategy.

use super::error::ForesightError;
use super::series::{PriceSeries, TradeEntry, TradeSequence};

pub const DEFAULT_LOT_SIZE: i64 = 1000;

pub fn generate_optimal_trades(
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

    let points = prices.points();
    let mut entries = Vec::with_capacity(points.len());
    let mut target = 0i64;

    for pair in points.windows(2) {
        let new_target = if pair[1].price > pair[0].price {
            lot_size
        } else if pair[1].price < pair[0].price {
            -lot_size
        } else {
            // Flat day: carry the previous target, no forced liquidation.
            target
        };
        entries.push(TradeEntry {
            date: pair[0].date,
            delta_shares: new_target - target,
        });
        target = new_target;
    }

    // No future price exists past the last date; flatten the book instead.
    entries.push(TradeEntry {
        date: points[points.len() - 1].date,
        delta_shares: -target,
    });

    Ok(TradeSequence { entries })
}
