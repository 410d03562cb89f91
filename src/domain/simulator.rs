//! Portfolio simulation: replay a trade sequence into holdings, cash, and
//! daily portfolio value.
//!
//! The simulation is a strict left-to-right fold over the price series with an
//! explicit accumulator. Cash debits and holdings updates on date d depend on
//! the cumulative state through d-1, so no step may be reordered. Failure is
//! atomic: either a full value series is produced or nothing is.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::error::ForesightError;
use super::series::{PriceSeries, TradeSequence, ValuePoint};

/// Per-trade transaction costs.
///
/// `commission` is a fixed currency fee charged once per non-zero-trade day.
/// `impact` is a fractional slippage cost applied to the trade notional.
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    pub commission: f64,
    pub impact: f64,
}

impl CostModel {
    pub fn zero() -> Self {
        CostModel {
            commission: 0.0,
            impact: 0.0,
        }
    }
}

/// Running holdings accumulator, local to one simulation call.
#[derive(Debug, Clone, PartialEq)]
struct HoldingsState {
    shares: i64,
    cash: f64,
}

impl HoldingsState {
    fn new(start_value: f64) -> Self {
        HoldingsState {
            shares: 0,
            cash: start_value,
        }
    }

    fn apply_trade(&mut self, delta_shares: i64, price: f64, costs: &CostModel) {
        if delta_shares == 0 {
            return;
        }
        let notional = delta_shares as f64 * price;
        let impact_cost = notional.abs() * costs.impact;
        self.cash -= notional + impact_cost + costs.commission;
        self.shares += delta_shares;
    }

    fn market_value(&self, price: f64) -> f64 {
        self.shares as f64 * price + self.cash
    }
}

/// Replay `trades` against `prices` and return the daily portfolio value.
///
/// Every trade date must have a matching price; days without a trade entry
/// carry holdings and cash forward unchanged.
pub fn simulate(
    trades: &TradeSequence,
    prices: &PriceSeries,
    start_value: f64,
    cost_model: &CostModel,
) -> Result<Vec<ValuePoint>, ForesightError> {
    if trades.is_empty() || prices.is_empty() {
        return Err(ForesightError::EmptyInput);
    }
    if start_value < 0.0 {
        return Err(ForesightError::InvalidConfig {
            reason: format!("start_value must be non-negative, got {start_value}"),
        });
    }
    if cost_model.commission < 0.0 || cost_model.impact < 0.0 {
        return Err(ForesightError::InvalidConfig {
            reason: format!(
                "cost model must be non-negative, got commission {} impact {}",
                cost_model.commission, cost_model.impact
            ),
        });
    }

    let mut deltas: HashMap<NaiveDate, i64> = HashMap::with_capacity(trades.len());
    for entry in &trades.entries {
        *deltas.entry(entry.date).or_insert(0) += entry.delta_shares;
    }

    let mut state = HoldingsState::new(start_value);
    let mut values = Vec::with_capacity(prices.len());

    for point in prices.points() {
        if let Some(delta) = deltas.remove(&point.date) {
            state.apply_trade(delta, point.price, cost_model);
        }
        values.push(ValuePoint {
            date: point.date,
            value: state.market_value(point.price),
        });
    }

    // Any trade date left over never matched a price.
    if let Some(date) = deltas.keys().min().copied() {
        return Err(ForesightError::DataAlignment { date });
    }

    Ok(values)
}
