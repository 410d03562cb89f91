//! CSV price file adapter.
//!
//! Reads one `{symbol}.csv` file per symbol from a base directory, with a
//! header and `date,price` columns. Blank price cells are gaps: they are
//! forward-filled, and leading gaps are backward-filled from the first quote,
//! so returned series are complete over their range.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::error::ForesightError;
use crate::domain::series::{PricePoint, PriceSeries};
use crate::ports::data_port::PricePort;

pub struct CsvPriceAdapter {
    base_path: PathBuf,
}

impl CsvPriceAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }

    fn read_symbol(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceSeries, ForesightError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| ForesightError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut rows: Vec<(NaiveDate, Option<f64>)> = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| ForesightError::Data {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;

            let date_str = record.get(0).ok_or_else(|| ForesightError::Data {
                reason: format!("missing date column in {}", path.display()),
            })?;
            let date =
                NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| ForesightError::Data {
                    reason: format!("invalid date '{}' in {}: {}", date_str, path.display(), e),
                })?;

            if date < start_date || date > end_date {
                continue;
            }

            let price_field = record.get(1).ok_or_else(|| ForesightError::Data {
                reason: format!("missing price column in {}", path.display()),
            })?;
            let price = if price_field.trim().is_empty() {
                None
            } else {
                Some(
                    price_field
                        .trim()
                        .parse::<f64>()
                        .map_err(|e| ForesightError::Data {
                            reason: format!(
                                "invalid price '{}' in {}: {}",
                                price_field,
                                path.display(),
                                e
                            ),
                        })?,
                )
            };

            rows.push((date, price));
        }

        rows.sort_by_key(|&(date, _)| date);
        let points = fill_gaps(symbol, rows)?;
        PriceSeries::new(symbol.to_string(), points)
    }
}

/// Forward-fill gaps, then backward-fill any leading gap from the first quote.
fn fill_gaps(
    symbol: &str,
    rows: Vec<(NaiveDate, Option<f64>)>,
) -> Result<Vec<PricePoint>, ForesightError> {
    let first_price = rows.iter().find_map(|&(_, price)| price);
    let Some(first_price) = first_price else {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        return Err(ForesightError::Data {
            reason: format!("no usable prices for {}", symbol),
        });
    };

    let mut last = first_price;
    Ok(rows
        .into_iter()
        .map(|(date, price)| {
            if let Some(p) = price {
                last = p;
            }
            PricePoint { date, price: last }
        })
        .collect())
}

impl PricePort for CsvPriceAdapter {
    fn get_prices(
        &self,
        symbols: &[String],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<HashMap<String, PriceSeries>, ForesightError> {
        let mut out = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            let series = self.read_symbol(symbol, start_date, end_date)?;
            out.insert(symbol.clone(), series);
        }
        Ok(out)
    }
}
