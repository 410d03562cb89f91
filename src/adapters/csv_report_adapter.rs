//! CSV chart-data report adapter.
//!
//! Persists named series as chart data for an external plotter: a title row,
//! a header row (x-axis label plus one column per series), then one row per
//! date with values aligned by date. Cells are blank where a series has no
//! point on that date.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::error::ForesightError;
use crate::domain::series::NamedSeries;
use crate::ports::report_port::{ChartSpec, ReportPort};

pub struct CsvReportAdapter;

impl CsvReportAdapter {
    pub fn new() -> Self {
        CsvReportAdapter
    }
}

impl Default for CsvReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for CsvReportAdapter {
    fn write_chart(
        &self,
        spec: &ChartSpec,
        series: &[NamedSeries],
        output_path: &Path,
    ) -> Result<(), ForesightError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(output_path)
            .map_err(|e| ForesightError::Data {
                reason: format!("failed to open {}: {}", output_path.display(), e),
            })?;

        let write_err = |e: csv::Error| ForesightError::Data {
            reason: format!("failed to write {}: {}", output_path.display(), e),
        };

        writer.write_record([spec.title.as_str()]).map_err(write_err)?;

        let mut header = vec![spec.xlabel.clone()];
        header.extend(series.iter().map(|s| s.name.clone()));
        writer.write_record(&header).map_err(write_err)?;

        let dates: BTreeSet<NaiveDate> = series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.date))
            .collect();

        let columns: Vec<HashMap<NaiveDate, f64>> = series
            .iter()
            .map(|s| s.points.iter().map(|p| (p.date, p.value)).collect())
            .collect();

        for date in dates {
            let mut row = vec![date.format("%Y-%m-%d").to_string()];
            for column in &columns {
                row.push(
                    column
                        .get(&date)
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                );
            }
            writer.write_record(&row).map_err(write_err)?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::ValuePoint;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_spec() -> ChartSpec {
        ChartSpec {
            title: "Optimal Strategy vs Benchmark".into(),
            xlabel: "Date".into(),
            ylabel: "Portfolio Value".into(),
        }
    }

    fn make_series(name: &str, values: &[(NaiveDate, f64)]) -> NamedSeries {
        NamedSeries {
            name: name.to_string(),
            points: values
                .iter()
                .map(|&(date, value)| ValuePoint { date, value })
                .collect(),
        }
    }

    #[test]
    fn writes_title_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chart.csv");

        let series = vec![
            make_series(
                "Optimal",
                &[(date(2008, 1, 2), 100000.0), (date(2008, 1, 3), 101000.0)],
            ),
            make_series(
                "Benchmark",
                &[(date(2008, 1, 2), 100000.0), (date(2008, 1, 3), 100500.0)],
            ),
        ];

        CsvReportAdapter::new()
            .write_chart(&sample_spec(), &series, &path)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Optimal Strategy vs Benchmark");
        assert_eq!(lines[1], "Date,Optimal,Benchmark");
        assert_eq!(lines[2], "2008-01-02,100000,100000");
        assert_eq!(lines[3], "2008-01-03,101000,100500");
    }

    #[test]
    fn blank_cells_for_missing_dates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chart.csv");

        let series = vec![
            make_series("Price", &[(date(2008, 1, 2), 40.0), (date(2008, 1, 3), 41.0)]),
            make_series("SMA(2)", &[(date(2008, 1, 3), 40.5)]),
        ];

        CsvReportAdapter::new()
            .write_chart(&sample_spec(), &series, &path)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[2], "2008-01-02,40,");
        assert_eq!(lines[3], "2008-01-03,41,40.5");
    }

    #[test]
    fn empty_series_writes_only_preamble() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chart.csv");

        CsvReportAdapter::new()
            .write_chart(&sample_spec(), &[], &path)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Date");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let series = vec![make_series("X", &[(date(2008, 1, 2), 1.0)])];
        let result = CsvReportAdapter::new().write_chart(
            &sample_spec(),
            &series,
            Path::new("/nonexistent/dir/chart.csv"),
        );
        assert!(result.is_err());
    }
}
