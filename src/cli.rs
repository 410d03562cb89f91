//! CLI definition and dispatch.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::adapters::csv_price_adapter::CsvPriceAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::benchmark::buy_and_hold_trades;
use crate::domain::config::{build_backtest_config, validate_backtest_config, BacktestConfig};
use crate::domain::error::ForesightError;
use crate::domain::indicator::{
    bollinger, calculate_bollinger, calculate_macd_default, calculate_momentum, calculate_rsi,
    calculate_sma, momentum, rsi, sma, IndicatorSeries,
};
use crate::domain::metrics::Metrics;
use crate::domain::optimal::generate_optimal_trades;
use crate::domain::series::{NamedSeries, PriceSeries, ValuePoint};
use crate::domain::simulator::{simulate, CostModel};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::PricePort;
use crate::ports::report_port::{ChartSpec, ReportPort};

#[derive(Parser, Debug)]
#[command(name = "foresight", about = "Perfect-foresight single-asset backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the optimal strategy against the buy-and-hold benchmark
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute indicator chart data for the configured symbol
    Indicators {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Validate a backtest configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest { config, output } => run_backtest(&config, output.as_deref()),
        Command::Indicators { config, output } => run_indicators(&config, &output),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = ForesightError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn run_backtest(config_path: &Path, output_path: Option<&Path>) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_backtest_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let config = match build_backtest_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let prices = match fetch_prices(&adapter, &config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!(
        "Loaded {} trading days for {}",
        prices.len(),
        config.symbol
    );

    let costs = CostModel {
        commission: config.commission,
        impact: config.impact,
    };

    let result = (|| -> Result<(Vec<ValuePoint>, Vec<ValuePoint>), ForesightError> {
        let optimal_trades = generate_optimal_trades(&prices, config.lot_size)?;
        let optimal_values = simulate(&optimal_trades, &prices, config.start_value, &costs)?;

        let benchmark_trades = buy_and_hold_trades(&prices, config.lot_size)?;
        let benchmark_values = simulate(&benchmark_trades, &prices, config.start_value, &costs)?;

        Ok((optimal_values, benchmark_values))
    })();

    let (optimal_values, benchmark_values) = match result {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    print_metrics("Optimal", &Metrics::compute(&optimal_values));
    print_metrics("Benchmark", &Metrics::compute(&benchmark_values));

    if let Some(dir) = output_path {
        let spec = ChartSpec {
            title: "Theoretically Optimal Strategy vs Benchmark".into(),
            xlabel: "Date".into(),
            ylabel: "Portfolio Value".into(),
        };
        let series = vec![
            NamedSeries {
                name: "Optimal".into(),
                points: optimal_values,
            },
            NamedSeries {
                name: "Benchmark".into(),
                points: benchmark_values,
            },
        ];
        let path = dir.join("portfolio_values.csv");
        if let Err(e) = CsvReportAdapter::new().write_chart(&spec, &series, &path) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Wrote {}", path.display());
    }

    ExitCode::SUCCESS
}

fn run_indicators(config_path: &Path, output_path: &Path) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_backtest_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let config = match build_backtest_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let prices = match fetch_prices(&adapter, &config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let charts: [(&str, &str, IndicatorSeries, bool); 5] = [
        (
            "sma.csv",
            "SMA Indicator",
            calculate_sma(&prices, sma::DEFAULT_WINDOW),
            true,
        ),
        (
            "bollinger.csv",
            "Bollinger Bands",
            calculate_bollinger(&prices, bollinger::DEFAULT_WINDOW),
            true,
        ),
        (
            "rsi.csv",
            "RSI Indicator",
            calculate_rsi(&prices, rsi::DEFAULT_WINDOW),
            false,
        ),
        (
            "momentum.csv",
            "Momentum Indicator",
            calculate_momentum(&prices, momentum::DEFAULT_WINDOW),
            false,
        ),
        (
            "macd.csv",
            "MACD Indicator",
            calculate_macd_default(&prices),
            false,
        ),
    ];

    let report = CsvReportAdapter::new();
    for (file_name, title, indicator, with_price) in charts {
        let mut series = Vec::new();
        if with_price {
            series.push(price_series(&prices));
        }
        series.extend(indicator.to_named_series());

        let spec = ChartSpec {
            title: title.into(),
            xlabel: "Date".into(),
            ylabel: "Value".into(),
        };
        let path = output_path.join(file_name);
        if let Err(e) = report.write_chart(&spec, &series, &path) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Wrote {}", path.display());
    }

    ExitCode::SUCCESS
}

fn run_validate(config_path: &Path) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    match validate_backtest_config(&adapter) {
        Ok(()) => {
            println!("{}: configuration is valid", config_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn fetch_prices(
    adapter: &FileConfigAdapter,
    config: &BacktestConfig,
) -> Result<PriceSeries, ForesightError> {
    let prices_path =
        adapter
            .get_string("data", "prices_path")
            .ok_or_else(|| ForesightError::ConfigMissing {
                section: "data".into(),
                key: "prices_path".into(),
            })?;

    let port = CsvPriceAdapter::new(PathBuf::from(prices_path));
    let mut series = port.get_prices(
        std::slice::from_ref(&config.symbol),
        config.start_date,
        config.end_date,
    )?;
    series
        .remove(&config.symbol)
        .ok_or_else(|| ForesightError::Data {
            reason: format!("no price series returned for {}", config.symbol),
        })
}

fn price_series(prices: &PriceSeries) -> NamedSeries {
    NamedSeries {
        name: "Price".into(),
        points: prices
            .points()
            .iter()
            .map(|p| ValuePoint {
                date: p.date,
                value: p.price,
            })
            .collect(),
    }
}

fn print_metrics(label: &str, metrics: &Metrics) {
    println!("{label}:");
    println!("  terminal value:      {:.2}", metrics.terminal_value);
    println!("  cumulative return:   {:.6}", metrics.cumulative_return);
    println!("  avg daily return:    {:.6}", metrics.avg_daily_return);
    println!("  stddev daily return: {:.6}", metrics.stddev_daily_return);
}
