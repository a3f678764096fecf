//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::alphavantage_adapter::AlphaVantageAdapter;
use crate::adapters::csv_adapter::CsvSymbolCatalog;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::chart::RenderedChart;
use crate::domain::chart_svg::escape_xml;
use crate::domain::config::AppConfig;
use crate::domain::error::StockChartError;
use crate::domain::request::{ChartRequest, build_chart};
use crate::ports::symbol_port::SymbolCatalog;

#[derive(Parser, Debug)]
#[command(name = "stockchart", about = "Stock price charts from Alpha Vantage data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web server
    Serve {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the symbols offered by the form
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Render one chart without starting the server
    Chart {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        begin: String,
        #[arg(long)]
        end: String,
        #[arg(long, default_value = "TIME_SERIES_DAILY")]
        function: String,
        #[arg(long, default_value = "bar")]
        chart_type: String,
        /// Write a standalone HTML page here instead of printing the fragment
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Serve { config } => run_serve(&config),
        Command::ListSymbols { config } => run_list_symbols(&config),
        Command::Chart {
            config,
            symbol,
            begin,
            end,
            function,
            chart_type,
            output,
        } => {
            let request = ChartRequest::new(symbol, chart_type, &function, begin, end);
            run_chart(&config, &request, output.as_deref())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_line(&err));
            ExitCode::from(&err)
        }
    }
}

fn failure_line(err: &StockChartError) -> String {
    format!("error: {err}")
}

pub fn load_config(path: &Path) -> Result<AppConfig, StockChartError> {
    let file = FileConfigAdapter::from_file(path).map_err(|e| StockChartError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;
    AppConfig::from_port(&file)
}

fn run_list_symbols(config_path: &Path) -> Result<(), StockChartError> {
    let config = load_config(config_path)?;
    let catalog = CsvSymbolCatalog::new(config.catalog_path);
    for symbol in catalog.load_symbols()? {
        println!("{symbol}");
    }
    Ok(())
}

pub fn standalone_page(title: &str, chart: &RenderedChart) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape_xml(title),
        chart.as_str()
    )
}

fn run_chart(
    config_path: &Path,
    request: &ChartRequest,
    output: Option<&Path>,
) -> Result<(), StockChartError> {
    let config = load_config(config_path)?;
    let market = AlphaVantageAdapter::new(&config.api)?;
    let chart = build_chart(&market, request)?;

    match output {
        Some(path) => {
            let title = format!("{} {}", request.symbol, request.function);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, standalone_page(&title, &chart))?;
            info!("chart written to {}", path.display());
        }
        None => println!("{}", chart.as_str()),
    }
    Ok(())
}

fn run_serve(config_path: &Path) -> Result<(), StockChartError> {
    #[cfg(feature = "web")]
    {
        use crate::adapters::web::{AppState, build_router};
        use crate::ports::market_data_port::MarketDataPort;
        use std::sync::Arc;

        info!("loading config from {}", config_path.display());
        let config = load_config(config_path)?;

        let market_data: Arc<dyn MarketDataPort + Send + Sync> =
            Arc::new(AlphaVantageAdapter::new(&config.api)?);
        let state = AppState {
            catalog: Arc::new(CsvSymbolCatalog::new(config.catalog_path.clone())),
            market_data: Arc::clone(&market_data),
        };
        let router = build_router(state);

        info!("starting web server on {}", config.listen);
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(async {
            let listener = tokio::net::TcpListener::bind(config.listen).await?;
            axum::serve(listener, router).await
        })?;

        // the blocking http client must not be dropped on a runtime thread
        drop(runtime);
        drop(market_data);
        Ok(())
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = config_path;
        Err(StockChartError::ConfigInvalid {
            section: "web".to_string(),
            key: "feature".to_string(),
            reason: "stockchart was built without the web feature".to_string(),
        })
    }
}
