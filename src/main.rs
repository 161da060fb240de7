use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use car_sales::{FileReader, OnError, Registry, Report, DEFAULT_PATH};

/// Prints monthly and grand total car sales from `car_sales.csv`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// What to do with a data row that cannot be parsed
    #[arg(long, value_enum, default_value_t = OnError::Abort)]
    on_error: OnError,

    /// Also print each manufacturer's yearly total
    #[arg(long)]
    by_manufacturer: bool,

    /// Log filter, for example `debug` or `car_sales=trace`
    #[arg(long, env = "CAR_SALES_LOG", default_value = "warn")]
    log_level: String,
}

fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    let rows = FileReader::new(DEFAULT_PATH).read();
    let mut registry = Registry::new();
    let ingest = registry
        .ingest(rows, args.on_error)
        .with_context(|| format!("reading sales data from {DEFAULT_PATH}"))?;
    info!(
        "{} manufacturers loaded, {} rows skipped",
        ingest.added, ingest.skipped
    );

    let mut report = Report::new(&registry);
    report.by_manufacturer = args.by_manufacturer;
    print!("{report}");
    Ok(())
}
