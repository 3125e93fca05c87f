//! pfgraph — draw the graphic for a PF_Chart data file.
//!
//! Thin driver around `pfgraph_core`: parse arguments, set up logging,
//! validate the invocation, run the transform, hand the bundle to the
//! renderer.
//!
//! Exit codes:
//! - `0` — success
//! - `2` — input validation failure (one-line message)
//! - `6` — processing error (full diagnostic)
//! - `7` — argument-parsing usage error

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;

use pfgraph_core::bundle::{build_bundle, GraphicRequest};
use pfgraph_core::error::GraphicError;
use pfgraph_core::render::{BundleWriter, ChartRenderer};

#[derive(Parser, Debug)]
#[command(name = "pfgraph", about = "Draw the graphic for the specified PF_Chart file.")]
struct Cli {
    /// Path name of file to process.
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Path name of directory to write output file to.
    #[arg(short = 'o', long = "output-dir", default_value = "/tmp")]
    output_dir: PathBuf,

    /// Use 'time' or 'date' for x-axis labels.
    #[arg(long)]
    format: String,

    /// Draw trend lines on graphic. Can be 'no', 'data' or 'angle'.
    #[arg(short = 't', long = "trend-lines", default_value = "no")]
    trend_lines: String,

    /// Maximum number of columns to show in graph. '0' means 'all'.
    #[arg(short = 'n', long = "number-cols", default_value_t = 0)]
    number_cols: usize,

    /// Path name of file containing 'streamed' price data.
    #[arg(long)]
    prices: Option<PathBuf>,

    /// Logging level: debug, info, warning, error, critical, none.
    #[arg(short = 'l', long, default_value = "warning")]
    logging: String,

    /// Which DB user to run as. Accepted for compatibility, unused.
    #[arg(short = 'u', long, default_value = "data_updater_pg")]
    user: String,

    /// Which DB to connect to. Accepted for compatibility, unused.
    #[arg(short = 'd', long, default_value = "finance")]
    database: String,

    /// Machine name or IP of the database host. Accepted for compatibility, unused.
    #[arg(short = 'm', long, default_value = "localhost")]
    machine: String,

    /// Postgres port number for the source DB. Accepted for compatibility, unused.
    #[arg(long = "DB_port", default_value_t = 5432)]
    db_port: u16,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 7,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(level_filter(&cli.logging))
        .init();

    let request = match build_request(&cli) {
        Ok(request) => request,
        Err(err) => {
            println!("{err}");
            println!("Unable to create graphic.");
            std::process::exit(2);
        }
    };

    if let Err(err) = process(&request) {
        eprintln!("{err:?}");
        std::process::exit(6);
    }
}

/// Validate the invocation and resolve it into a request.
///
/// Failures here are user errors: a one-line message and exit code 2.
fn build_request(cli: &Cli) -> Result<GraphicRequest, GraphicError> {
    log::debug!(
        "database flags (unused): user={}, database={}, machine={}, port={}",
        cli.user,
        cli.database,
        cli.machine,
        cli.db_port
    );

    if !cli.file.exists() {
        return Err(GraphicError::InputNotFound(cli.file.clone()));
    }

    Ok(GraphicRequest {
        chart_file: cli.file.clone(),
        output_dir: cli.output_dir.clone(),
        axis_format: cli.format.parse()?,
        trend_lines: cli.trend_lines.parse()?,
        number_columns: cli.number_cols,
        prices_file: cli.prices.clone(),
    })
}

/// Run the transform and hand the bundle to the renderer.
fn process(request: &GraphicRequest) -> anyhow::Result<()> {
    let bundle = build_bundle(request)?;
    let written = BundleWriter.render(&bundle)?;
    println!("Wrote {}", written.display());
    Ok(())
}

fn level_filter(name: &str) -> LevelFilter {
    match name {
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "critical" => LevelFilter::Error,
        "none" => LevelFilter::Off,
        // unknown names fall back to the default level
        _ => LevelFilter::Warn,
    }
}
