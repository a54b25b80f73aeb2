//! Series CLI - Command-line interface for Health Series
//!
//! Commands:
//! - build: Normalize a raw metric payload and print the filtered series
//! - inspect: Report gaps and date coverage of a raw metric payload
//! - schema: Print the normalized field list of a metric

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use health_series::clock::{Clock, FixedClock, SystemClock};
use health_series::{ActiveWindow, Config, Metric, SeriesError, SeriesProcessor, SERIES_VERSION};

/// Series - chart-ready health metric series from raw backend rows
#[derive(Parser)]
#[command(name = "series")]
#[command(version = SERIES_VERSION)]
#[command(about = "Normalize and range-filter daily health metrics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a raw payload and print the series visible in the window
    Build {
        /// Metric the payload holds
        #[arg(short, long)]
        metric: Metric,

        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        #[command(flatten)]
        window: WindowArgs,

        /// Pin "today" (YYYY-MM-DD) instead of reading the system clock
        #[arg(long)]
        today: Option<String>,

        /// Output format
        #[arg(long, default_value = "json")]
        output_format: OutputFormat,
    },

    /// Report gaps and date coverage of a raw payload
    Inspect {
        /// Metric the payload holds
        #[arg(short, long)]
        metric: Metric,

        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized field list of a metric
    Schema {
        /// Metric to describe
        metric: Metric,
    },
}

#[derive(Args)]
struct WindowArgs {
    /// Keep the last N days
    #[arg(long, conflicts_with_all = ["all", "start", "end"])]
    days: Option<u32>,

    /// Keep every record
    #[arg(long, conflicts_with_all = ["start", "end"])]
    all: bool,

    /// First day to keep (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// Last day to keep (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,
}

impl WindowArgs {
    fn resolve(&self, config: &Config) -> Result<ActiveWindow, SeriesError> {
        if self.start.is_some() || self.end.is_some() {
            return ActiveWindow::checked_between(self.start.as_deref(), self.end.as_deref());
        }
        if self.all {
            return Ok(ActiveWindow::unbounded());
        }
        Ok(self
            .days
            .map(ActiveWindow::last_days)
            .unwrap_or_else(|| config.default_window.clone()))
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Newline-delimited JSON (one record per line)
    Ndjson,
    /// JSON array of records
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_logging(&config);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e)).unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &Config) {
    // stdout carries the series, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, config: &Config) -> Result<(), SeriesCliError> {
    match cli.command {
        Commands::Build {
            metric,
            input,
            window,
            today,
            output_format,
        } => {
            let window = window.resolve(config)?;
            cmd_build(metric, &input, window, today.as_deref(), output_format)
        }

        Commands::Inspect {
            metric,
            input,
            json,
        } => cmd_inspect(metric, &input, json),

        Commands::Schema { metric } => {
            cmd_schema(metric);
            Ok(())
        }
    }
}

fn cmd_build(
    metric: Metric,
    input: &Path,
    window: ActiveWindow,
    today: Option<&str>,
    output_format: OutputFormat,
) -> Result<(), SeriesCliError> {
    let raw_json = read_input(input)?;

    let processor = match today {
        Some(day) => SeriesProcessor::with_clock(window, FixedClock::parse(day)?),
        None => SeriesProcessor::with_clock(window, SystemClock),
    };
    tracing::info!(
        %metric,
        window = %processor.window().describe(),
        today = %today.map(str::to_string).unwrap_or_else(|| SystemClock.today().to_string()),
        "building series"
    );

    let records = processor.process(metric, &raw_json)?;
    print!("{}", format_output(&records, &output_format)?);

    Ok(())
}

fn cmd_inspect(metric: Metric, input: &Path, json: bool) -> Result<(), SeriesCliError> {
    let raw_json = read_input(input)?;
    let report = SeriesProcessor::default().inspect(metric, &raw_json)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Series Report ({})", report.metric);
        println!("=================");
        println!("Records:          {}", report.total_records);
        println!("Undated records:  {}", report.undated_records);
        println!(
            "Date span:        {} .. {}",
            report.first_date.as_deref().unwrap_or("-"),
            report.last_date.as_deref().unwrap_or("-")
        );
        println!("Coverage:         {:.1}%", report.coverage() * 100.0);

        if !report.absent_values.is_empty() {
            println!("\nAbsent values:");
            for (field, count) in &report.absent_values {
                println!("  - {}: {}", field, count);
            }
        }
    }

    Ok(())
}

fn cmd_schema(metric: Metric) {
    println!("Normalized {} record", metric);
    println!();
    for field in metric.fields() {
        println!("- {}", field);
    }
    match metric {
        Metric::Steps => {
            println!();
            println!("steps_pct_goal is always a number (0 when steps or a positive goal is missing)");
        }
        Metric::Exercise => {
            println!();
            println!("Durations are minutes, converted from the *_seconds input fields");
            println!("exercise_pct_goal is always a number (0 when total or a positive goal is missing)");
        }
        _ => {}
    }
}

// Helper functions

fn read_input(input: &Path) -> Result<String, SeriesCliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn format_output(records: &[serde_json::Value], format: &OutputFormat) -> Result<String, SeriesCliError> {
    match format {
        OutputFormat::Ndjson => {
            let mut out = String::new();
            for record in records {
                out.push_str(&serde_json::to_string(record)?);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string(records)? + "\n"),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(records)? + "\n"),
    }
}

// Error types

#[derive(Debug)]
enum SeriesCliError {
    Io(io::Error),
    Series(SeriesError),
    Json(serde_json::Error),
}

impl From<io::Error> for SeriesCliError {
    fn from(e: io::Error) -> Self {
        SeriesCliError::Io(e)
    }
}

impl From<SeriesError> for SeriesCliError {
    fn from(e: SeriesError) -> Self {
        SeriesCliError::Series(e)
    }
}

impl From<serde_json::Error> for SeriesCliError {
    fn from(e: serde_json::Error) -> Self {
        SeriesCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<SeriesCliError> for CliError {
    fn from(e: SeriesCliError) -> Self {
        match e {
            SeriesCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            SeriesCliError::Series(e) => {
                let (code, hint) = match &e {
                    SeriesError::JsonError(_) => ("PARSE_ERROR", "Input must be a JSON array of daily rows"),
                    SeriesError::DateParseError(_) => ("DATE_ERROR", "Dates use the YYYY-MM-DD format"),
                    SeriesError::UnknownMetric(_) => {
                        ("UNKNOWN_METRIC", "Use one of: steps, stress, exercise, sleep, summary")
                    }
                    SeriesError::InvalidWindow(_) => ("WINDOW_ERROR", "Check --start and --end"),
                };
                CliError {
                    code: code.to_string(),
                    message: e.to_string(),
                    hint: Some(hint.to_string()),
                }
            }
            SeriesCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
        }
    }
}
