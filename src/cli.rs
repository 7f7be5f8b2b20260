//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use crate::adapters::csv_feed_adapter::CsvFeedAdapter;
use crate::adapters::json_config_adapter;
use crate::adapters::json_snapshot_adapter::JsonSnapshotAdapter;
use crate::adapters::text_table_adapter::TextTableAdapter;
use crate::domain::error::TenenciasError;
use crate::domain::pipeline;
use crate::monitor::Monitor;
use crate::ports::connector_port::ConnectorPort;
use crate::ports::presentation_port::PresentationPort;
use crate::ports::snapshot_port::SnapshotStore;

#[derive(Parser, Debug)]
#[command(name = "tenencias", about = "Brokerage holdings monitor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Monitor holdings at a fixed refresh interval
    Run {
        /// Credentials file; created with placeholders when absent
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,
        /// CSV feed file standing in for the live connector
        #[arg(short, long)]
        feed: PathBuf,
        /// Durable end-of-day baseline file
        #[arg(short, long, default_value = "anterior.json")]
        baseline: PathBuf,
        /// Refresh interval in milliseconds
        #[arg(long, default_value_t = 2000)]
        interval_ms: u64,
        /// Stop after this many cycles (default: until disconnected)
        #[arg(long)]
        cycles: Option<u64>,
    },
    /// Run a single cycle and print the table
    Once {
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,
        #[arg(short, long)]
        feed: PathBuf,
        #[arg(short, long, default_value = "anterior.json")]
        baseline: PathBuf,
    },
    /// Print the persisted end-of-day baseline
    ShowBaseline {
        #[arg(short, long, default_value = "anterior.json")]
        baseline: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Run {
            config,
            feed,
            baseline,
            interval_ms,
            cycles,
        } => run_monitor(&config, feed, baseline, interval_ms, cycles),
        Command::Once {
            config,
            feed,
            baseline,
        } => report(run_once(&config, feed, baseline)),
        Command::ShowBaseline { baseline } => report(show_baseline(baseline)),
    }
}

fn report(result: Result<(), TenenciasError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(&e)
        }
    }
}

fn run_monitor(
    config: &PathBuf,
    feed: PathBuf,
    baseline: PathBuf,
    interval_ms: u64,
    cycles: Option<u64>,
) -> ExitCode {
    let credentials = match json_config_adapter::load_or_create(config) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(&e);
        }
    };

    let mut monitor = Monitor::new(
        Box::new(CsvFeedAdapter::new(feed)),
        Box::new(JsonSnapshotAdapter::new(baseline)),
        Box::new(TextTableAdapter::stdout()),
        credentials.comitente,
    );
    monitor.run(Duration::from_millis(interval_ms), cycles);

    if monitor.is_connected() {
        ExitCode::SUCCESS
    } else {
        eprintln!("error: connection lost");
        ExitCode::from(3)
    }
}

pub fn run_once(config: &PathBuf, feed: PathBuf, baseline: PathBuf) -> Result<(), TenenciasError> {
    let credentials = json_config_adapter::load_or_create(config)?;
    let mut connector = CsvFeedAdapter::new(feed);
    connector.connect()?;
    let raw = connector.fetch(credentials.comitente)?;

    let store = JsonSnapshotAdapter::new(baseline);
    let table = pipeline::run_cycle(raw, &store);
    TextTableAdapter::stdout().render(&table);
    Ok(())
}

pub fn show_baseline(baseline: PathBuf) -> Result<(), TenenciasError> {
    let store = JsonSnapshotAdapter::new(baseline);
    match store.load()? {
        Some(snapshot) => {
            let json =
                serde_json::to_string_pretty(&snapshot).map_err(|e| TenenciasError::Persistence {
                    reason: format!("failed to serialize baseline: {e}"),
                })?;
            println!("{json}");
        }
        None => println!("no baseline saved"),
    }
    Ok(())
}
