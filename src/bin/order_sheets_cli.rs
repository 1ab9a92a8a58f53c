//! CLI tool for order-sheets - creates order spreadsheets and syncs orders into them
//!
//! Usage:
//!   order_sheets_cli create --title "Orders" [--out ref.json]
//!   order_sheets_cli sync --reference ref.json --orders orders.json
//!   order_sheets_cli --dry-run sync --reference ref.json --orders orders.json
//!
//! The access token is read from `--token` or `SHEETS_ACCESS_TOKEN` (a `.env`
//! file is loaded first). `--dry-run` prints request bodies instead of sending them.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use order_sheets::config::{ACCESS_TOKEN_ENV, API_BASE_URL_ENV, TIMEOUT_ENV};
use order_sheets::error::Result;
use order_sheets::{
    build_create_request, build_setup_request, build_sync_request, BatchUpdateRequest, Config,
    CreateSpreadsheetRequest, HttpSheetsClient, Order, SheetsHelper, SpreadsheetRef,
};

#[derive(Parser)]
#[command(name = "order_sheets_cli")]
#[command(version, about = "Sync customer orders into a Google Sheets spreadsheet", long_about = None)]
struct Cli {
    /// OAuth2 access token with the spreadsheets scope [env: SHEETS_ACCESS_TOKEN]
    #[arg(long, global = true)]
    token: Option<String>,

    /// Sheets API base URL [env: SHEETS_API_BASE_URL, default: https://sheets.googleapis.com]
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Request timeout in seconds [env: SHEETS_TIMEOUT_SECS, default: 30]
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Print the request bodies as JSON instead of sending them
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a spreadsheet with the orders layout, pivot table and chart
    Create {
        /// Spreadsheet title
        #[arg(long)]
        title: String,
        /// Write the spreadsheet reference here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Replace the data sheet's rows with the given orders
    Sync {
        /// Spreadsheet reference JSON written by `create`
        #[arg(long)]
        reference: PathBuf,
        /// JSON array of orders
        #[arg(long)]
        orders: PathBuf,
    },
}

/// Everything `create` would send, with placeholder sheet ids for the setup batch.
#[derive(Serialize)]
struct CreatePlan {
    create: CreateSpreadsheetRequest,
    setup: BatchUpdateRequest,
}

fn main() -> ExitCode {
    // A missing .env file is normal
    let _ = dotenvy::dotenv();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests also arrive here
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Create { title, out } => {
            if cli.dry_run {
                let plan = CreatePlan {
                    create: build_create_request(title)?,
                    setup: build_setup_request(0, 1),
                };
                return print_json(&plan);
            }

            let helper = SheetsHelper::new(HttpSheetsClient::new(&config(cli)?)?);
            let reference = helper.create_spreadsheet(title)?;
            match out {
                Some(path) => {
                    fs::write(path, serde_json::to_string_pretty(&reference)?)?;
                    info!(path = %path.display(), "spreadsheet reference written");
                }
                None => print_json(&reference)?,
            }
            Ok(())
        }
        Command::Sync { reference, orders } => {
            let reference: SpreadsheetRef = read_json(reference)?;
            let orders: Vec<Order> = read_json(orders)?;

            if cli.dry_run {
                return print_json(&build_sync_request(reference.data_sheet_id, &orders)?);
            }

            let helper = SheetsHelper::new(HttpSheetsClient::new(&config(cli)?)?);
            helper.sync(&reference, &orders)?;
            Ok(())
        }
    }
}

/// Flags take precedence over the environment (and `.env`).
fn config(cli: &Cli) -> Result<Config> {
    Config::from_lookup(|key| {
        let flag = match key {
            ACCESS_TOKEN_ENV => cli.token.clone(),
            API_BASE_URL_ENV => cli.api_base_url.clone(),
            TIMEOUT_ENV => cli.timeout_secs.map(|secs| secs.to_string()),
            _ => None,
        };
        flag.or_else(|| env::var(key).ok())
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
