mod form;
mod ids;
mod ipc;
mod lookup;
mod model;
mod store;
mod view;

use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "absensid", version, about = "Student attendance sidecar (JSON lines over stdio)")]
struct Args {
    /// Start with no students, subjects or attendance instead of the seed data
    #[arg(long)]
    empty: bool,

    /// Date pre-filled in the attendance form (YYYY-MM-DD); defaults to the local date
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,
}

fn parse_today(raw: &str) -> Result<NaiveDate, String> {
    model::parse_date(raw).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    // stdout carries responses, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("absensid=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let store = if args.empty {
        store::Store::empty()
    } else {
        store::Store::seeded()
    };
    tracing::info!(counts = ?store.counts(), %today, "absensid ready");
    let mut state = ipc::AppState::new(store, today);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let resp = match serde_json::from_str::<ipc::Request>(&line) {
            Ok(req) => ipc::handle_request(&mut state, req),
            Err(e) => {
                // No id to reply with.
                tracing::warn!(error = %e, "malformed request line");
                ipc::bad_json(e.to_string())
            }
        };
        writeln!(stdout, "{}", resp)?;
        stdout.flush()?;
    }

    tracing::info!("stdin closed, exiting");
    Ok(())
}
