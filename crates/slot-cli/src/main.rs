//! `slots` CLI — find common free meeting slots from a JSON event list.
//!
//! ## Usage
//!
//! ```sh
//! # All free 30-minute slots for participants 1 and 2 (events via stdin)
//! cat events.json | slots find \
//!     --from 2026-06-15T09:00:00Z --to 2026-06-15T17:00:00Z \
//!     --duration 30 --participants 1,2
//!
//! # Read events from a file, write the slot list to a file
//! slots find --from ... --to ... --duration 60 --participants 1 \
//!     -i events.json -o slots.json
//!
//! # Just the first free slot
//! slots first --from ... --to ... --duration 30 --participants 1,2 -i events.json
//! ```
//!
//! Events are a JSON array of `{start, end, cancelled, participant_ids}`
//! objects with RFC 3339 timestamps. The query is validated before the scan
//! so a malformed window or duration is reported as an error instead of
//! silently producing an empty slot list.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use slot_engine::{Event, SlotQuery};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "slots", version, about = "Free-slot discovery over calendar event sets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every free slot in the search window as JSON
    Find {
        #[command(flatten)]
        query: QueryArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print only the first free slot in the search window
    First {
        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Search window start (RFC 3339, e.g. 2026-06-15T09:00:00Z)
    #[arg(long)]
    from: DateTime<Utc>,

    /// Search window end (RFC 3339)
    #[arg(long)]
    to: DateTime<Utc>,

    /// Meeting duration in minutes
    #[arg(long)]
    duration: i64,

    /// Comma-separated required participant IDs (may be empty)
    #[arg(long, value_delimiter = ',')]
    participants: Vec<u64>,

    /// Events JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
}

impl QueryArgs {
    fn to_query(&self) -> SlotQuery {
        SlotQuery {
            window_start: self.from,
            window_end: self.to,
            duration_minutes: self.duration,
            participant_ids: self.participants.iter().copied().collect(),
        }
    }

    fn read_events(&self) -> Result<Vec<Event>> {
        let raw = read_input(self.input.as_deref())?;
        serde_json::from_str(&raw).context("Failed to parse events JSON")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find { query, output } => {
            let slot_query = query.to_query();
            slot_query.validate()?;

            let events = query.read_events()?;
            let slots = slot_query.find_free_slots(&events);

            let json = serde_json::to_string_pretty(&slots)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::First { query } => {
            let slot_query = query.to_query();
            slot_query.validate()?;

            let events = query.read_events()?;
            match slot_query.find_first_free_slot(&events) {
                Some(slot) => {
                    println!("{} {}", slot.start.to_rfc3339(), slot.end.to_rfc3339());
                }
                None => {
                    println!(
                        "No free slot of {} minutes between {} and {}",
                        slot_query.duration_minutes,
                        slot_query.window_start,
                        slot_query.window_end
                    );
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
