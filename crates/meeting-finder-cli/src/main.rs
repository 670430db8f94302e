//! `meeting-finder` CLI — find meeting slots in a JSON calendar document.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots (stdin → stdout, JSON)
//! cat day.json | meeting-finder find
//!
//! # Read from a file, print a human-readable list
//! meeting-finder find -i day.json --format text
//!
//! # Only the earliest slot, written to a file
//! meeting-finder find -i day.json --first -o slot.json
//!
//! # Validate a document without searching
//! meeting-finder check -i day.json
//!
//! # Debug logging (RUST_LOG is honoured as well)
//! meeting-finder -v find -i day.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_finder::time_range::format_clock;
use meeting_finder::{MeetingSlots, QueryInput, SlotTier, TimeRange};
use serde::Serialize;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meeting-finder",
    version,
    about = "Find free meeting slots for mandatory and optional attendees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every free slot that fits the requested meeting
    Find {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Only report the earliest slot
        #[arg(long)]
        first: bool,
    },
    /// Validate an input document and summarize it
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Serialize)]
struct SlotDto {
    start: String,
    end: String,
    duration_minutes: u32,
}

impl From<&TimeRange> for SlotDto {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: format_clock(range.start()),
            end: format_clock(range.end()),
            duration_minutes: range.duration(),
        }
    }
}

#[derive(Serialize)]
struct SlotsDto {
    tier: SlotTier,
    slots: Vec<SlotDto>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            output,
            format,
            first,
        } => {
            let json = read_input(input.as_deref())?;
            let query = QueryInput::from_json(&json).context("Failed to parse input document")?;

            let mut result = query.run();
            if first {
                result.slots.truncate(1);
            }
            info!(
                slots = result.slots.len(),
                tier = ?result.tier,
                "meeting search finished"
            );

            let rendered = match format {
                OutputFormat::Json => render_json(&result)?,
                OutputFormat::Text => render_text(&result),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let json = read_input(input.as_deref())?;
            let query = QueryInput::from_json(&json).context("Failed to parse input document")?;
            println!("Events:              {}", query.events.len());
            println!("Duration:            {} min", query.request.duration());
            println!("Mandatory attendees: {}", query.request.attendees().len());
            println!(
                "Optional attendees:  {}",
                query.request.optional_attendees().len()
            );
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn render_json(result: &MeetingSlots) -> Result<String> {
    let dto = SlotsDto {
        tier: result.tier,
        slots: result.slots.iter().map(SlotDto::from).collect(),
    };
    let mut json = serde_json::to_string_pretty(&dto).context("Failed to serialize slots")?;
    json.push('\n');
    Ok(json)
}

fn render_text(result: &MeetingSlots) -> String {
    if result.slots.is_empty() {
        return "No available slots\n".to_string();
    }

    let mut out = String::new();
    if result.tier == SlotTier::MandatoryOnly {
        out.push_str("Optional attendees could not be accommodated\n");
    }
    for slot in &result.slots {
        out.push_str(&format!("{}  {} min\n", slot, slot.duration()));
    }
    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            debug!(path, "reading input file");
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
            print!("{}", content);
        }
    }
    Ok(())
}
