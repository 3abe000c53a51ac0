//! Command-line front end for the icalmerge engine.
//!
//! Reads each input calendar in turn, merges it, and writes the combined
//! calendar to the last path given. Calendars are exchanged as JSON arrays
//! of [`CalendarEvent`]; turning iCalendar text into events is left to
//! whatever produced those files.

pub mod error;

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use icalmerge_engine::{AnonymousRecords, MergeConfig, MergeStats, Merger};
use icalmerge_types::CalendarEvent;
use tracing::{debug, info};

pub use error::{
    CliError, CliResult, EXIT_FILE_IO, EXIT_INDEX, EXIT_PARSE, EXIT_USAGE,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "icalmerge")]
#[command(about = "Merge calendars, keeping the most recently modified copy of each event")]
pub struct Args {
    /// Input calendars followed by the output calendar
    #[arg(value_name = "FILE", required = true, num_args = 2..)]
    pub files: Vec<PathBuf>,

    /// Maximum number of distinct event UIDs across all inputs
    #[arg(short, long)]
    pub capacity: Option<usize>,

    /// Keep events that have no UID instead of dropping them
    #[arg(long)]
    pub keep_anonymous: bool,

    /// JSON file with merge settings; flags override it
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The input calendars, in merge order.
    pub fn inputs(&self) -> &[PathBuf] {
        match self.files.split_last() {
            Some((_, inputs)) => inputs,
            None => &[],
        }
    }

    /// Where the merged calendar goes.
    pub fn output(&self) -> Option<&Path> {
        self.files.last().map(PathBuf::as_path)
    }
}

/// Builds the merge settings from the config file (if any) and flags.
pub fn resolve_config(args: &Args) -> CliResult<MergeConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text =
                fs::read_to_string(path).map_err(CliError::file_io("reading config", path))?;
            serde_json::from_str(&text).map_err(|source| CliError::Parse {
                what: "config",
                path: path.clone(),
                source,
            })?
        }
        None => MergeConfig::default(),
    };

    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if args.keep_anonymous {
        config.anonymous = AnonymousRecords::Keep;
    }
    Ok(config)
}

/// Reads one calendar.
pub fn load_source(path: &Path) -> CliResult<Vec<CalendarEvent>> {
    let file = File::open(path).map_err(CliError::file_io("opening", path))?;
    let events: Vec<CalendarEvent> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                CliError::FileIo {
                    action: "reading",
                    path: path.to_path_buf(),
                    source: source.into(),
                }
            } else {
                CliError::Parse {
                    what: "calendar",
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
    debug!("Read {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Writes the merged calendar, replacing any existing file.
pub fn write_output(path: &Path, events: &[CalendarEvent]) -> CliResult<()> {
    let file = File::create(path).map_err(CliError::file_io("creating", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, events)
        .map_err(io::Error::from)
        .and_then(|()| writer.write_all(b"\n"))
        .and_then(|()| writer.flush())
        .map_err(CliError::file_io("writing", path))
}

/// Runs a full merge as described by `args`.
pub fn run(args: &Args) -> CliResult<MergeStats> {
    let (Some(output), inputs) = (args.output(), args.inputs()) else {
        return Err(CliError::Usage(
            "expected at least one input and one output file".into(),
        ));
    };
    if inputs.is_empty() {
        return Err(CliError::Usage(
            "expected at least one input and one output file".into(),
        ));
    }

    let config = resolve_config(args)?;
    let mut merger = Merger::new(config).map_err(CliError::Index)?;

    for path in inputs {
        let events = load_source(path)?;
        merger
            .merge_source(events)
            .map_err(|source| CliError::Merge {
                path: path.clone(),
                source,
            })?;
    }

    let outcome = merger.finish().map_err(CliError::Index)?;
    write_output(output, &outcome.records)?;
    info!(
        "Wrote {} events to {}",
        outcome.records.len(),
        output.display()
    );
    Ok(outcome.stats)
}
