//! Command-line interface for the splitter.

use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;

use crate::config::{validate_output_dir, validate_prefix, DEFAULT_PREFIX};
use crate::error::{Result, SplitError};
use crate::input::{InputSource, STDIN_PATH};
use crate::splitting::{PolicySelection, SplitPolicy, SplitSummary, Splitter};

/// Split a file into pieces.
///
/// Output files are named PREFIXaa, PREFIXab, ... and concatenate back to
/// the input. Without a policy flag, pieces hold 1000 lines each.
#[derive(Parser, Debug)]
#[command(name = "split")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Put LINES lines in each output file
    #[arg(short = 'l', long, value_name = "LINES", value_parser = clap::value_parser!(u64).range(1..))]
    pub lines: Option<u64>,

    /// Split into exactly CHUNKS files; the last one takes the remaining bytes
    #[arg(short = 'n', long = "number", value_name = "CHUNKS", value_parser = clap::value_parser!(u64).range(1..))]
    pub chunks: Option<u64>,

    /// Put BYTES bytes in each output file
    #[arg(short = 'b', long, value_name = "BYTES", value_parser = clap::value_parser!(u64).range(1..))]
    pub bytes: Option<u64>,

    /// Directory to write pieces into (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print a line for every file created
    #[arg(short, long)]
    pub verbose: bool,

    /// Input file, or - for standard input
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Output filename prefix
    #[arg(default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}

impl Cli {
    /// The policy requested on the command line.
    ///
    /// Requesting more than one policy is an error; requesting none yields
    /// [`PolicySelection::Default`].
    pub fn selection(&self) -> Result<PolicySelection> {
        let requested = [
            self.lines.map(SplitPolicy::line_count),
            self.chunks.map(SplitPolicy::chunk_count),
            self.bytes.map(SplitPolicy::byte_count),
        ]
        .into_iter()
        .flatten()
        .collect::<Result<Vec<_>>>()?;

        match requested.as_slice() {
            [] => Ok(PolicySelection::Default),
            [policy] => Ok(PolicySelection::Explicit(*policy)),
            _ => Err(SplitError::ConflictingPolicies),
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let summary = split_command(&cli)?;

    if cli.verbose {
        for piece in &summary.pieces {
            println!(
                "{} {} ({} bytes)",
                style("creating file").bold(),
                style(piece.path.display()).cyan(),
                piece.bytes
            );
        }
    }

    Ok(())
}

/// Execute a split as described by `cli`.
pub fn split_command(cli: &Cli) -> Result<SplitSummary> {
    // Validate everything before touching the input
    let policy = cli.selection()?.resolve();
    validate_prefix(&cli.prefix)?;
    let output_dir = resolve_output_dir(cli.output_dir.as_deref())?;
    validate_output_dir(&output_dir)?;

    let mut input = InputSource::open(&cli.input)?;
    tracing::info!(
        input = %cli.input.display(),
        source = input.describe(),
        %policy,
        "Splitting input"
    );

    let splitter = Splitter::new(output_dir, cli.prefix.as_str());
    splitter.split(&mut input, policy)
}

fn resolve_output_dir(output_dir: Option<&Path>) -> Result<PathBuf> {
    match output_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().map_err(|e| SplitError::OutputDirectory {
            path: PathBuf::from("."),
            reason: e.to_string(),
        }),
    }
}
