use clap::Parser;
use std::path::PathBuf;

use crate::types::SortKey;

/// Batch log-directory ETL: merge, filter, and sort log files into one
/// output file.
#[derive(Clone, Parser)]
#[command(name = "lograke")]
#[command(about = "Merge every log file in a directory into one filtered, sorted output file.")]
pub struct Cli {
    /// Directory containing the log files to process (direct children only).
    #[arg(value_name = "LOG_DIR")]
    pub input_dir: PathBuf,

    /// Output file path. Overwritten if it already exists.
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Keep only entries with exactly this severity.
    #[arg(long, short = 's', default_value = "ERROR")]
    pub severity: String,

    /// Record field to sort the output by (ascending).
    #[arg(long, value_enum, default_value = "exception")]
    pub sort_by: SortKey,

    /// Worker thread count. Default: one per logical CPU.
    #[arg(long, short = 't')]
    pub threads: Option<usize>,

    /// Max simultaneously open log files. Default: 128, clamped against the
    /// process FD limit.
    #[arg(long)]
    pub max_open_files: Option<usize>,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
