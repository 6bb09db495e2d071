//! Lograke: batch log-directory ETL. Merges every regular file in a
//! directory into one line stream under a bounded file-descriptor budget,
//! parses and filters the lines in parallel, sorts the surviving records,
//! and writes them to a single output file.

pub mod aggregate;
pub mod engine;
pub mod pipeline;
pub mod record;
pub mod types;
pub mod utils;

pub use record::LogRecord;
pub use types::*;

use log::{debug, warn};
use std::io;
use std::path::Path;

use crate::aggregate::FileAggregator;
use crate::utils::fd_limit::descriptor_budget;

/// Result alias used by the public lograke API.
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: process the log files under `input_dir` into
/// `output_file` with the severity filter and sort key from `opts`, and
/// return the count of entries written.
///
/// Per-file open failures are logged and skipped; unparseable lines are
/// dropped. The call fails only when the directory cannot be listed or the
/// output cannot be written. For a custom filter or comparator, use
/// [`pipeline::process`] directly.
pub fn process_dir(input_dir: &Path, output_file: &Path, opts: &ProcessOpts) -> Result<u64> {
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let workers = opts.num_threads.unwrap_or_else(rayon::current_num_threads);
    let budget = descriptor_budget(opts.max_open_files, workers);
    let aggregator = FileAggregator::new(budget, |path: &Path, err: &io::Error| {
        let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        warn!("Skipping failed to open file '{}': {}", abs.display(), err);
    });

    let severity = opts.severity.clone();
    let filter = move |record: &LogRecord| record.severity == severity;
    let sort_key = opts.sort_key;
    let order = move |a: &LogRecord, b: &LogRecord| sort_key.compare(a, b);

    let run = || pipeline::process(input_dir, output_file, &aggregator, filter, order);
    match opts.num_threads {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()?
            .install(run),
        None => run(),
    }
}
