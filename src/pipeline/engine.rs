//! The parse → filter → sort → format pipeline over an aggregated line
//! stream.

use anyhow::Result;
use log::debug;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::io;
use std::path::Path;
use std::sync::atomic::{self, AtomicU64};

use crate::aggregate::{FileAggregator, peak_open_streams};
use crate::record::LogRecord;

use super::scan::list_regular_files;
use super::sink::write_lines;

/// Run the whole batch: list `input_dir`, merge all file lines through
/// `aggregator`, parse and filter in parallel, sort everything with
/// `order`, and write the formatted lines to `output_file`. Returns the
/// number of records that survived filtering.
///
/// Parse failures drop the line silently; open failures go through the
/// aggregator's callback. Only a directory-list or output-write failure
/// aborts the job.
///
/// The sort is the one synchronization point: every surviving record is
/// collected before any output is produced. `order` is the sole ordering
/// authority; records it considers equal keep whatever order the parallel
/// stages produced.
pub fn process<F, C, O>(
    input_dir: &Path,
    output_file: &Path,
    aggregator: &FileAggregator<O>,
    filter: F,
    order: C,
) -> Result<u64>
where
    F: Fn(&LogRecord) -> bool + Send + Sync,
    C: Fn(&LogRecord, &LogRecord) -> Ordering + Send + Sync,
    O: Fn(&Path, &io::Error) + Send + Sync,
{
    let files = list_regular_files(input_dir)?;
    debug!(
        "Found {} regular files in '{}'",
        files.len(),
        input_dir.display()
    );

    let counter = AtomicU64::new(0);
    let mut records: Vec<LogRecord> = aggregator
        .lines(files)
        .filter_map(|line| LogRecord::parse(&line))
        .filter(|record| filter(record))
        .inspect(|_| {
            counter.fetch_add(1, atomic::Ordering::Relaxed);
        })
        .collect();
    debug!(
        "Collected {} records, peak open files: {}",
        records.len(),
        peak_open_streams()
    );

    records.par_sort_by(|a, b| order(a, b));

    let lines: Vec<String> = records.par_iter().map(LogRecord::format).collect();
    write_lines(output_file, &lines)?;

    Ok(counter.load(atomic::Ordering::Relaxed))
}
