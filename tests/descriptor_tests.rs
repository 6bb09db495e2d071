//! Descriptor-bound checks for both aggregation strategies.
//!
//! These assert against the process-wide open-stream gauge, so everything
//! runs inside one test function (cargo runs #[test] functions of one
//! binary concurrently and the gauge is shared).

use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use lograke::aggregate::{FileAggregator, peak_open_streams, reset_peak_open_streams};

fn write_files(dir: &Path, count: usize, lines_each: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let path = dir.join(format!("f{i:03}.log"));
            let body: String = (0..lines_each)
                .map(|j| {
                    format!(
                        "2024-03-01 10:00:{:02}.000 ERROR w: E-{i:03}-{j:03}\n",
                        j % 60
                    )
                })
                .collect();
            fs::write(&path, body).unwrap();
            path
        })
        .collect()
}

fn no_open_failures(path: &Path, err: &io::Error) {
    panic!("unexpected open failure for '{}': {}", path.display(), err);
}

#[test]
fn test_open_descriptors_stay_within_bounds() {
    let dir = TempDir::new().unwrap();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(3)
        .build()
        .unwrap();

    // Flat-mapped: far more files than the budget allows. Each worker holds
    // at most one file open, so the peak is bounded by the pool size.
    let files = write_files(dir.path(), 64, 10);
    let budget = 4;
    let aggregator = FileAggregator::new(budget, no_open_failures);
    reset_peak_open_streams();
    let lines: Vec<String> = pool.install(|| aggregator.lines(files).collect());
    assert_eq!(lines.len(), 64 * 10);
    let peak = peak_open_streams();
    assert!(peak <= 3, "flat-mapped peak {peak} exceeds pool size 3");

    // Concatenated: file count within the budget. All files are opened up
    // front, so the peak equals the file count and stays within the budget.
    let few = write_files(dir.path(), 6, 10);
    let aggregator = FileAggregator::new(128, no_open_failures);
    reset_peak_open_streams();
    let lines: Vec<String> = pool.install(|| aggregator.lines(few).collect());
    assert_eq!(lines.len(), 6 * 10);
    let peak = peak_open_streams();
    assert_eq!(peak, 6, "concatenated strategy opens all files eagerly");
}
