//! File-to-lines aggregation under a bounded descriptor budget.

use log::debug;
use rayon::iter::Either;
use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};

use super::attempt::MapAttempt;
use super::balanced::{BoxedLines, balanced_chain};
use super::line_stream::LineStream;

/// Merges the line streams of many files into one parallel stream of lines,
/// never holding more descriptors open than the configured budget allows.
///
/// Files that fail to open are reported through `on_open_failure` and
/// excluded; an open failure never aborts the batch.
pub struct FileAggregator<F> {
    max_open_files: usize,
    on_open_failure: F,
}

impl<F> FileAggregator<F>
where
    F: Fn(&Path, &io::Error) + Send + Sync,
{
    /// `max_open_files` is the descriptor budget; keep it under the OS
    /// per-process limit with headroom for the worker pool (see
    /// [`descriptor_budget`](crate::utils::fd_limit::descriptor_budget)).
    pub fn new(max_open_files: usize, on_open_failure: F) -> FileAggregator<F> {
        FileAggregator {
            max_open_files: max_open_files.max(1),
            on_open_failure,
        }
    }

    /// All lines of all readable `files` as one unordered parallel stream.
    ///
    /// Two strategies, picked by file count against the budget:
    ///
    /// - **Concatenated** (count within budget): open every file up front,
    ///   chain the streams pairwise into a balanced tree, and bridge the
    ///   single lazy stream into the pool. Lines of one file can be split
    ///   across workers; up to `max_open_files` descriptors are held.
    /// - **Flat-mapped** (count over budget): each worker opens one file at
    ///   a time, drains it, and closes it before the next. A file stays on
    ///   one worker, but at most one descriptor is open per worker.
    pub fn lines(&self, files: Vec<PathBuf>) -> impl ParallelIterator<Item = String> {
        if files.len() > self.max_open_files {
            debug!(
                "Aggregating {} files flat-mapped (descriptor budget {})",
                files.len(),
                self.max_open_files
            );
            let on_open_failure = &self.on_open_failure;
            Either::Right(files.into_par_iter().flat_map_iter(move |path| {
                match MapAttempt::wrap(path, |p| LineStream::open(p)) {
                    MapAttempt::Success(stream) => Either::Left(stream),
                    MapAttempt::Failure { input, error } => {
                        on_open_failure(&input, &error);
                        Either::Right(std::iter::empty())
                    }
                }
            }))
        } else {
            debug!(
                "Aggregating {} files concatenated (descriptor budget {})",
                files.len(),
                self.max_open_files
            );
            let streams: Vec<BoxedLines<String>> = files
                .into_iter()
                .filter_map(
                    |path| match MapAttempt::wrap(path, |p| LineStream::open(p)) {
                        MapAttempt::Success(stream) => {
                            Some(Box::new(stream) as BoxedLines<String>)
                        }
                        MapAttempt::Failure { input, error } => {
                            (self.on_open_failure)(&input, &error);
                            None
                        }
                    },
                )
                .collect();
            Either::Left(balanced_chain(streams).par_bridge())
        }
    }
}
