//! Options and sort keys for the lograke API and CLI.

use clap::ValueEnum;
use std::cmp::Ordering;

use crate::record::LogRecord;

/// Record field to sort the surviving entries by (ascending lexical order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Datetime,
    Severity,
    Misc,
    Exception,
}

impl SortKey {
    pub fn compare(&self, a: &LogRecord, b: &LogRecord) -> Ordering {
        match self {
            SortKey::Datetime => a.datetime.cmp(&b.datetime),
            SortKey::Severity => a.severity.cmp(&b.severity),
            SortKey::Misc => a.misc.cmp(&b.misc),
            SortKey::Exception => a.exception.cmp(&b.exception),
        }
    }
}

/// Options for [`process_dir`](crate::process_dir).
#[derive(Clone, Debug)]
pub struct ProcessOpts {
    /// Keep only records with exactly this severity.
    pub severity: String,
    /// Field to order the output by.
    pub sort_key: SortKey,
    /// Override worker thread count. When None, the shared rayon pool is
    /// used as-is.
    pub num_threads: Option<usize>,
    /// Override the descriptor budget. When None, the default budget is
    /// clamped against the process FD limit.
    pub max_open_files: Option<usize>,
}

impl Default for ProcessOpts {
    fn default() -> Self {
        ProcessOpts {
            severity: "ERROR".to_string(),
            sort_key: SortKey::Exception,
            num_threads: None,
            max_open_files: None,
        }
    }
}
