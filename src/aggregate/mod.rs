//! Core aggregation: many files to one parallel line stream, with a hard
//! bound on simultaneously open descriptors.

pub mod aggregator;
pub mod attempt;
pub mod balanced;
pub mod line_stream;

pub use aggregator::FileAggregator;
pub use attempt::MapAttempt;
pub use balanced::{BoxedLines, balanced_chain, balanced_merge};
pub use line_stream::{LineStream, peak_open_streams, reset_peak_open_streams};
