//! Lazy line stream over one open log file, with descriptor accounting.

use log::warn;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Currently open line streams and the high-water mark since the last
/// reset. Diagnostic gauge: logged at debug level after a run and used to
/// verify the descriptor budget is honored.
static OPEN_STREAMS: AtomicUsize = AtomicUsize::new(0);
static PEAK_OPEN_STREAMS: AtomicUsize = AtomicUsize::new(0);

/// Lines of one open file. The descriptor is held for the lifetime of the
/// stream and released exactly once, when the stream is dropped (fully
/// drained or abandoned early).
pub struct LineStream {
    lines: io::Lines<BufReader<File>>,
    path: PathBuf,
}

impl LineStream {
    pub fn open(path: &Path) -> io::Result<LineStream> {
        let file = File::open(path)?;
        let open = OPEN_STREAMS.fetch_add(1, Ordering::Relaxed) + 1;
        PEAK_OPEN_STREAMS.fetch_max(open, Ordering::Relaxed);
        Ok(LineStream {
            lines: BufReader::new(file).lines(),
            path: path.to_path_buf(),
        })
    }
}

impl Iterator for LineStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.lines.next() {
            Some(Ok(line)) => Some(line),
            Some(Err(err)) => {
                // Read error mid-file: give up on the rest of this file but
                // keep the batch going.
                warn!(
                    "Read error in '{}', dropping rest of file: {}",
                    self.path.display(),
                    err
                );
                None
            }
            None => None,
        }
    }
}

impl Drop for LineStream {
    fn drop(&mut self) {
        OPEN_STREAMS.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Highest number of simultaneously open line streams since the last
/// [`reset_peak_open_streams`].
pub fn peak_open_streams() -> usize {
    PEAK_OPEN_STREAMS.load(Ordering::Relaxed)
}

pub fn reset_peak_open_streams() {
    PEAK_OPEN_STREAMS.store(OPEN_STREAMS.load(Ordering::Relaxed), Ordering::Relaxed);
}
