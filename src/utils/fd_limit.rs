//! File descriptor budget for the aggregator (Unix).

/// Default cap on simultaneously open log files. Keep this below the OS
/// per-process descriptor limit, with headroom for the worker pool.
pub const DEFAULT_MAX_OPEN_FILES: usize = 128;

/// Fraction of the process FD limit the job may use (leave headroom for
/// stdio, the output file, and anything else the process holds open).
const FD_HEADROOM_FRACTION: f64 = 0.8;

/// Returns the soft limit for max open file descriptors, or `None` if
/// unavailable (e.g. Windows).
#[cfg(unix)]
pub fn max_open_fds() -> Option<u64> {
    let mut rlim = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    if unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, &mut rlim) } != 0 {
        return None;
    }
    // RLIM_INFINITY is typically !0; treat as "no practical limit".
    if rlim.rlim_cur == libc::RLIM_INFINITY || rlim.rlim_cur > i64::MAX as u64 {
        return None;
    }
    Some(rlim.rlim_cur)
}

#[cfg(not(unix))]
pub fn max_open_fds() -> Option<u64> {
    None
}

/// Effective descriptor budget: the requested value (or the default),
/// clamped so that budget + `workers` stays within ~80% of the process FD
/// limit. Each worker can hold one extra file open in the flat-mapped
/// strategy, hence the worker headroom. Never below 1.
pub fn descriptor_budget(requested: Option<usize>, workers: usize) -> usize {
    let want = requested.unwrap_or(DEFAULT_MAX_OPEN_FILES).max(1);
    match max_open_fds() {
        Some(limit) => {
            let usable = (limit as f64 * FD_HEADROOM_FRACTION) as usize;
            want.min(usable.saturating_sub(workers)).max(1)
        }
        None => want,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_defaults_when_unconstrained() {
        // The default must survive a typical soft limit (1024 and up).
        if let Some(limit) = max_open_fds()
            && limit >= 1024
        {
            assert_eq!(descriptor_budget(None, 8), DEFAULT_MAX_OPEN_FILES);
        }
    }

    #[test]
    fn test_budget_honors_request() {
        assert_eq!(descriptor_budget(Some(4), 8), 4);
    }

    #[test]
    fn test_budget_never_below_one() {
        assert_eq!(descriptor_budget(Some(0), 0), 1);
    }
}
