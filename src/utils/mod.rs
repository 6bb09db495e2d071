pub mod fd_limit;
pub mod logger;

pub use fd_limit::{DEFAULT_MAX_OPEN_FILES, descriptor_budget, max_open_fds};
pub use logger::setup_logging;
