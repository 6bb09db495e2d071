//! Pipeline components: directory scan, processing engine, output sink.

pub mod engine;
pub mod scan;
pub mod sink;

pub use engine::process;
pub use scan::list_regular_files;
pub use sink::write_lines;
