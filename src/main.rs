//! Lograke CLI: merge, filter, and sort a directory of log files into one
//! output file.

use clap::Parser;
use lograke::engine::arg_parser::Cli;
use lograke::engine::handle_run;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let start_time = Instant::now();
    let cli = Cli::parse();
    let code = match handle_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Processing error: {err:#}");
            ExitCode::FAILURE
        }
    };
    log::debug!("Total time: {:?}", start_time.elapsed());
    code
}
