//! Command handler wiring the CLI to the processing pipeline.

use anyhow::Result;

use crate::ProcessOpts;
use crate::engine::arg_parser::Cli;
use crate::process_dir;
use crate::utils::setup_logging;

/// Set up logging and run the batch, reporting progress and the final
/// entry count on stdout.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let opts = ProcessOpts {
        severity: cli.severity.clone(),
        sort_key: cli.sort_by,
        num_threads: cli.threads,
        max_open_files: cli.max_open_files,
    };
    println!("Processing...");
    let count = process_dir(&cli.input_dir, &cli.output_file, &opts)?;
    println!("Processed successfully, found entries: {count}");
    Ok(())
}
