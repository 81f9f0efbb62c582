// retime-cli/src/main.rs
//
// Entry point of the retime binary.
//
// Parses the command line, installs logging, dispatches to the selected
// subcommand and turns any failure into exit code 1.

use clap::Parser;
use log::error;
use retime_cli::logging::init_logging;
use retime_cli::{Cli, Commands, run_convert, run_info};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Convert(args) => run_convert(args),
        Commands::Info(args) => run_info(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}
