use clap::{CommandFactory, Parser};
use dnget_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging(cli.verbose).is_err() {
        logging::init_logging_stderr(cli.verbose);
    }

    if let Err(err) = cli.run() {
        eprintln!("dnget error: {:#}", err);
        eprintln!();
        let _ = Cli::command().print_help();
        std::process::exit(1);
    }
}
