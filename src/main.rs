mod cli;
mod config;
mod convert;
mod logging;
mod output;
mod weekday_cmd;

use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = weekday_cmd::run(cli.args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
