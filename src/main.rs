//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::ExitCode;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use wordhuff::compression::pipeline::run;
use wordhuff::tools::cli::huffopts_init;
use wordhuff::tools::report::report;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start logging: {}", e);
    }

    let options = huffopts_init();

    //----- Run the round trip and show what happened
    match run(&options) {
        Ok(outcome) => {
            println!("{}", report(&outcome));
            if outcome.round_trip_ok() {
                info!("Done.\n");
                ExitCode::SUCCESS
            } else {
                error!("Decoded message does not match the original.");
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
