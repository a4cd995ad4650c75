//! dotloom CLI entry point.

use std::process;

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use dotloom_cli::{Args, error::Reportable};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Parse arguments first
    let args = Args::parse();

    // Initialize the logger; --verbose raises the level to debug
    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    // Run the application
    if let Err(err) = dotloom_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        let mut rendered = String::new();
        reporter
            .render_report(&mut rendered, &Reportable(&err))
            .expect("Writing to String buffer is infallible");

        error!("{rendered}");

        process::exit(1);
    }

    info!("Completed successfully");
}
