use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};
use miette::GraphicalReportHandler;

use daylane::DaylaneError;
use daylane_cli::{Args, error_adapter::to_reportables};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match daylane_cli::run(&args) {
        Ok(()) => {
            info!("Layout complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Route `log` output to stderr at `level`, falling back to `warn` when the
/// level name is not recognised.
fn init_logger(level: &str) {
    let filter = level.parse::<LevelFilter>();
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    builder
        .filter_level(*filter.as_ref().unwrap_or(&LevelFilter::Warn))
        .init();

    if filter.is_err() {
        warn!(level; "Unknown log level, using warn");
    }
}

fn report_error(err: &DaylaneError) {
    let handler = GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        match handler.render_report(&mut rendered, &reportable) {
            Ok(()) => error!("{rendered}"),
            Err(_) => error!("{reportable}"),
        }
    }
}
