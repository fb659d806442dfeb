// src/main.rs
use std::io::{self, Write};
use std::process::ExitCode;

use line_report::{logging, render};
use line_report_domain::AppConfig;
use line_report_shared_kernel::ErrorContext;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{e}");
    }

    let config = AppConfig::load();
    log::debug!("running with {config:?}");

    let text = render(&config);
    let written = writeln!(io::stdout().lock(), "{text}").context("writing report to stdout");
    if let Err(e) = written {
        log::warn!("{e}");
    }

    ExitCode::SUCCESS
}
