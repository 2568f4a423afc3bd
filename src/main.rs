// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod console_format;
mod loader;
mod report;
mod types;
mod ui;

use log::debug;
use report::Report;
use std::io;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    if let Err(e) = args.validate() {
        ui::print_error(&e);
        return;
    }

    // Set console width override if specified (for testing)
    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    // Every pipeline failure prints one error line; the process still exits
    // with status 0 either way.
    if let Err(e) = run(&args) {
        ui::print_error(&e);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), String> {
    let rows = loader::load_files(&args.files).map_err(|e| e.to_string())?;
    debug!("loaded {} rows from {} files", rows.len(), args.files.len());

    let report = report::get_report(&args.report)
        .ok_or_else(|| format!("unknown report type: {}", args.report))?;
    debug!("generating report {}", args.report);

    let result = report.generate(&rows);

    if args.json {
        report::write_json(&mut io::stdout(), &args.report, report.columns(), &result)
            .map_err(|e| format!("failed to write JSON report: {}", e))?;
    } else {
        let options = console_format::TableOptions { index: !args.no_index };
        console_format::print_table(report.columns(), &result, options);
    }

    Ok(())
}
