//----------------------------------------
// cli mod
//----------------------------------------
pub mod args;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;

use crate::cli::args::Cli;
use crate::cli::error::CliErr;
use crate::cli::output::render_text;
use crate::cli::report::build_report;

/// Runs one invocation and returns what should be printed to stdout
pub fn run(cli: &Cli) -> Result<String, CliErr> {
    let params = cli.design()?;
    let report = build_report(&params, cli.solve, cli.n1, cli.steps)?;
    if cli.json {
        let mut out = serde_json::to_string_pretty(&report)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_text(&report))
    }
}
