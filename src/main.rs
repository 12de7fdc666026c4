use clap::Parser;
use sscompute::cli::{args::Cli, logging::init_logging, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "computation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
