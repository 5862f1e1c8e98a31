mod cli;
mod config;
mod emails;
mod errors;
mod fetch;
mod html;
mod phones;
mod record;
mod registry;
mod scan;
mod useragent;

use std::process::ExitCode;

use cli::Cli;
use config::Config;
use scan::Scanner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::from_args();

    let mut config = Config::from_env();
    config.merge_with_cli(&cli);

    if let Err(e) = config.validate() {
        if cli.error_enabled() {
            eprintln!("Configuration error: {e}");
        }
        return ExitCode::FAILURE;
    }

    let scanner = match Scanner::new(config) {
        Ok(scanner) => scanner,
        Err(e) => {
            if cli.error_enabled() {
                eprintln!("Error: {e}");
            }
            return ExitCode::FAILURE;
        }
    };

    if cli.is_trace() {
        eprintln!("Scanning {}", cli.url);
    }

    let outcome = scanner.scan(&cli.url).await;

    if cli.warn_enabled() {
        for warning in &outcome.warnings {
            eprintln!("warning: {warning}");
        }
    }

    // The record is always complete-shaped; only failing to emit it is fatal.
    match outcome.record.write_out(cli.output.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.error_enabled() {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
