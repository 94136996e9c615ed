//! Binary entrypoint for the `smaudit` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    smaudit::logging::init();

    match smaudit::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
