//! # shopcart Entry Point
//!
//! ```bash
//! # Interactive session
//! cargo run -p shopcart-cli
//!
//! # Scripted session with JSON output
//! printf 'add 1\nadd 1\ndec 1\n' | SHOPCART_OUTPUT=json cargo run -p shopcart-cli
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match shopcart_cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Session aborted");
            eprintln!("shopcart: {}", err);
            ExitCode::FAILURE
        }
    }
}
