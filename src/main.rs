//! Cascade CLI
//!
//! Command-line interface for the Cascade translation backend.

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match cascade_i18n::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Don't print if it's an empty error (e.g., from clap --help)
            let msg = e.to_string();
            if !msg.is_empty() {
                eprintln!("Error: {}", e);
            }

            // Return appropriate exit code
            let code = e.exit_code();
            ExitCode::from(code as u8)
        }
    }
}
