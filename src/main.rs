//! distpack - release packaging pipeline.
//!
//! Builds a single-file executable of an interpreter program, generates its
//! installer script and packs both with docs and examples into a tarball.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match distpack::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
