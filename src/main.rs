//! SHA-256 Console Driver
//!
//! Reads one line at a time from stdin and prints its SHA-256 digest as
//! eight space-separated hex groups. Entering `q` prints its digest and
//! exits.
//!
//! Usage:
//!   sha256-console
//!   RUST_LOG=debug sha256-console

use std::io;

use fips_sha256::run_session;

fn main() {
    env_logger::init();
    log::debug!("sha256-console v{}", fips_sha256::VERSION);

    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_session(stdin.lock(), stdout.lock()) {
        Ok(summary) => {
            log::info!(
                "hashed {} lines (sentinel: {})",
                summary.lines_hashed,
                summary.saw_sentinel
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
