//! SHA-256 Self-Test
//!
//! Runs the built-in FIPS 180-4 / NIST known-answer vectors and exits
//! non-zero if any of them fails.

use std::time::Instant;

use fips_sha256::{sha256, KNOWN_ANSWERS};

fn main() {
    env_logger::init();

    println!("fips-sha256 v{} self-test", fips_sha256::VERSION);
    println!("Running SHA-256 FIPS 180-4 Test Vectors...\n");

    let mut passed = 0;
    let mut failed = 0;

    for vector in KNOWN_ANSWERS {
        let message = vector.message();
        let start = Instant::now();
        let result = sha256(&message);
        let elapsed = start.elapsed();

        match result {
            Ok(digest) if digest.to_hex() == vector.expected => {
                println!(
                    "[PASS] {:<10} {:>8} bytes -> {}  ({:?})",
                    vector.name,
                    message.len(),
                    &vector.expected[..16],
                    elapsed
                );
                passed += 1;
            }
            Ok(digest) => {
                println!("[FAIL] {} ({} bytes)", vector.name, message.len());
                println!("  Expected: {}", vector.expected);
                println!("  Got:      {}", digest.to_hex());
                failed += 1;
            }
            Err(e) => {
                println!("[FAIL] {}: {}", vector.name, e);
                failed += 1;
            }
        }
    }

    println!("\n{} passed, {} failed", passed, failed);

    if failed > 0 {
        std::process::exit(1);
    }
}
