//! Console Driver
//!
//! Line-at-a-time hashing loop: prompt, read one line, print its digest in
//! grouped hex. The line `q` ends the session after its own digest is
//! printed; end of input ends it as well.

use std::io::{BufRead, Write};

use crate::error::DigestError;
use crate::params::{PROMPT, QUIT_SENTINEL};
use crate::sha256::sha256;

/// Outcome of one console session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Number of lines hashed, sentinel included
    pub lines_hashed: usize,
    /// Whether the session ended on the sentinel rather than end of input
    pub saw_sentinel: bool,
}

/// Strip one trailing `\n` or `\r\n`
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Run the prompt/hash/print loop until the sentinel line or end of input.
///
/// Line content is hashed as raw bytes; it need not be UTF-8.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<SessionSummary, DigestError> {
    let mut summary = SessionSummary::default();
    let mut buf = Vec::new();

    loop {
        writeln!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            log::debug!("console: end of input after {} lines", summary.lines_hashed);
            break;
        }

        let line = trim_line_ending(&buf);
        let digest = sha256(line)?;
        writeln!(output, "{}", digest)?;
        summary.lines_hashed += 1;

        if line == QUIT_SENTINEL.as_bytes() {
            summary.saw_sentinel = true;
            break;
        }
    }

    output.flush()?;
    Ok(summary)
}
