//! Chat log input.
//!
//! Materializes a chat log into one message per line. Line terminators are
//! stripped; nothing else is altered.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::Result;

/// Read every line from `reader`.
///
/// Invalid UTF-8 is reported as an [`std::io::ErrorKind::InvalidData`] error.
pub fn read_log<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    Ok(lines)
}

/// Read a chat log file.
pub fn load_log<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let lines = read_log(BufReader::new(file))?;
    debug!(path = %path.display(), lines = lines.len(), "loaded chat log");
    Ok(lines)
}
