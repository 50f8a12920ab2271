//! Elementary file I/O demo: one write/seek/read round trip.
//!
//! One open, one write, one seek back to the start, one read, done. No
//! retry loops, no partial-write recovery, no encoding concerns: the
//! point of the demo is the syscall sequence, not robustness. Return
//! codes are still checked and propagate with `?`.

use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Payload the demo binary writes when none is given.
pub const DEFAULT_PAYLOAD: &str = "na moin :)";

/// Outcome of one write/seek/read sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    /// Bytes handed to the write.
    pub bytes_written: usize,
    /// Bytes the read brought back.
    pub bytes_read: usize,
    /// The read-back content.
    pub content: String,
}

/// Creates (or truncates) `path`, writes `payload`, seeks back to the
/// start, and reads the content back.
pub fn write_seek_read(path: &Path, payload: &str) -> io::Result<RoundTrip> {
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .read(true)
        .write(true)
        .open(path)?;
    file.write_all(payload.as_bytes())?;
    file.seek(SeekFrom::Start(0))?;
    let mut content = String::new();
    let bytes_read = file.read_to_string(&mut content)?;
    tracing::debug!(path = %path.display(), bytes_read, "round trip complete");
    Ok(RoundTrip {
        bytes_written: payload.len(),
        bytes_read,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_returns_what_was_written() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("roundtrip.txt");
        let outcome = write_seek_read(&path, DEFAULT_PAYLOAD).expect("round trip");
        assert_eq!(outcome.bytes_written, DEFAULT_PAYLOAD.len());
        assert_eq!(outcome.bytes_read, DEFAULT_PAYLOAD.len());
        assert_eq!(outcome.content, DEFAULT_PAYLOAD);
    }

    #[test]
    fn round_trip_truncates_previous_content() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("roundtrip.txt");
        write_seek_read(&path, "a much longer payload than the second").expect("first");
        let outcome = write_seek_read(&path, "short").expect("second");
        assert_eq!(outcome.content, "short");
    }

    #[test]
    fn unwritable_path_propagates_the_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("no-such-dir").join("roundtrip.txt");
        assert!(write_seek_read(&path, DEFAULT_PAYLOAD).is_err());
    }
}
