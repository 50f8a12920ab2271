//! Acquiring the raw auxiliary vector.
//!
//! Where the vector lives is a platform convention, not decoding logic.
//! The classic trick of walking pointers past the end of the environment
//! block only holds on some platforms, so acquisition is kept out of the
//! decoder entirely: callers hand [`crate::auxv::decode`] a slice they
//! obtained through this module or by any other means.
//!
//! On Linux the kernel exports the process's own vector as raw bytes at
//! `/proc/self/auxv`; [`read_self`] reads that. Everything funnels
//! through [`entries_from_bytes`], which reinterprets a byte buffer as
//! native-endian key/value pairs and is fully testable off-platform. No
//! semantic validation happens here — terminator checking is the
//! decoder's job.

use crate::auxv::AuxEntry;
use std::io;
use std::mem;
use std::path::Path;
use thiserror::Error;

/// Where Linux exposes the current process's auxiliary vector.
pub const SELF_AUXV_PATH: &str = "/proc/self/auxv";

/// Size in bytes of one serialized key/value pair.
const PAIR_BYTES: usize = 2 * mem::size_of::<u64>();

/// Errors produced while acquiring a raw vector.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The byte buffer does not hold a whole number of key/value pairs.
    #[error("auxv buffer of {len} bytes is not a whole number of {PAIR_BYTES}-byte entries")]
    Truncated {
        /// Length of the offending buffer.
        len: usize,
    },

    /// Reading the underlying source failed.
    #[error("reading auxv source: {source}")]
    Io {
        /// The source I/O error.
        #[from]
        source: io::Error,
    },

    /// This platform exposes no auxiliary-vector source.
    #[error("no auxiliary-vector source on this platform")]
    Unsupported,
}

/// Reinterprets a raw byte buffer as native-endian key/value pairs.
///
/// A trailing partial pair means the buffer was cut mid-entry and is
/// rejected as [`SourceError::Truncated`].
pub fn entries_from_bytes(bytes: &[u8]) -> Result<Vec<AuxEntry>, SourceError> {
    if bytes.len() % PAIR_BYTES != 0 {
        return Err(SourceError::Truncated { len: bytes.len() });
    }
    let entries = bytes
        .chunks_exact(PAIR_BYTES)
        .map(|pair| AuxEntry::new(read_u64(pair, 0), read_u64(pair, mem::size_of::<u64>())))
        .collect();
    Ok(entries)
}

fn read_u64(bytes: &[u8], at: usize) -> u64 {
    let mut raw = [0u8; mem::size_of::<u64>()];
    raw.copy_from_slice(&bytes[at..at + mem::size_of::<u64>()]);
    u64::from_ne_bytes(raw)
}

/// Reads a serialized auxiliary vector from a file of raw pairs.
pub fn read_from(path: &Path) -> Result<Vec<AuxEntry>, SourceError> {
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read raw auxv bytes");
    entries_from_bytes(&bytes)
}

/// Reads the current process's auxiliary vector.
#[cfg(target_os = "linux")]
pub fn read_self() -> Result<Vec<AuxEntry>, SourceError> {
    read_from(Path::new(SELF_AUXV_PATH))
}

/// Reads the current process's auxiliary vector.
///
/// Only Linux exposes one; elsewhere this is [`SourceError::Unsupported`].
#[cfg(not(target_os = "linux"))]
pub fn read_self() -> Result<Vec<AuxEntry>, SourceError> {
    Err(SourceError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_pairs(pairs: &[(u64, u64)]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(pairs.len() * PAIR_BYTES);
        for (key, value) in pairs {
            bytes.extend_from_slice(&key.to_ne_bytes());
            bytes.extend_from_slice(&value.to_ne_bytes());
        }
        bytes
    }

    #[test]
    fn bytes_round_trip_into_entries() {
        let bytes = raw_pairs(&[(6, 4096), (9, 0x0040_0000), (0, 0)]);
        let entries = entries_from_bytes(&bytes).expect("whole pairs");
        assert_eq!(
            entries,
            [
                AuxEntry::new(6, 4096),
                AuxEntry::new(9, 0x0040_0000),
                AuxEntry::new(0, 0),
            ]
        );
    }

    #[test]
    fn empty_buffer_is_zero_entries() {
        assert!(entries_from_bytes(&[]).expect("empty is fine").is_empty());
    }

    #[test]
    fn partial_pair_is_rejected() {
        let mut bytes = raw_pairs(&[(6, 4096)]);
        bytes.pop();
        let err = entries_from_bytes(&bytes).expect_err("cut mid-entry");
        assert!(matches!(err, SourceError::Truncated { len } if len == PAIR_BYTES - 1));
    }

    #[test]
    fn read_from_missing_file_is_io() {
        let err = read_from(Path::new("/definitely/not/here")).expect_err("missing");
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn read_from_loads_a_serialized_vector() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("auxv.bin");
        std::fs::write(&path, raw_pairs(&[(6, 4096), (0, 0)])).expect("write");
        let entries = read_from(&path).expect("read back");
        assert_eq!(entries, [AuxEntry::new(6, 4096), AuxEntry::new(0, 0)]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn read_self_yields_a_terminated_vector() {
        use crate::auxv::decode;

        let entries = read_self().expect("procfs is available on Linux");
        let decoded = decode(&entries)
            .collect::<Result<Vec<_>, _>>()
            .expect("the kernel terminates its vector");
        assert!(decoded.last().expect("nonempty").entry.is_terminator());
    }
}
