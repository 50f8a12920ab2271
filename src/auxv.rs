//! Auxiliary-vector decoding.
//!
//! The auxiliary vector is a list of key/value pairs the loader hands to a
//! freshly started process, describing execution-environment facts: page
//! size, program entry point, hardware capability flags, cache geometry,
//! and so on. The list ends with a terminator entry whose key is zero.
//!
//! This module does two things:
//!
//! - [`label_for`] maps a numeric tag to a stable display label, falling
//!   back to `"Unknown"` for tags outside the table.
//! - [`decode`] walks a borrowed entry slice up to and including the
//!   terminator, pairing each entry with its label.
//!
//! The walk is bounded. A naive scan keeps reading raw memory until it
//! happens to hit a zero key; here the window is capped by the slice
//! length and an explicit entry limit, and a window with no terminator is
//! a [`DecodeError::MalformedInput`] instead of an unbounded read.
//!
//! Locating the vector in the first place is a platform convention and is
//! deliberately not this module's job; see [`crate::source`].
//!
//! # Example
//!
//! ```
//! use procprobe::auxv::{decode, AuxEntry};
//!
//! let entries = [AuxEntry::new(6, 4096), AuxEntry::new(0, 0)];
//! let lines: Result<Vec<String>, _> =
//!     decode(&entries).map(|res| res.map(|l| l.to_string())).collect();
//! assert_eq!(lines.unwrap(), ["AtPagesz(6) => 4096", "AtNull(0) => 0"]);
//! ```

use core::fmt;
use core::iter::FusedIterator;
use serde::Serialize;
use thiserror::Error;

/// Default cap on the number of entries one decode pass will inspect.
///
/// Real auxiliary vectors are well under this size (a typical Linux
/// process carries twenty-some entries), so hitting the cap means the
/// input is not a terminated vector.
pub const DEFAULT_SCAN_LIMIT: usize = 64;

/// One key/value pair of the auxiliary vector.
///
/// The key is a numeric tag; the interpretation of the value depends on
/// the tag (a byte count, an address, a bitmask, a string pointer). The
/// decoder treats entries as opaque beyond the tag lookup and never
/// mutates them.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AuxEntry {
    /// Numeric tag identifying the meaning of this entry.
    pub key: u64,
    /// Payload; interpretation depends on `key`.
    pub value: u64,
}

impl AuxEntry {
    /// Creates an entry from a raw tag and value.
    #[must_use]
    pub const fn new(key: u64, value: u64) -> Self {
        Self { key, value }
    }

    /// Returns true for the end-of-vector entry (key 0).
    #[must_use]
    pub const fn is_terminator(&self) -> bool {
        self.key == 0
    }
}

// =========================================================================
// Tag table
// =========================================================================

/// Known auxiliary-vector tags.
///
/// The tag space is sparse: 0–17 are architecture neutral, 23–26 and 31
/// fill gaps left for historical values, 32–33 are x86-64 vDSO entries,
/// and 40–47 are PowerPC cache-geometry entries. Variant names double as
/// display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
#[allow(missing_docs)]
pub enum AuxTag {
    /// End of vector.
    AtNull = 0,
    /// Entry should be ignored.
    AtIgnore = 1,
    /// File descriptor of program.
    AtExecfd = 2,
    /// Program headers for program.
    AtPhdr = 3,
    /// Size of one program header entry.
    AtPhent = 4,
    /// Number of program headers.
    AtPhnum = 5,
    /// System page size.
    AtPagesz = 6,
    /// Base address of the program interpreter.
    AtBase = 7,
    /// Flags.
    AtFlags = 8,
    /// Entry point of program.
    AtEntry = 9,
    /// Program is not ELF.
    AtNotelf = 10,
    /// Real uid.
    AtUid = 11,
    /// Effective uid.
    AtEuid = 12,
    /// Real gid.
    AtGid = 13,
    /// Effective gid.
    AtEgid = 14,
    /// String identifying the CPU for optimizations.
    AtPlatform = 15,
    /// Arch-dependent hints at CPU capabilities.
    AtHwcap = 16,
    /// Frequency at which `times()` increments.
    AtClktck = 17,
    /// Secure-mode boolean.
    AtSecure = 23,
    /// String identifying the real platform; may differ from `AtPlatform`.
    AtBasePlatform = 24,
    /// Address of 16 random bytes.
    AtRandom = 25,
    /// Extension of `AtHwcap`.
    AtHwcap2 = 26,
    /// Filename of the program.
    AtExecFn = 31,
    /// Entry point to the system-call function in the vDSO.
    AtSysinfo = 32,
    /// Address of the vDSO page.
    AtSysinfoEhdr = 33,
    AtL1iCachesize = 40,
    AtL1iCachegeometry = 41,
    AtL1dCachesize = 42,
    AtL1dCachegeometry = 43,
    AtL2Cachesize = 44,
    AtL2Cachegeometry = 45,
    AtL3Cachesize = 46,
    AtL3Cachegeometry = 47,
}

impl AuxTag {
    /// Every known tag, in ascending raw order.
    pub const ALL: [Self; 33] = [
        Self::AtNull,
        Self::AtIgnore,
        Self::AtExecfd,
        Self::AtPhdr,
        Self::AtPhent,
        Self::AtPhnum,
        Self::AtPagesz,
        Self::AtBase,
        Self::AtFlags,
        Self::AtEntry,
        Self::AtNotelf,
        Self::AtUid,
        Self::AtEuid,
        Self::AtGid,
        Self::AtEgid,
        Self::AtPlatform,
        Self::AtHwcap,
        Self::AtClktck,
        Self::AtSecure,
        Self::AtBasePlatform,
        Self::AtRandom,
        Self::AtHwcap2,
        Self::AtExecFn,
        Self::AtSysinfo,
        Self::AtSysinfoEhdr,
        Self::AtL1iCachesize,
        Self::AtL1iCachegeometry,
        Self::AtL1dCachesize,
        Self::AtL1dCachegeometry,
        Self::AtL2Cachesize,
        Self::AtL2Cachegeometry,
        Self::AtL3Cachesize,
        Self::AtL3Cachegeometry,
    ];

    /// Resolves a raw tag value, if it is in the known table.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Option<Self> {
        Some(match raw {
            0 => Self::AtNull,
            1 => Self::AtIgnore,
            2 => Self::AtExecfd,
            3 => Self::AtPhdr,
            4 => Self::AtPhent,
            5 => Self::AtPhnum,
            6 => Self::AtPagesz,
            7 => Self::AtBase,
            8 => Self::AtFlags,
            9 => Self::AtEntry,
            10 => Self::AtNotelf,
            11 => Self::AtUid,
            12 => Self::AtEuid,
            13 => Self::AtGid,
            14 => Self::AtEgid,
            15 => Self::AtPlatform,
            16 => Self::AtHwcap,
            17 => Self::AtClktck,
            23 => Self::AtSecure,
            24 => Self::AtBasePlatform,
            25 => Self::AtRandom,
            26 => Self::AtHwcap2,
            31 => Self::AtExecFn,
            32 => Self::AtSysinfo,
            33 => Self::AtSysinfoEhdr,
            40 => Self::AtL1iCachesize,
            41 => Self::AtL1iCachegeometry,
            42 => Self::AtL1dCachesize,
            43 => Self::AtL1dCachegeometry,
            44 => Self::AtL2Cachesize,
            45 => Self::AtL2Cachegeometry,
            46 => Self::AtL3Cachesize,
            47 => Self::AtL3Cachegeometry,
            _ => return None,
        })
    }

    /// The raw numeric value of this tag.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self as u64
    }

    /// Stable display label for this tag.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AtNull => "AtNull",
            Self::AtIgnore => "AtIgnore",
            Self::AtExecfd => "AtExecfd",
            Self::AtPhdr => "AtPhdr",
            Self::AtPhent => "AtPhent",
            Self::AtPhnum => "AtPhnum",
            Self::AtPagesz => "AtPagesz",
            Self::AtBase => "AtBase",
            Self::AtFlags => "AtFlags",
            Self::AtEntry => "AtEntry",
            Self::AtNotelf => "AtNotelf",
            Self::AtUid => "AtUid",
            Self::AtEuid => "AtEuid",
            Self::AtGid => "AtGid",
            Self::AtEgid => "AtEgid",
            Self::AtPlatform => "AtPlatform",
            Self::AtHwcap => "AtHwcap",
            Self::AtClktck => "AtClktck",
            Self::AtSecure => "AtSecure",
            Self::AtBasePlatform => "AtBasePlatform",
            Self::AtRandom => "AtRandom",
            Self::AtHwcap2 => "AtHwcap2",
            Self::AtExecFn => "AtExecFn",
            Self::AtSysinfo => "AtSysinfo",
            Self::AtSysinfoEhdr => "AtSysinfoEhdr",
            Self::AtL1iCachesize => "AtL1iCachesize",
            Self::AtL1iCachegeometry => "AtL1iCachegeometry",
            Self::AtL1dCachesize => "AtL1dCachesize",
            Self::AtL1dCachegeometry => "AtL1dCachegeometry",
            Self::AtL2Cachesize => "AtL2Cachesize",
            Self::AtL2Cachegeometry => "AtL2Cachegeometry",
            Self::AtL3Cachesize => "AtL3Cachesize",
            Self::AtL3Cachegeometry => "AtL3Cachegeometry",
        }
    }
}

impl fmt::Display for AuxTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label used for tags outside the known table.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Maps a raw tag to its display label.
///
/// Total and pure: every input has a defined output, unknown tags resolve
/// to [`UNKNOWN_LABEL`]. Constant-time table lookup.
#[must_use]
pub const fn label_for(tag: u64) -> &'static str {
    match AuxTag::from_raw(tag) {
        Some(known) => known.label(),
        None => UNKNOWN_LABEL,
    }
}

// =========================================================================
// Decoding
// =========================================================================

/// Errors produced by a decode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No terminator entry appeared within the bounded scan window.
    ///
    /// The window is the shorter of the input slice and the configured
    /// entry limit; the decoder never inspects anything past it.
    #[error("no terminator entry within {scanned} entries (scan limit {limit})")]
    MalformedInput {
        /// Entries inspected before giving up.
        scanned: usize,
        /// The configured scan limit.
        limit: usize,
    },
}

/// An entry paired with its resolved display label.
///
/// `Display` renders the stable one-line form `label(key) => value`, e.g.
/// `AtPagesz(6) => 4096`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Labeled {
    /// Resolved display label for the entry's key.
    pub label: &'static str,
    /// The underlying entry.
    #[serde(flatten)]
    pub entry: AuxEntry,
}

impl fmt::Display for Labeled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) => {}",
            self.label, self.entry.key, self.entry.value
        )
    }
}

/// Lazy decode pass over a borrowed entry slice.
///
/// Yields one `Ok(`[`Labeled`]`)` per entry up to and including the
/// terminator, then fuses. If the window (slice length capped by the scan
/// limit) is exhausted without a terminator, yields a single
/// `Err(`[`DecodeError::MalformedInput`]`)` after the scanned prefix and
/// fuses. The pass borrows the slice and is not restartable; decoding
/// again means re-acquiring the view.
#[derive(Debug)]
pub struct Decode<'a> {
    entries: &'a [AuxEntry],
    pos: usize,
    limit: usize,
    done: bool,
}

/// Decodes `entries` with the default scan limit.
///
/// See [`Decode`] for iteration semantics and [`decode_with_limit`] for
/// an explicit cap.
#[must_use]
pub fn decode(entries: &[AuxEntry]) -> Decode<'_> {
    decode_with_limit(entries, DEFAULT_SCAN_LIMIT)
}

/// Decodes `entries`, inspecting at most `limit` of them.
#[must_use]
pub fn decode_with_limit(entries: &[AuxEntry], limit: usize) -> Decode<'_> {
    Decode {
        entries,
        pos: 0,
        limit,
        done: false,
    }
}

/// Eagerly decodes the whole vector.
///
/// Unlike iterating [`Decode`] by hand, a malformed input yields no
/// partial output: the pass aborts and only the error comes back.
pub fn decode_all(entries: &[AuxEntry], limit: usize) -> Result<Vec<Labeled>, DecodeError> {
    decode_with_limit(entries, limit).collect()
}

impl<'a> Iterator for Decode<'a> {
    type Item = Result<Labeled, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let window = self.entries.len().min(self.limit);
        if self.pos >= window {
            self.done = true;
            tracing::warn!(
                scanned = self.pos,
                limit = self.limit,
                "auxiliary vector has no terminator within the scan window"
            );
            return Some(Err(DecodeError::MalformedInput {
                scanned: self.pos,
                limit: self.limit,
            }));
        }
        let entry = self.entries[self.pos];
        self.pos += 1;
        if entry.is_terminator() {
            // Entries past the terminator, if any, are never inspected.
            self.done = true;
        }
        Some(Ok(Labeled {
            label: label_for(entry.key),
            entry,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // At most the remaining window plus one trailing error.
            (1, Some(self.entries.len().min(self.limit) - self.pos + 1))
        }
    }
}

impl FusedIterator for Decode<'_> {}
