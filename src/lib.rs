//! Standalone demonstrations of basic operating-system interaction.
//!
//! This crate collects a handful of small, isolated example programs:
//! a dense fixed-size matrix multiplication, a process-startup
//! introspection dump (arguments, environment, auxiliary vector), and an
//! elementary file write/seek/read round trip. The programs do not
//! interact with each other; each binary under `src/bin/` is a thin
//! driver over one library module so the underlying behavior stays
//! testable.
//!
//! The one piece with real decoding logic is [`auxv`], which maps the
//! numeric tags of a process's auxiliary vector to stable display labels
//! and walks the tag/value sequence up to its terminator under an
//! explicit scan bound. Acquiring the raw vector is platform business and
//! lives in [`source`]; the decoder itself only ever sees a borrowed
//! slice.
//!
//! # Example
//!
//! ```
//! use procprobe::auxv::{decode, AuxEntry};
//!
//! let entries = [AuxEntry::new(6, 4096), AuxEntry::new(0, 0)];
//! for labeled in decode(&entries) {
//!     println!("{}", labeled.unwrap());
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod auxv;
pub mod cli;
pub mod fsdemo;
pub mod matrix;
pub mod source;

pub use auxv::{decode, decode_with_limit, label_for, AuxEntry, AuxTag, DecodeError};
