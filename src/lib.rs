//! # plfm-guid
//!
//! Fixed-layout 128-bit identifier codec: canonical hyphenated text, raw
//! bytes, and a persisted binary form.
//!
//! ## Design Principles
//!
//! - Guids are opaque 16-byte values; this crate never generates them
//! - Every input path is strictly validated; downstream code can treat a
//!   constructed [`Guid`] as structurally correct without re-checking
//! - The persisted form is the 16 raw bytes verbatim and must stay
//!   byte-compatible across versions; changing it is a breaking format change
//! - Parse and I/O failures are returned as typed errors, never logged here
//!
//! ## Text Format
//!
//! Five sections of hex digits separated by hyphens, covering byte-widths
//! `[4, 2, 2, 2, 6]` — 36 characters total. Input digits are
//! case-insensitive; output is always uppercase.
//!
//! ```
//! use plfm_guid::Guid;
//!
//! let guid = Guid::parse("3e11fa47-71ca-11e1-9e33-c80aa9429562")?;
//! assert_eq!(guid.to_string(), "3E11FA47-71CA-11E1-9E33-C80AA9429562");
//! # Ok::<(), plfm_guid::ParseGuidError>(())
//! ```
//!
//! ## Persisted Format
//!
//! [`Guid::write_to`] and [`Guid::read_from`] move the 16 raw bytes through
//! a caller-supplied channel with no framing. Read outcomes distinguish
//! clean end of stream from a truncated record and from channel failure;
//! write outcomes distinguish failures the channel already surfaced from
//! silent short writes the caller must report.

mod error;
mod guid;
mod io;

pub use error::{ParseGuidError, ReadGuidError, WriteGuidError, WrongByteLengthError};
pub use guid::{
    Guid, BIT_LENGTH, BYTES_PER_SECTION, BYTE_LENGTH, NUMBER_OF_SECTIONS, TEXT_LENGTH,
};
