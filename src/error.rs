//! Error types for GUID parsing and channel I/O.

use std::io;

use thiserror::Error;

use crate::{BYTE_LENGTH, TEXT_LENGTH};

/// Errors that can occur when parsing the canonical text form.
///
/// Parse failures are an expected, caller-handled condition; the codec never
/// logs them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseGuidError {
    /// The input is not exactly `TEXT_LENGTH` bytes long.
    #[error("guid text must be exactly {TEXT_LENGTH} characters, got {actual}")]
    WrongLength { actual: usize },

    /// The input has the right length but fails the grammar: a misplaced
    /// separator or a non-hex character at the given byte offset.
    #[error("malformed guid text at byte {offset}")]
    MalformedText { offset: usize },
}

impl ParseGuidError {
    /// Returns true if this error indicates an input of the wrong length.
    pub fn is_wrong_length(&self) -> bool {
        matches!(self, ParseGuidError::WrongLength { .. })
    }
}

/// Error for constructing a guid from a byte slice of the wrong length.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("guid must be exactly {BYTE_LENGTH} bytes, got {actual}")]
pub struct WrongByteLengthError {
    pub actual: usize,
}

/// Errors that can occur when reading the persisted form from a channel.
///
/// The three failure variants stay distinct so callers can tell "no more
/// records" from "a record started but is incomplete" from "the channel
/// itself failed".
#[derive(Debug, Error)]
pub enum ReadGuidError {
    /// The channel was already at end of stream; no record follows.
    #[error("end of stream")]
    EndOfStream,

    /// The channel ended partway through a record.
    #[error("truncated guid: read {read} of {BYTE_LENGTH} bytes")]
    Truncated { read: usize },

    /// The channel failed.
    #[error("i/o error reading guid: {0}")]
    Io(#[from] io::Error),
}

impl ReadGuidError {
    /// Returns true for a clean end of stream, as opposed to truncation or
    /// an I/O failure.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ReadGuidError::EndOfStream)
    }
}

/// Errors that can occur when writing the persisted form to a channel.
#[derive(Debug, Error)]
pub enum WriteGuidError {
    /// The channel surfaced the failure itself; callers should propagate
    /// this without reporting it a second time.
    #[error("i/o error writing guid: {0}")]
    Reported(#[from] io::Error),

    /// The channel accepted fewer than `BYTE_LENGTH` bytes without raising
    /// an error; the caller is responsible for reporting this.
    #[error("short write: wrote {written} of {BYTE_LENGTH} bytes")]
    Unreported { written: usize },
}

impl WriteGuidError {
    /// Returns true if the underlying channel already surfaced this failure.
    pub fn is_reported(&self) -> bool {
        matches!(self, WriteGuidError::Reported(_))
    }
}
