//! The persisted form: 16 raw bytes against a caller-supplied byte channel.
//!
//! No framing, no checksum, no buffering — each call is one bounded read or
//! write sized at exactly [`BYTE_LENGTH`]. Serializing concurrent access to
//! a shared channel is the caller's responsibility.

use std::io::{self, Read, Write};

use crate::error::{ReadGuidError, WriteGuidError};
use crate::guid::{Guid, BYTE_LENGTH};

impl Guid {
    /// Writes the 16-byte persisted form to `channel`.
    ///
    /// The two failure variants keep the caller's reporting policy
    /// unambiguous: [`WriteGuidError::Reported`] carries a failure the
    /// channel already surfaced, while [`WriteGuidError::Unreported`] is a
    /// silent short write the caller must report itself.
    pub fn write_to<W: Write>(&self, channel: &mut W) -> Result<(), WriteGuidError> {
        loop {
            match channel.write(self.as_bytes()) {
                Ok(written) if written == BYTE_LENGTH => return Ok(()),
                Ok(written) => return Err(WriteGuidError::Unreported { written }),
                // An interrupted call wrote nothing; not an outcome the
                // caller can act on.
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(WriteGuidError::Reported(e)),
            }
        }
    }

    /// Reads a 16-byte persisted guid from `channel`.
    ///
    /// The outcomes stay distinguishable for the caller:
    /// - exactly [`BYTE_LENGTH`] bytes → the guid,
    /// - zero bytes → [`ReadGuidError::EndOfStream`] (no more records),
    /// - a partial record → [`ReadGuidError::Truncated`],
    /// - a channel failure → [`ReadGuidError::Io`].
    pub fn read_from<R: Read>(channel: &mut R) -> Result<Self, ReadGuidError> {
        let mut bytes = [0u8; BYTE_LENGTH];
        loop {
            match channel.read(&mut bytes) {
                Ok(0) => return Err(ReadGuidError::EndOfStream),
                Ok(read) if read < BYTE_LENGTH => {
                    return Err(ReadGuidError::Truncated { read })
                }
                Ok(_) => return Ok(Self::from_bytes(bytes)),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ReadGuidError::Io(e)),
            }
        }
    }
}
