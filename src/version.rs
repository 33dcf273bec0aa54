use crate::bits::{BitReader, BitWriter};
use crate::codec::BitCodec;
use crate::error::{Error, Result};

const VERSION_BITS: usize = 4;

/// Highest version number the version field can hold.
pub const MAX_VERSION: u8 = (1 << VERSION_BITS) - 1;

/// The compact format version written by this crate, and the only one it decodes.
pub const CURRENT_VERSION: u8 = 1;

/// Encodes and decodes the format version that leads every compacted schema.
#[derive(Clone, Copy, Debug, Default)]
pub struct VersionCodec;

impl BitCodec for VersionCodec {
    type Item = u8;

    fn validate(&self, version: &u8) -> Result<()> {
        if *version > MAX_VERSION {
            return Err(Error::UnsupportedVersion(*version));
        }
        Ok(())
    }

    fn size_of(&self, version: &u8) -> Result<usize> {
        self.validate(version)?;
        Ok(VERSION_BITS)
    }

    fn encode(&self, version: &u8, buf: &mut BitWriter) -> Result<()> {
        self.validate(version)?;
        buf.append(*version as u64, VERSION_BITS)
    }

    /// Reads the version field without judging it; the caller decides which versions it
    /// understands.
    fn decode(&self, buf: &mut BitReader) -> Result<u8> {
        Ok(buf.read(VERSION_BITS)? as u8)
    }
}
