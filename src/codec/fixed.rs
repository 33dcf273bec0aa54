use super::BitCodec;
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::name::NameCodec;
use crate::schema::FixedSchema;

const SIZE_BITS: usize = 8;

/// Largest fixed size, in bytes.
pub const MAX_FIXED_SIZE: usize = (1 << SIZE_BITS) - 1;

/// Fixed codec: the name, then the byte size in 8 bits.
pub(crate) struct FixedCodec<'a> {
    names: &'a NameCodec,
}

impl<'a> FixedCodec<'a> {
    pub(crate) fn new(names: &'a NameCodec) -> Self {
        Self { names }
    }

    fn check_size(&self, fixed: &FixedSchema) -> Result<()> {
        if fixed.size > MAX_FIXED_SIZE {
            return Err(Error::SizeOutOfRange {
                max: MAX_FIXED_SIZE,
                actual: fixed.size,
            });
        }
        Ok(())
    }
}

impl<'a> BitCodec for FixedCodec<'a> {
    type Item = FixedSchema;

    fn validate(&self, fixed: &FixedSchema) -> Result<()> {
        self.names.validate(&fixed.name)?;
        self.check_size(fixed)
    }

    fn size_of(&self, fixed: &FixedSchema) -> Result<usize> {
        self.check_size(fixed)?;
        Ok(self.names.size_of(&fixed.name)? + SIZE_BITS)
    }

    fn encode(&self, fixed: &FixedSchema, buf: &mut BitWriter) -> Result<()> {
        self.check_size(fixed)?;
        self.names.encode(&fixed.name, buf)?;
        buf.append(fixed.size as u64, SIZE_BITS)
    }

    fn decode(&self, buf: &mut BitReader) -> Result<FixedSchema> {
        let name = self.names.decode(buf)?;
        let size = buf.read(SIZE_BITS)? as usize;
        Ok(FixedSchema { name, size })
    }
}
