use super::{BitCodec, FieldCodec};
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::schema::Schema;

const ALTERNATIVE_COUNT_BITS: usize = 4;

/// Most alternatives a union can have.
pub const MAX_UNION_ALTERNATIVES: usize = (1 << ALTERNATIVE_COUNT_BITS) - 1;

/// Union codec: a 4-bit alternative count, then each alternative in order.
pub(crate) struct UnionCodec<'a> {
    fields: &'a FieldCodec,
    depth: usize,
}

impl<'a> UnionCodec<'a> {
    pub(crate) fn new(fields: &'a FieldCodec, depth: usize) -> Self {
        Self { fields, depth }
    }

    fn check_count(&self, alternatives: &[Schema]) -> Result<()> {
        if alternatives.len() > MAX_UNION_ALTERNATIVES {
            return Err(Error::TooManyElements {
                kind: Kind::Union,
                max: MAX_UNION_ALTERNATIVES,
                actual: alternatives.len(),
            });
        }
        Ok(())
    }
}

impl<'a> BitCodec for UnionCodec<'a> {
    type Item = Vec<Schema>;

    fn validate(&self, alternatives: &Vec<Schema>) -> Result<()> {
        self.check_count(alternatives)?;
        alternatives
            .iter()
            .try_for_each(|alt| self.fields.validate_at(alt, self.depth + 1))
    }

    fn size_of(&self, alternatives: &Vec<Schema>) -> Result<usize> {
        self.check_count(alternatives)?;
        alternatives.iter().try_fold(ALTERNATIVE_COUNT_BITS, |size, alt| {
            Ok(size + self.fields.size_of_at(alt, self.depth + 1)?)
        })
    }

    fn encode(&self, alternatives: &Vec<Schema>, buf: &mut BitWriter) -> Result<()> {
        self.check_count(alternatives)?;
        buf.append(alternatives.len() as u64, ALTERNATIVE_COUNT_BITS)?;
        for alt in alternatives.iter() {
            self.fields.encode_at(alt, buf, self.depth + 1)?;
        }
        Ok(())
    }

    fn decode(&self, buf: &mut BitReader) -> Result<Vec<Schema>> {
        let count = buf.read(ALTERNATIVE_COUNT_BITS)? as usize;
        (0..count)
            .map(|_| self.fields.decode_at(buf, self.depth + 1))
            .collect()
    }
}
