use super::{BitCodec, FieldCodec};
use crate::bits::{BitReader, BitWriter};
use crate::error::Result;
use crate::schema::Schema;

/// Map codec. Keys are always strings, so only the value schema is written.
pub(crate) struct MapCodec<'a> {
    fields: &'a FieldCodec,
    depth: usize,
}

impl<'a> MapCodec<'a> {
    pub(crate) fn new(fields: &'a FieldCodec, depth: usize) -> Self {
        Self { fields, depth }
    }
}

impl<'a> BitCodec for MapCodec<'a> {
    type Item = Box<Schema>;

    fn validate(&self, value: &Box<Schema>) -> Result<()> {
        self.fields.validate_at(value, self.depth + 1)
    }

    fn size_of(&self, value: &Box<Schema>) -> Result<usize> {
        self.fields.size_of_at(value, self.depth + 1)
    }

    fn encode(&self, value: &Box<Schema>, buf: &mut BitWriter) -> Result<()> {
        self.fields.encode_at(value, buf, self.depth + 1)
    }

    fn decode(&self, buf: &mut BitReader) -> Result<Box<Schema>> {
        let value = self.fields.decode_at(buf, self.depth + 1)?;
        Ok(Box::new(value))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn map_of_maps() {
        let fields = FieldCodec::new();
        let codec = MapCodec::new(&fields, 0);
        let value = Box::new(Schema::map(Schema::String));
        let mut w = BitWriter::new();
        codec.encode(&value, &mut w).unwrap();
        // Map tag (1011), String tag (0110)
        let bytes = w.into_bytes();
        assert_eq!(bytes, vec![0b1011_0110]);
        assert_eq!(codec.decode(&mut BitReader::new(&bytes)).unwrap(), value);
    }

    #[test]
    fn truncated_value() {
        let fields = FieldCodec::new();
        let codec = MapCodec::new(&fields, 0);
        assert!(codec.decode(&mut BitReader::new(&[])).is_err());
    }
}
