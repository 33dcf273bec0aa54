use super::{BitCodec, FieldCodec};
use crate::bits::{BitReader, BitWriter};
use crate::error::Result;
use crate::schema::Schema;

/// Array codec. There's no header; the payload is just the element schema.
pub(crate) struct ArrayCodec<'a> {
    fields: &'a FieldCodec,
    depth: usize,
}

impl<'a> ArrayCodec<'a> {
    pub(crate) fn new(fields: &'a FieldCodec, depth: usize) -> Self {
        Self { fields, depth }
    }
}

impl<'a> BitCodec for ArrayCodec<'a> {
    type Item = Box<Schema>;

    fn validate(&self, element: &Box<Schema>) -> Result<()> {
        self.fields.validate_at(element, self.depth + 1)
    }

    fn size_of(&self, element: &Box<Schema>) -> Result<usize> {
        self.fields.size_of_at(element, self.depth + 1)
    }

    fn encode(&self, element: &Box<Schema>, buf: &mut BitWriter) -> Result<()> {
        self.fields.encode_at(element, buf, self.depth + 1)
    }

    fn decode(&self, buf: &mut BitReader) -> Result<Box<Schema>> {
        Ok(Box::new(self.fields.decode_at(buf, self.depth + 1)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::schema::RecordSchema;

    #[test]
    fn element_is_the_whole_payload() {
        let fields = FieldCodec::new();
        let codec = ArrayCodec::new(&fields, 0);
        let element = Box::new(Schema::Float);
        assert_eq!(codec.size_of(&element).unwrap(), 4);
        let mut w = BitWriter::new();
        codec.encode(&element, &mut w).unwrap();
        let bytes = w.into_bytes();
        assert_eq!(bytes, vec![0x40]);
        assert_eq!(codec.decode(&mut BitReader::new(&bytes)).unwrap(), element);
    }

    #[test]
    fn element_is_validated() {
        let fields = FieldCodec::new();
        let codec = ArrayCodec::new(&fields, 0);
        let element = Box::new(RecordSchema::new("x".repeat(70)).build());
        assert_eq!(
            codec.validate(&element),
            Err(Error::NameTooLong { max: 63, actual: 70 })
        );
    }
}
