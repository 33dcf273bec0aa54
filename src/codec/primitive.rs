use super::BitCodec;
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::schema::Schema;

/// Codec for one of the leaf kinds. The kind tag says everything, so the payload is empty.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PrimitiveCodec {
    kind: Kind,
}

impl PrimitiveCodec {
    pub(crate) fn new(kind: Kind) -> Result<Self> {
        if !kind.is_primitive() {
            return Err(Error::UnsupportedKind(kind.name().to_string()));
        }
        Ok(Self { kind })
    }
}

impl BitCodec for PrimitiveCodec {
    type Item = Schema;

    fn validate(&self, schema: &Schema) -> Result<()> {
        if schema.kind() != self.kind {
            return Err(Error::KindMismatch {
                expected: self.kind,
                actual: schema.kind(),
            });
        }
        Ok(())
    }

    fn size_of(&self, schema: &Schema) -> Result<usize> {
        self.validate(schema)?;
        Ok(0)
    }

    fn encode(&self, schema: &Schema, _buf: &mut BitWriter) -> Result<()> {
        self.validate(schema)
    }

    fn decode(&self, _buf: &mut BitReader) -> Result<Schema> {
        Schema::primitive(self.kind)
            .ok_or_else(|| Error::UnsupportedKind(self.kind.name().to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_primitive_kinds() {
        assert!(PrimitiveCodec::new(Kind::Bytes).is_ok());
        assert_eq!(
            PrimitiveCodec::new(Kind::Record).unwrap_err(),
            Error::UnsupportedKind("record".into())
        );
    }

    #[test]
    fn rejects_other_kinds() {
        let codec = PrimitiveCodec::new(Kind::Int).unwrap();
        assert_eq!(
            codec.validate(&Schema::Long),
            Err(Error::KindMismatch {
                expected: Kind::Int,
                actual: Kind::Long
            })
        );
        assert_eq!(codec.size_of(&Schema::Int).unwrap(), 0);
    }

    #[test]
    fn empty_payload() {
        let codec = PrimitiveCodec::new(Kind::Double).unwrap();
        let mut w = BitWriter::new();
        codec.encode(&Schema::Double, &mut w).unwrap();
        assert_eq!(w.bit_len(), 0);
        let mut r = BitReader::new(&[]);
        assert_eq!(codec.decode(&mut r).unwrap(), Schema::Double);
    }
}
