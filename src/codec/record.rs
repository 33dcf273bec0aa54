use super::{BitCodec, FieldCodec};
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::name::NameCodec;
use crate::schema::{Field, RecordSchema};

const FIELD_COUNT_BITS: usize = 6;

/// Most fields a record can have.
pub const MAX_RECORD_FIELDS: usize = (1 << FIELD_COUNT_BITS) - 1;

/// Record codec: the record name, a 6-bit field count, then each field's name and schema in
/// declaration order.
pub(crate) struct RecordCodec<'a> {
    names: &'a NameCodec,
    fields: &'a FieldCodec,
    depth: usize,
}

impl<'a> RecordCodec<'a> {
    pub(crate) fn new(names: &'a NameCodec, fields: &'a FieldCodec, depth: usize) -> Self {
        Self {
            names,
            fields,
            depth,
        }
    }

    fn check_count(&self, record: &RecordSchema) -> Result<()> {
        if record.fields.len() > MAX_RECORD_FIELDS {
            return Err(Error::TooManyElements {
                kind: Kind::Record,
                max: MAX_RECORD_FIELDS,
                actual: record.fields.len(),
            });
        }
        Ok(())
    }
}

impl<'a> BitCodec for RecordCodec<'a> {
    type Item = RecordSchema;

    fn validate(&self, record: &RecordSchema) -> Result<()> {
        self.names.validate(&record.name)?;
        self.check_count(record)?;
        for field in record.fields.iter() {
            self.names.validate(&field.name)?;
            self.fields.validate_at(&field.schema, self.depth + 1)?;
        }
        Ok(())
    }

    fn size_of(&self, record: &RecordSchema) -> Result<usize> {
        self.check_count(record)?;
        let mut size = self.names.size_of(&record.name)? + FIELD_COUNT_BITS;
        for field in record.fields.iter() {
            size += self.names.size_of(&field.name)?;
            size += self.fields.size_of_at(&field.schema, self.depth + 1)?;
        }
        Ok(size)
    }

    fn encode(&self, record: &RecordSchema, buf: &mut BitWriter) -> Result<()> {
        self.check_count(record)?;
        self.names.encode(&record.name, buf)?;
        buf.append(record.fields.len() as u64, FIELD_COUNT_BITS)?;
        for field in record.fields.iter() {
            self.names.encode(&field.name, buf)?;
            self.fields.encode_at(&field.schema, buf, self.depth + 1)?;
        }
        Ok(())
    }

    fn decode(&self, buf: &mut BitReader) -> Result<RecordSchema> {
        let name = self.names.decode(buf)?;
        let count = buf.read(FIELD_COUNT_BITS)? as usize;
        let mut fields = Vec::with_capacity(count);
        for _ in 0..count {
            let field_name = self.names.decode(buf)?;
            let schema = self.fields.decode_at(buf, self.depth + 1)?;
            fields.push(Field::new(field_name, schema));
        }
        Ok(RecordSchema { name, fields })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::schema::Schema;

    fn record_with(n: usize) -> RecordSchema {
        (0..n).fold(RecordSchema::new("wide"), |r, i| {
            r.field(format!("f{}", i), Schema::Int)
        })
    }

    #[test]
    fn field_count_boundary() {
        let fields = FieldCodec::new();
        let codec = RecordCodec::new(&NameCodec, &fields, 0);
        assert!(codec.validate(&record_with(MAX_RECORD_FIELDS)).is_ok());
        assert_eq!(
            codec.validate(&record_with(MAX_RECORD_FIELDS + 1)),
            Err(Error::TooManyElements {
                kind: Kind::Record,
                max: 63,
                actual: 64
            })
        );
        let mut w = BitWriter::new();
        assert!(codec.encode(&record_with(64), &mut w).is_err());
    }

    #[test]
    fn widest_record_roundtrips() {
        let fields = FieldCodec::new();
        let codec = RecordCodec::new(&NameCodec, &fields, 0);
        let record = record_with(MAX_RECORD_FIELDS);
        let mut w = BitWriter::new();
        codec.encode(&record, &mut w).unwrap();
        assert_eq!(w.bit_len(), codec.size_of(&record).unwrap());
        let bytes = w.into_bytes();
        assert_eq!(codec.decode(&mut BitReader::new(&bytes)).unwrap(), record);
    }

    #[test]
    fn empty_record() {
        let fields = FieldCodec::new();
        let codec = RecordCodec::new(&NameCodec, &fields, 0);
        let record = RecordSchema::new("Empty");
        // name: 6 + 5*6, count: 6
        assert_eq!(codec.size_of(&record).unwrap(), 6 + 30 + 6);
        let mut w = BitWriter::new();
        codec.encode(&record, &mut w).unwrap();
        let bytes = w.into_bytes();
        assert_eq!(codec.decode(&mut BitReader::new(&bytes)).unwrap(), record);
    }

    #[test]
    fn bad_field_name() {
        let fields = FieldCodec::new();
        let codec = RecordCodec::new(&NameCodec, &fields, 0);
        let record = RecordSchema::new("r").field("has space", Schema::Null);
        assert_eq!(
            codec.validate(&record),
            Err(Error::InvalidCharacter {
                name: "has space".into(),
                ch: ' '
            })
        );
    }
}
