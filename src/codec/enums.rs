use super::BitCodec;
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::name::NameCodec;
use crate::schema::EnumSchema;

const SYMBOL_COUNT_BITS: usize = 4;

/// Most symbols an enum can have.
pub const MAX_ENUM_SYMBOLS: usize = (1 << SYMBOL_COUNT_BITS) - 1;

/// Enum codec: the enum name, a 4-bit symbol count, then each symbol as a name.
pub(crate) struct EnumCodec<'a> {
    names: &'a NameCodec,
}

impl<'a> EnumCodec<'a> {
    pub(crate) fn new(names: &'a NameCodec) -> Self {
        Self { names }
    }

    fn check_count(&self, enumeration: &EnumSchema) -> Result<()> {
        if enumeration.symbols.len() > MAX_ENUM_SYMBOLS {
            return Err(Error::TooManyElements {
                kind: Kind::Enum,
                max: MAX_ENUM_SYMBOLS,
                actual: enumeration.symbols.len(),
            });
        }
        Ok(())
    }
}

impl<'a> BitCodec for EnumCodec<'a> {
    type Item = EnumSchema;

    fn validate(&self, enumeration: &EnumSchema) -> Result<()> {
        self.names.validate(&enumeration.name)?;
        self.check_count(enumeration)?;
        enumeration
            .symbols
            .iter()
            .try_for_each(|symbol| self.names.validate(symbol))
    }

    fn size_of(&self, enumeration: &EnumSchema) -> Result<usize> {
        self.check_count(enumeration)?;
        let mut size = self.names.size_of(&enumeration.name)? + SYMBOL_COUNT_BITS;
        for symbol in enumeration.symbols.iter() {
            size += self.names.size_of(symbol)?;
        }
        Ok(size)
    }

    fn encode(&self, enumeration: &EnumSchema, buf: &mut BitWriter) -> Result<()> {
        self.check_count(enumeration)?;
        self.names.encode(&enumeration.name, buf)?;
        buf.append(enumeration.symbols.len() as u64, SYMBOL_COUNT_BITS)?;
        for symbol in enumeration.symbols.iter() {
            self.names.encode(symbol, buf)?;
        }
        Ok(())
    }

    fn decode(&self, buf: &mut BitReader) -> Result<EnumSchema> {
        let name = self.names.decode(buf)?;
        let count = buf.read(SYMBOL_COUNT_BITS)? as usize;
        let symbols = (0..count)
            .map(|_| self.names.decode(buf))
            .collect::<Result<Vec<String>>>()?;
        Ok(EnumSchema { name, symbols })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn enum_with(n: usize) -> EnumSchema {
        (0..n).fold(EnumSchema::new("Letters"), |e, i| {
            e.symbol(((b'A' + i as u8) as char).to_string())
        })
    }

    #[test]
    fn symbol_count_boundary() {
        let codec = EnumCodec::new(&NameCodec);
        assert!(codec.validate(&enum_with(MAX_ENUM_SYMBOLS)).is_ok());
        assert_eq!(
            codec.validate(&enum_with(16)),
            Err(Error::TooManyElements {
                kind: Kind::Enum,
                max: 15,
                actual: 16
            })
        );
    }

    #[test]
    fn symbols_keep_order() {
        let codec = EnumCodec::new(&NameCodec);
        let enumeration = EnumSchema::new("Dir")
            .symbol("WEST")
            .symbol("EAST")
            .symbol("NORTH");
        let mut w = BitWriter::new();
        codec.encode(&enumeration, &mut w).unwrap();
        assert_eq!(w.bit_len(), codec.size_of(&enumeration).unwrap());
        let bytes = w.into_bytes();
        assert_eq!(codec.decode(&mut BitReader::new(&bytes)).unwrap(), enumeration);
    }

    #[test]
    fn bad_symbol() {
        let codec = EnumCodec::new(&NameCodec);
        let enumeration = EnumSchema::new("E").symbol("OK").symbol("NOT-OK");
        assert_eq!(
            codec.validate(&enumeration),
            Err(Error::InvalidCharacter {
                name: "NOT-OK".into(),
                ch: '-'
            })
        );
    }
}
