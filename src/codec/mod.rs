//! The per-kind codecs and the recursive field codec that ties them together.
//!
//! Each schema node is written as a 4-bit kind tag followed by that kind's payload:
//!
//! | Kind      | Payload                                                         |
//! | --------- | --------------------------------------------------------------- |
//! | primitive | nothing                                                         |
//! | Record    | name, 6-bit field count, then per field: name, nested schema    |
//! | Union     | 4-bit alternative count, then each nested schema                |
//! | Array     | nested element schema                                           |
//! | Map       | nested value schema                                             |
//! | Enum      | name, 4-bit symbol count, then each symbol name                 |
//! | Fixed     | name, 8-bit size                                                |
//!
//! Structural codecs don't own the [`FieldCodec`]; they borrow it for the duration of one call,
//! along with the depth of the node they're working on.

mod array;
mod enums;
mod fixed;
mod map;
mod primitive;
mod record;
mod union;

pub use self::enums::MAX_ENUM_SYMBOLS;
pub use self::fixed::MAX_FIXED_SIZE;
pub use self::record::MAX_RECORD_FIELDS;
pub use self::union::MAX_UNION_ALTERNATIVES;

use self::array::ArrayCodec;
use self::enums::EnumCodec;
use self::fixed::FixedCodec;
use self::map::MapCodec;
use self::primitive::PrimitiveCodec;
use self::record::RecordCodec;
use self::union::UnionCodec;

use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::kind::{Kind, KindCodec};
use crate::name::NameCodec;
use crate::schema::Schema;

/// Default limit on schema nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// A codec for one piece of the compact format.
///
/// Sizes are in bits. `size_of` and `encode` refuse anything `validate` would refuse, so a
/// successful `encode` always produces something `decode` can read back.
pub trait BitCodec {
    type Item;

    /// Check that `item` can be represented.
    fn validate(&self, item: &Self::Item) -> Result<()>;

    /// Number of bits `encode` will write for `item`.
    fn size_of(&self, item: &Self::Item) -> Result<usize>;

    fn encode(&self, item: &Self::Item, buf: &mut BitWriter) -> Result<()>;

    fn decode(&self, buf: &mut BitReader) -> Result<Self::Item>;
}

/// Encodes and decodes any schema node, recursing into its children.
#[derive(Clone, Debug)]
pub struct FieldCodec {
    names: NameCodec,
    max_depth: usize,
}

impl Default for FieldCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldCodec {
    pub const fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// A codec that refuses schemas nested more than `max_depth` levels below the root.
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            names: NameCodec,
            max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::DepthLimit(self.max_depth));
        }
        Ok(())
    }

    pub(crate) fn validate_at(&self, schema: &Schema, depth: usize) -> Result<()> {
        self.enter(depth)?;
        KindCodec.validate(&schema.kind())?;
        match schema {
            Schema::Null
            | Schema::Boolean
            | Schema::Int
            | Schema::Long
            | Schema::Float
            | Schema::Double
            | Schema::String
            | Schema::Bytes => PrimitiveCodec::new(schema.kind())?.validate(schema),
            Schema::Record(record) => RecordCodec::new(&self.names, self, depth).validate(record),
            Schema::Union(alternatives) => UnionCodec::new(self, depth).validate(alternatives),
            Schema::Array(element) => ArrayCodec::new(self, depth).validate(element),
            Schema::Map(value) => MapCodec::new(self, depth).validate(value),
            Schema::Enum(enumeration) => EnumCodec::new(&self.names).validate(enumeration),
            Schema::Fixed(fixed) => FixedCodec::new(&self.names).validate(fixed),
        }
    }

    pub(crate) fn size_of_at(&self, schema: &Schema, depth: usize) -> Result<usize> {
        self.enter(depth)?;
        let tag = KindCodec.size_of(&schema.kind())?;
        let payload = match schema {
            Schema::Null
            | Schema::Boolean
            | Schema::Int
            | Schema::Long
            | Schema::Float
            | Schema::Double
            | Schema::String
            | Schema::Bytes => PrimitiveCodec::new(schema.kind())?.size_of(schema)?,
            Schema::Record(record) => RecordCodec::new(&self.names, self, depth).size_of(record)?,
            Schema::Union(alternatives) => UnionCodec::new(self, depth).size_of(alternatives)?,
            Schema::Array(element) => ArrayCodec::new(self, depth).size_of(element)?,
            Schema::Map(value) => MapCodec::new(self, depth).size_of(value)?,
            Schema::Enum(enumeration) => EnumCodec::new(&self.names).size_of(enumeration)?,
            Schema::Fixed(fixed) => FixedCodec::new(&self.names).size_of(fixed)?,
        };
        Ok(tag + payload)
    }

    pub(crate) fn encode_at(&self, schema: &Schema, buf: &mut BitWriter, depth: usize) -> Result<()> {
        self.enter(depth)?;
        KindCodec.encode(&schema.kind(), buf)?;
        match schema {
            Schema::Null
            | Schema::Boolean
            | Schema::Int
            | Schema::Long
            | Schema::Float
            | Schema::Double
            | Schema::String
            | Schema::Bytes => PrimitiveCodec::new(schema.kind())?.encode(schema, buf),
            Schema::Record(record) => {
                RecordCodec::new(&self.names, self, depth).encode(record, buf)
            }
            Schema::Union(alternatives) => UnionCodec::new(self, depth).encode(alternatives, buf),
            Schema::Array(element) => ArrayCodec::new(self, depth).encode(element, buf),
            Schema::Map(value) => MapCodec::new(self, depth).encode(value, buf),
            Schema::Enum(enumeration) => EnumCodec::new(&self.names).encode(enumeration, buf),
            Schema::Fixed(fixed) => FixedCodec::new(&self.names).encode(fixed, buf),
        }
    }

    pub(crate) fn decode_at(&self, buf: &mut BitReader, depth: usize) -> Result<Schema> {
        self.enter(depth)?;
        let kind = KindCodec.decode(buf)?;
        Ok(match kind {
            Kind::Null
            | Kind::Boolean
            | Kind::Int
            | Kind::Long
            | Kind::Float
            | Kind::Double
            | Kind::String
            | Kind::Bytes => PrimitiveCodec::new(kind)?.decode(buf)?,
            Kind::Record => {
                Schema::Record(RecordCodec::new(&self.names, self, depth).decode(buf)?)
            }
            Kind::Union => Schema::Union(UnionCodec::new(self, depth).decode(buf)?),
            Kind::Array => Schema::Array(ArrayCodec::new(self, depth).decode(buf)?),
            Kind::Map => Schema::Map(MapCodec::new(self, depth).decode(buf)?),
            Kind::Enum => Schema::Enum(EnumCodec::new(&self.names).decode(buf)?),
            Kind::Fixed => Schema::Fixed(FixedCodec::new(&self.names).decode(buf)?),
        })
    }
}

impl BitCodec for FieldCodec {
    type Item = Schema;

    fn validate(&self, schema: &Schema) -> Result<()> {
        self.validate_at(schema, 0)
    }

    fn size_of(&self, schema: &Schema) -> Result<usize> {
        self.validate(schema)?;
        self.size_of_at(schema, 0)
    }

    fn encode(&self, schema: &Schema, buf: &mut BitWriter) -> Result<()> {
        self.validate(schema)?;
        self.encode_at(schema, buf, 0)
    }

    fn decode(&self, buf: &mut BitReader) -> Result<Schema> {
        self.decode_at(buf, 0)
    }
}
