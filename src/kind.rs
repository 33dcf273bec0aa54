//! The registry of schema kinds and their 4-bit wire tags.

use crate::bits::{BitReader, BitWriter};
use crate::codec::BitCodec;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of a kind tag on the wire.
pub const TAG_BITS: usize = 4;

/// The structural category of a schema node.
///
/// The discriminant is the wire tag: primitives take 0 through 7, structural kinds take 8 through
/// 13. Tags 14 and 15 are unassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Kind {
    Null = 0,
    Boolean = 1,
    Int = 2,
    Long = 3,
    Float = 4,
    Double = 5,
    String = 6,
    Bytes = 7,
    Record = 8,
    Union = 9,
    Array = 10,
    Map = 11,
    Enum = 12,
    Fixed = 13,
}

impl Kind {
    /// The leaf kinds, in tag order.
    pub const PRIMITIVES: [Kind; 8] = [
        Kind::Null,
        Kind::Boolean,
        Kind::Int,
        Kind::Long,
        Kind::Float,
        Kind::Double,
        Kind::String,
        Kind::Bytes,
    ];

    /// The recursive or named kinds, in tag order.
    pub const STRUCTURAL: [Kind; 6] = [
        Kind::Record,
        Kind::Union,
        Kind::Array,
        Kind::Map,
        Kind::Enum,
        Kind::Fixed,
    ];

    /// Wire tag for this kind.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its wire tag.
    pub fn from_tag(tag: u8) -> Result<Kind> {
        Kind::PRIMITIVES
            .iter()
            .chain(Kind::STRUCTURAL.iter())
            .copied()
            .find(|kind| kind.tag() == tag)
            .ok_or(Error::UnknownTag(tag))
    }

    pub fn is_primitive(self) -> bool {
        self.tag() < Kind::Record.tag()
    }

    /// The lowercase type name, as used in textual schema documents.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Int => "int",
            Kind::Long => "long",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::Record => "record",
            Kind::Union => "union",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Enum => "enum",
            Kind::Fixed => "fixed",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    /// Parse a type name. Anything outside the 14 supported kinds, including logical types like
    /// `uuid` or `timestamp-millis`, fails with [`Error::UnsupportedKind`].
    fn from_str(s: &str) -> Result<Self> {
        Kind::PRIMITIVES
            .iter()
            .chain(Kind::STRUCTURAL.iter())
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnsupportedKind(s.to_string()))
    }
}

/// Encodes and decodes kind tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct KindCodec;

impl BitCodec for KindCodec {
    type Item = Kind;

    fn validate(&self, _kind: &Kind) -> Result<()> {
        // Every Kind value has a tag.
        Ok(())
    }

    fn size_of(&self, _kind: &Kind) -> Result<usize> {
        Ok(TAG_BITS)
    }

    fn encode(&self, kind: &Kind, buf: &mut BitWriter) -> Result<()> {
        buf.append(kind.tag() as u64, TAG_BITS)
    }

    fn decode(&self, buf: &mut BitReader) -> Result<Kind> {
        Kind::from_tag(buf.read(TAG_BITS)? as u8)
    }
}
