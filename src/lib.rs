//! schema-pack compacts recursive schema descriptions (records, unions, arrays, maps, enums, and
//! fixed-size blobs over the usual primitive types) into a dense bit-packed form, and rebuilds an
//! identical schema tree from it. It's meant for systems that store or send many structurally
//! similar schemas and want them far smaller than a textual or self-describing encoding.
//!
//! The compact form trades flexibility for size:
//!
//! - Names may only use `[0-9a-zA-Z_.]` and be at most 63 characters. Each character takes 6 bits.
//! - A record has at most 63 fields; unions and enums have at most 15 entries.
//! - A fixed type is at most 255 bytes.
//! - Documentation, default values, extra properties, and logical types aren't carried.
//!
//! Anything outside these limits is refused by [`validate`] before a single bit is written.
//!
//! # Format
//!
//! The bits are one continuous stream, most significant bit first, padded with zeros to a whole
//! byte at the end:
//!
//! 1. Format version, 4 bits. Currently always 1.
//! 2. The root schema node: a 4-bit kind tag, then the kind's payload, recursively. See
//!    [`codec`] for the payload of each kind.
//!
//! # Example
//!
//! ```
//! # use schema_pack::*;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = RecordSchema::new("a").field("b", Schema::Int).build();
//! let bytes = encode(&schema)?;
//! assert_eq!(bytes, [0x18, 0x04, 0xA0, 0x41, 0x2C, 0x80]);
//! assert_eq!(decode(&bytes)?, schema);
//! # Ok(())
//! # }
//! ```

mod bits;
mod compactor;
mod error;
mod kind;
mod name;
mod schema;
mod version;

pub mod codec;

pub use self::bits::{BitReader, BitWriter};
pub use self::codec::{BitCodec, FieldCodec};
pub use self::compactor::Compactor;
pub use self::error::{Error, Result};
pub use self::kind::{Kind, KindCodec, TAG_BITS};
pub use self::name::{NameCodec, ALPHABET, MAX_NAME_LEN};
pub use self::schema::{EnumSchema, Field, FixedSchema, RecordSchema, Schema};
pub use self::version::{VersionCodec, CURRENT_VERSION, MAX_VERSION};

static DEFAULT_COMPACTOR: Compactor = Compactor::new();

/// Check that a schema tree can be represented in the compact format.
pub fn validate(schema: &Schema) -> Result<()> {
    DEFAULT_COMPACTOR.validate(schema)
}

/// Length in bytes of the compact encoding of a schema tree.
pub fn size_of(schema: &Schema) -> Result<usize> {
    DEFAULT_COMPACTOR.size_of(schema)
}

/// Encode a schema tree into its compact form.
pub fn encode(schema: &Schema) -> Result<Vec<u8>> {
    DEFAULT_COMPACTOR.encode(schema)
}

/// Rebuild a schema tree from its compact form.
pub fn decode(bytes: &[u8]) -> Result<Schema> {
    DEFAULT_COMPACTOR.decode(bytes)
}
