use crate::bits::{BitReader, BitWriter};
use crate::codec::{BitCodec, FieldCodec, DEFAULT_MAX_DEPTH};
use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::version::{VersionCodec, CURRENT_VERSION};
use log::{debug, trace};

/// Compacts whole schema trees: a 4-bit format version, then the root schema node.
///
/// A `Compactor` holds no state between calls, so one can be shared freely across threads. The
/// crate-level [`encode`][crate::encode], [`decode`][crate::decode], [`size_of`][crate::size_of],
/// and [`validate`][crate::validate] functions use a default one.
///
/// ```
/// # use schema_pack::*;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let compactor = Compactor::new().max_depth(16);
/// let schema = RecordSchema::new("Point")
///     .field("x", Schema::Double)
///     .field("y", Schema::Double)
///     .build();
/// let bytes = compactor.encode(&schema)?;
/// assert_eq!(bytes.len(), compactor.size_of(&schema)?);
/// assert_eq!(compactor.decode(&bytes)?, schema);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Compactor {
    version: VersionCodec,
    fields: FieldCodec,
}

impl Default for Compactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compactor {
    pub const fn new() -> Self {
        Self {
            version: VersionCodec,
            fields: FieldCodec::with_max_depth(DEFAULT_MAX_DEPTH),
        }
    }

    /// Set how many levels of nesting below the root schema are allowed, when encoding or
    /// decoding.
    pub fn max_depth(self, max_depth: usize) -> Self {
        Self {
            version: self.version,
            fields: FieldCodec::with_max_depth(max_depth),
        }
    }

    /// Check that a schema tree can be represented, without encoding it.
    pub fn validate(&self, schema: &Schema) -> Result<()> {
        self.fields.validate(schema).map_err(|e| {
            trace!("Rejected {} schema: {}", schema.kind(), e);
            e
        })
    }

    /// Number of bytes [`encode`][Self::encode] will produce for this schema.
    pub fn size_of(&self, schema: &Schema) -> Result<usize> {
        Ok((self.size_of_bits(schema)? + 7) / 8)
    }

    fn size_of_bits(&self, schema: &Schema) -> Result<usize> {
        self.validate(schema)?;
        Ok(self.version.size_of(&CURRENT_VERSION)? + self.fields.size_of(schema)?)
    }

    /// Encode a schema tree. Nothing is written unless the whole tree validates.
    pub fn encode(&self, schema: &Schema) -> Result<Vec<u8>> {
        let bits = self.size_of_bits(schema)?;
        let mut buf = BitWriter::with_capacity(bits);
        self.version.encode(&CURRENT_VERSION, &mut buf)?;
        self.fields.encode(schema, &mut buf)?;
        debug_assert_eq!(buf.bit_len(), bits);
        let bytes = buf.into_bytes();
        debug!(
            "Encoded {} schema into {} bits ({} bytes)",
            schema.kind(),
            bits,
            bytes.len()
        );
        Ok(bytes)
    }

    /// Decode a schema tree. Trailing pad bits after the tree are ignored.
    pub fn decode(&self, bytes: &[u8]) -> Result<Schema> {
        let mut buf = BitReader::new(bytes);
        let version = self.version.decode(&mut buf)?;
        if version != CURRENT_VERSION {
            trace!("Refusing compact schema with version {}", version);
            return Err(Error::UnsupportedVersion(version));
        }
        let schema = self.fields.decode(&mut buf).map_err(|e| {
            trace!("Failed decoding at bit {} of {}: {}", buf.position(), bytes.len() * 8, e);
            e
        })?;
        debug!(
            "Decoded {} schema from {} bits ({} bytes)",
            schema.kind(),
            buf.position(),
            bytes.len()
        );
        Ok(schema)
    }
}
