use crate::kind::Kind;
use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while validating, encoding, or decoding a schema.
///
/// None of these are transient. Validation failures mean the schema can't be represented in the
/// compact format, and decode failures mean the byte stream is corrupt or from an unknown format
/// version. Retrying without changing the input will fail the same way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An identifier contained a character outside of `[0-9a-zA-Z_.]`.
    InvalidCharacter { name: String, ch: char },
    /// An identifier was longer than the length prefix can hold.
    NameTooLong { max: usize, actual: usize },
    /// A record, union, or enum had more entries than its count field can hold.
    TooManyElements {
        kind: Kind,
        max: usize,
        actual: usize,
    },
    /// A fixed schema's byte size didn't fit in its size field.
    SizeOutOfRange { max: usize, actual: usize },
    /// A type name that has no compact representation, like a logical type.
    UnsupportedKind(String),
    /// A codec for one kind was handed a schema of a different kind.
    KindMismatch { expected: Kind, actual: Kind },
    /// Decoding hit a kind tag with no assigned kind.
    UnknownTag(u8),
    /// Decoding hit a format version this crate doesn't understand.
    UnsupportedVersion(u8),
    /// Tried to read more bits than were left in the buffer.
    BufferUnderflow { requested: usize, remaining: usize },
    /// Tried to write a value that doesn't fit in its bit width.
    ValueOverflow { value: u64, width: usize },
    /// Schema nesting went past the configured maximum depth.
    DepthLimit(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidCharacter { ref name, ch } => {
                write!(f, "Name {:?} contains unsupported character {:?}", name, ch)
            }
            Error::NameTooLong { max, actual } => write!(
                f,
                "Name has a maximum length of {}, but was {} characters",
                max, actual
            ),
            Error::TooManyElements { kind, max, actual } => write!(
                f,
                "A {} supports up to {} elements, but had {}",
                kind, max, actual
            ),
            Error::SizeOutOfRange { max, actual } => write!(
                f,
                "Fixed size can be at most {} bytes, but was {}",
                max, actual
            ),
            Error::UnsupportedKind(ref name) => write!(f, "Type {:?} is not supported", name),
            Error::KindMismatch { expected, actual } => {
                write!(f, "Expected a {} schema, but got a {}", expected, actual)
            }
            Error::UnknownTag(tag) => write!(f, "Unrecognized kind tag {}", tag),
            Error::UnsupportedVersion(version) => {
                write!(f, "Compact format version {} is not supported", version)
            }
            Error::BufferUnderflow {
                requested,
                remaining,
            } => write!(
                f,
                "Tried to read {} bits, but only {} were left",
                requested, remaining
            ),
            Error::ValueOverflow { value, width } => {
                write!(f, "Value {} doesn't fit in {} bits", value, width)
            }
            Error::DepthLimit(max) => write!(f, "Schema nesting exceeded depth limit of {}", max),
        }
    }
}

impl std::error::Error for Error {}
