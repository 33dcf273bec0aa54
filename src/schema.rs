//! The schema tree that gets compacted.

use crate::kind::Kind;
use serde::{Deserialize, Serialize};

/// A schema node. Each node owns its children outright; there is no sharing or back-reference
/// between nodes, so a tree is always finite and acyclic.
///
/// Primitive kinds carry nothing. Structural kinds are built with [`RecordSchema`],
/// [`EnumSchema`], [`FixedSchema`], [`Schema::union`], [`Schema::array`], and [`Schema::map`]:
///
/// ```
/// # use schema_pack::*;
/// let user = RecordSchema::new("User")
///     .field("id", Schema::Long)
///     .field("email", Schema::union([Schema::Null, Schema::String]))
///     .field("tags", Schema::array(Schema::String))
///     .build();
/// assert_eq!(user.kind(), Kind::Record);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schema {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
    Bytes,
    Record(RecordSchema),
    /// Alternatives, in order. The order is significant.
    Union(Vec<Schema>),
    /// Element type.
    Array(Box<Schema>),
    /// Value type. Keys are always strings and aren't modeled.
    Map(Box<Schema>),
    Enum(EnumSchema),
    Fixed(FixedSchema),
}

impl Schema {
    pub fn kind(&self) -> Kind {
        match self {
            Schema::Null => Kind::Null,
            Schema::Boolean => Kind::Boolean,
            Schema::Int => Kind::Int,
            Schema::Long => Kind::Long,
            Schema::Float => Kind::Float,
            Schema::Double => Kind::Double,
            Schema::String => Kind::String,
            Schema::Bytes => Kind::Bytes,
            Schema::Record(_) => Kind::Record,
            Schema::Union(_) => Kind::Union,
            Schema::Array(_) => Kind::Array,
            Schema::Map(_) => Kind::Map,
            Schema::Enum(_) => Kind::Enum,
            Schema::Fixed(_) => Kind::Fixed,
        }
    }

    /// The payload-free schema for a primitive kind. Returns `None` for structural kinds.
    pub fn primitive(kind: Kind) -> Option<Schema> {
        Some(match kind {
            Kind::Null => Schema::Null,
            Kind::Boolean => Schema::Boolean,
            Kind::Int => Schema::Int,
            Kind::Long => Schema::Long,
            Kind::Float => Schema::Float,
            Kind::Double => Schema::Double,
            Kind::String => Schema::String,
            Kind::Bytes => Schema::Bytes,
            Kind::Record | Kind::Union | Kind::Array | Kind::Map | Kind::Enum | Kind::Fixed => {
                return None
            }
        })
    }

    pub fn union(alternatives: impl IntoIterator<Item = Schema>) -> Schema {
        Schema::Union(alternatives.into_iter().collect())
    }

    pub fn array(element: Schema) -> Schema {
        Schema::Array(Box::new(element))
    }

    pub fn map(value: Schema) -> Schema {
        Schema::Map(Box::new(value))
    }
}

/// A named field inside a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub schema: Schema,
}

impl Field {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// A named record. Field order is both the wire order and the record's layout, and is preserved
/// exactly through encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<Field>,
}

impl RecordSchema {
    /// Start an empty record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.push(Field::new(name, schema));
        self
    }

    /// Build this into a [`Schema`].
    pub fn build(self) -> Schema {
        Schema::Record(self)
    }
}

/// A named enumeration of symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSchema {
    pub name: String,
    pub symbols: Vec<String>,
}

impl EnumSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: Vec::new(),
        }
    }

    /// Append a symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn build(self) -> Schema {
        Schema::Enum(self)
    }
}

/// A named, fixed-size byte blob.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSchema {
    pub name: String,
    /// Size in bytes.
    pub size: usize,
}

impl FixedSchema {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn build(self) -> Schema {
        Schema::Fixed(self)
    }
}
