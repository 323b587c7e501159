use std::{borrow::Cow, fmt::Display};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::{IsoDuration, error::NodeError, parse_node::ParseNode};

/**
The type of a node as it is found in a payload, following the
[JSON data model](https://datatracker.ietf.org/doc/html/rfc8259#section-3).
Note that, like JSON, we do not distinguish between integral and fractional numbers here.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Null,
    Boolean,
    Object,
    Array,
    Number,
    String,
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Type::Null => "null",
            Type::Boolean => "boolean",
            Type::Object => "object",
            Type::Array => "array",
            Type::Number => "number",
            Type::String => "string",
        })
    }
}

/**
The semantic type a field is declared with. Several kinds share one wire [Type]
(timestamps, dates, UUIDs... all travel as strings), so mismatch errors report
the declared kind rather than the JSON type.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Boolean,
    Int32,
    Int64,
    Float32,
    Float64,
    DateTime,
    DateOnly,
    TimeOnly,
    Duration,
    Uuid,
    /// string mapped enum, carrying the enum's type name
    Enum(&'static str),
    Object,
    Collection,
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::String => f.write_str("string"),
            Kind::Boolean => f.write_str("boolean"),
            Kind::Int32 => f.write_str("int32"),
            Kind::Int64 => f.write_str("int64"),
            Kind::Float32 => f.write_str("float"),
            Kind::Float64 => f.write_str("double"),
            Kind::DateTime => f.write_str("date-time"),
            Kind::DateOnly => f.write_str("date"),
            Kind::TimeOnly => f.write_str("time"),
            Kind::Duration => f.write_str("duration"),
            Kind::Uuid => f.write_str("uuid"),
            Kind::Enum(name) => write!(f, "enum {name}"),
            Kind::Object => f.write_str("object"),
            Kind::Collection => f.write_str("collection"),
        }
    }
}

/// A primitive value borrowed from a model, handed to a writer.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    String(Cow<'a, str>),
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    DateTime(&'a DateTime<FixedOffset>),
    DateOnly(NaiveDate),
    TimeOnly(NaiveTime),
    Duration(&'a IsoDuration),
    Uuid(Uuid),
}

impl Scalar<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Scalar::String(_) => Kind::String,
            Scalar::Boolean(_) => Kind::Boolean,
            Scalar::Int32(_) => Kind::Int32,
            Scalar::Int64(_) => Kind::Int64,
            Scalar::Float32(_) => Kind::Float32,
            Scalar::Float64(_) => Kind::Float64,
            Scalar::DateTime(_) => Kind::DateTime,
            Scalar::DateOnly(_) => Kind::DateOnly,
            Scalar::TimeOnly(_) => Kind::TimeOnly,
            Scalar::Duration(_) => Kind::Duration,
            Scalar::Uuid(_) => Kind::Uuid,
        }
    }
}

/**
Rust types that map onto one of the primitive [Kind]s. Reading goes through the
matching [ParseNode] coercion, writing through a [Scalar].
*/
pub trait Primitive: Sized + Clone + std::fmt::Debug + PartialEq + Send + Sync + 'static {
    const KIND: Kind;

    /// `Ok(None)` means the node is null
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError>;

    fn to_scalar(&self) -> Scalar<'_>;
}

impl Primitive for String {
    const KIND: Kind = Kind::String;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.string_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::String(Cow::Borrowed(self))
    }
}

impl Primitive for bool {
    const KIND: Kind = Kind::Boolean;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.bool_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Boolean(*self)
    }
}

impl Primitive for i32 {
    const KIND: Kind = Kind::Int32;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.i32_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Int32(*self)
    }
}

impl Primitive for i64 {
    const KIND: Kind = Kind::Int64;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.i64_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Int64(*self)
    }
}

impl Primitive for f32 {
    const KIND: Kind = Kind::Float32;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.f32_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Float32(*self)
    }
}

impl Primitive for f64 {
    const KIND: Kind = Kind::Float64;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.f64_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Float64(*self)
    }
}

impl Primitive for DateTime<FixedOffset> {
    const KIND: Kind = Kind::DateTime;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.date_time_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::DateTime(self)
    }
}

impl Primitive for NaiveDate {
    const KIND: Kind = Kind::DateOnly;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.date_only_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::DateOnly(*self)
    }
}

impl Primitive for NaiveTime {
    const KIND: Kind = Kind::TimeOnly;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.time_only_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::TimeOnly(*self)
    }
}

impl Primitive for IsoDuration {
    const KIND: Kind = Kind::Duration;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.duration_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Duration(self)
    }
}

impl Primitive for Uuid {
    const KIND: Kind = Kind::Uuid;

    fn read(node: &dyn ParseNode) -> Result<Option<Self>, NodeError> {
        node.uuid_value()
    }

    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Uuid(*self)
    }
}
