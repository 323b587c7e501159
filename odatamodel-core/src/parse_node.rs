use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::{
    IsoDuration,
    error::NodeError,
    parsable::{Constructable, WireEnum},
    types::{Kind, Primitive, Type},
    value::UntypedValue,
};

/**
A node of a parsed payload. Implementations wrap a concrete document model
(see [crate::adapters::json::JsonParseNode]); the engine only ever sees
`&dyn ParseNode`.

Coercions return `Ok(None)` for a null node, a [NodeError] if the node holds
something that cannot be read as the requested kind.
*/
pub trait ParseNode {
    /// the wire type of this node
    fn type_(&self) -> Type;

    /// Returns the child with the given property name. A missing property
    /// and a node that is not an object both yield `None`.
    fn child_node(&self, name: &str) -> Option<Box<dyn ParseNode + '_>>;

    /// All properties of an object node, in payload order.
    fn properties(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, NodeError>;

    /// The elements of an array node.
    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, NodeError>;

    fn string_value(&self) -> Result<Option<String>, NodeError>;
    fn bool_value(&self) -> Result<Option<bool>, NodeError>;
    fn i32_value(&self) -> Result<Option<i32>, NodeError>;
    fn i64_value(&self) -> Result<Option<i64>, NodeError>;
    fn f32_value(&self) -> Result<Option<f32>, NodeError>;
    fn f64_value(&self) -> Result<Option<f64>, NodeError>;

    /// A lossless copy of the node, used for the additional-data bag.
    fn untyped_value(&self) -> UntypedValue;

    fn is_null(&self) -> bool {
        self.type_() == Type::Null
    }

    /// RFC 3339 timestamp with offset, e.g. `2024-03-01T12:00:00Z`
    fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, NodeError> {
        read_literal(self, Kind::DateTime, |s| DateTime::parse_from_rfc3339(s).ok())
    }

    /// `yyyy-mm-dd`
    fn date_only_value(&self) -> Result<Option<NaiveDate>, NodeError> {
        read_literal(self, Kind::DateOnly, |s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
        })
    }

    /// `hh:mm:ss` with optional fraction
    fn time_only_value(&self) -> Result<Option<NaiveTime>, NodeError> {
        read_literal(self, Kind::TimeOnly, |s| NaiveTime::from_str(s).ok())
    }

    fn duration_value(&self) -> Result<Option<IsoDuration>, NodeError> {
        read_literal(self, Kind::Duration, |s| IsoDuration::from_str(s).ok())
    }

    fn uuid_value(&self) -> Result<Option<Uuid>, NodeError> {
        read_literal(self, Kind::Uuid, |s| Uuid::parse_str(s).ok())
    }
}

/**
Reads a string node and converts it with `parse`. A node of the wrong wire type
is reported against `expected` rather than against `string`.
*/
pub(crate) fn read_literal<N, T>(
    node: &N,
    expected: Kind,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<Option<T>, NodeError>
where
    N: ParseNode + ?Sized,
{
    let literal = match node.string_value() {
        Ok(Some(literal)) => literal,
        Ok(None) => return Ok(None),
        Err(NodeError::KindMismatch { found, .. }) => {
            return Err(NodeError::KindMismatch { expected, found });
        }
        Err(e) => return Err(e),
    };
    match parse(&literal) {
        Some(value) => Ok(Some(value)),
        None => Err(NodeError::InvalidLiteral { expected, literal }),
    }
}

impl<'n> dyn ParseNode + 'n {
    pub fn primitive_value<V: Primitive>(&self) -> Result<Option<V>, NodeError> {
        V::read(self)
    }

    /// Enum members are sent as strings; an unknown member is an invalid literal.
    pub fn enum_value<E: WireEnum>(&self) -> Result<Option<E>, NodeError> {
        read_literal(self, Kind::Enum(E::TYPE_NAME), |s| E::from_str(s).ok())
    }

    /**
    Decodes a nested object. The concrete type is picked by `T`'s discriminator
    dispatch, then its fields are read from this same node.
    */
    pub fn object_value<T: Constructable>(&self) -> Result<Option<T>, NodeError> {
        match self.type_() {
            Type::Null => Ok(None),
            Type::Object => {
                let mut instance = T::create_from_discriminator_value(Some(self))
                    .map_err(|e| NodeError::Object(Box::new(e)))?;
                instance
                    .deserialize_fields(self)
                    .map_err(|e| NodeError::Object(Box::new(e)))?;
                Ok(Some(instance))
            }
            found => Err(NodeError::KindMismatch {
                expected: Kind::Object,
                found,
            }),
        }
    }

    pub fn collection_of_primitive_values<V: Primitive>(
        &self,
    ) -> Result<Option<Vec<V>>, NodeError> {
        self.collection_of(V::KIND, |n| V::read(n))
    }

    pub fn collection_of_enum_values<E: WireEnum>(&self) -> Result<Option<Vec<E>>, NodeError> {
        self.collection_of(Kind::Enum(E::TYPE_NAME), |n| n.enum_value::<E>())
    }

    pub fn collection_of_object_values<T: Constructable>(
        &self,
    ) -> Result<Option<Vec<T>>, NodeError> {
        self.collection_of(Kind::Object, |n| n.object_value::<T>())
    }

    /// Collections are homogeneous, so a `null` element is rejected like any
    /// other element of the wrong type.
    fn collection_of<V>(
        &self,
        element_kind: Kind,
        read: impl Fn(&dyn ParseNode) -> Result<Option<V>, NodeError>,
    ) -> Result<Option<Vec<V>>, NodeError> {
        let Some(nodes) = self.collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            match read(node.as_ref()) {
                Ok(Some(value)) => values.push(value),
                Ok(None) => {
                    return Err(NodeError::Element {
                        index,
                        source: Box::new(NodeError::KindMismatch {
                            expected: element_kind,
                            found: Type::Null,
                        }),
                    });
                }
                Err(e) => {
                    return Err(NodeError::Element {
                        index,
                        source: Box::new(e),
                    });
                }
            }
        }
        Ok(Some(values))
    }
}
