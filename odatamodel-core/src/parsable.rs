use std::{fmt::Display, str::FromStr};

use crate::{
    error::{DecodeError, EncodeError},
    parse_node::ParseNode,
    registry::FieldRegistry,
    value::AdditionalDataHolder,
    writer::SerializationWriter,
};

/**
A type that can be read from and written to a payload. This is the object safe
half of a model: writers hold nested objects as `&dyn Parsable`.
*/
pub trait Parsable: AdditionalDataHolder + std::fmt::Debug + Send + Sync {
    /// Reads every property of `node` into `self`. Properties without a field
    /// end up in the additional-data bag.
    fn deserialize_fields(&mut self, node: &dyn ParseNode) -> Result<(), DecodeError>;

    /// Writes declared fields, parent fields first, followed by the additional-data bag.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError>;
}

/**
A [Parsable] that knows how to pick its empty instance for a given node.
For a polymorphic family this is where the `@odata.type` dispatch happens;
plain types just return a new instance of themselves.
*/
pub trait Constructable: Parsable + Sized {
    fn create_from_discriminator_value(node: Option<&dyn ParseNode>) -> Result<Self, DecodeError>;
}

/// A concrete struct whose fields are described by a [FieldRegistry].
pub trait Model: Parsable + Sized + 'static {
    fn field_registry() -> &'static FieldRegistry<Self>;
}

/**
An enum that travels as a string. [FromStr] and [Display] must map members to
and from their wire names; see [crate::wire_enum].
*/
pub trait WireEnum: FromStr + Display + Clone + std::fmt::Debug + PartialEq + Send + Sync + 'static {
    const TYPE_NAME: &'static str;
}
