/*!
Decoding and encoding of OData payloads into statically typed models.

Each model type describes its fields in a [FieldRegistry], built on top of its
parent type's registry. Polymorphic families dispatch on the `@odata.type`
property through a [DiscriminatorRegistry]. Payload properties a model has no
field for are kept in its [AdditionalData] bag and written back out on
serialization.
*/

use std::{io::Read, path::Path};

mod duration;
mod macros;
mod types;
mod value;

pub mod adapters;
pub mod config;
pub mod discriminator;
pub mod error;
pub mod odata;
pub mod parsable;
pub mod parse_node;
pub mod registry;
pub mod writer;

pub use discriminator::{DiscriminatorRegistry, DiscriminatorRegistryBuilder};
pub use duration::{IsoDuration, ParseDurationError};
pub use error::{DecodeError, EncodeError};
pub use odata::ODATA_TYPE_KEY;
pub use parsable::{Constructable, Model, Parsable, WireEnum};
pub use parse_node::ParseNode;
pub use registry::{FieldBinding, FieldRegistry, FieldRegistryBuilder};
pub use types::{Kind, Primitive, Scalar, Type};
pub use value::{AdditionalData, AdditionalDataHolder, Number, UntypedValue};
pub use writer::SerializationWriter;

#[cfg(all(test, feature = "json"))]
mod test;

/**
Decodes `node` as a `T`. For a polymorphic family the concrete member is picked
from the node's `@odata.type`; a missing or `null` node yields an empty instance.
*/
pub fn decode<T: Constructable>(node: Option<&dyn ParseNode>) -> Result<T, DecodeError> {
    let node = node.filter(|node| node.type_() != Type::Null);
    let mut instance = T::create_from_discriminator_value(node)?;
    if let Some(node) = node {
        instance.deserialize_fields(node)?;
    }
    Ok(instance)
}

#[cfg(feature = "json")]
pub fn deserialize_from_path<T: Constructable>(path: &Path) -> anyhow::Result<T> {
    let file = std::fs::File::open(path)?;

    deserialize_from_reader(file)
}

#[cfg(feature = "json")]
pub fn deserialize_from_str<T: Constructable>(s: &str) -> anyhow::Result<T> {
    let value: serde_json::Value = serde_json::from_str(s)?;
    deserialize_from_value(&value)
}

#[cfg(feature = "json")]
pub fn deserialize_from_reader<T: Constructable>(input: impl Read) -> anyhow::Result<T> {
    let value: serde_json::Value = serde_json::from_reader(input)?;
    deserialize_from_value(&value)
}

#[cfg(feature = "json")]
pub fn deserialize_from_value<T: Constructable>(value: &serde_json::Value) -> anyhow::Result<T> {
    let node = adapters::json::JsonParseNode::new(value);
    Ok(decode(Some(&node))?)
}

#[cfg(feature = "json")]
pub fn serialize_to_value(
    model: &dyn Parsable,
    config: config::WriterConfig,
) -> Result<serde_json::Value, EncodeError> {
    let mut writer = adapters::json::JsonSerializationWriter::with_config(config);
    model.serialize(&mut writer)?;
    Ok(writer.into_value())
}

#[cfg(feature = "json")]
pub fn serialize_to_string(model: &dyn Parsable) -> anyhow::Result<String> {
    let value = serialize_to_value(model, config::WriterConfig::default())?;
    Ok(serde_json::to_string(&value)?)
}
