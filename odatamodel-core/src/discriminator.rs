use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    error::DecodeError,
    odata::{ODATA_TYPE_KEY, ODataType},
    parsable::Parsable,
    parse_node::ParseNode,
    types::{Kind, Type},
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiscriminatorRegistryError {
    #[error("discriminator tag '{0}' is registered twice")]
    DuplicateTag(String),
    #[error("'{0}' is not an @odata.type tag of the form '#namespace.typeName'")]
    MalformedTag(String),
}

/**
Maps `@odata.type` tags to factories for the members of one polymorphic family
`F`, usually a closed enum over the family's concrete types.

Lookup is by exact string. A payload without a tag, or with a tag that is not
registered, gets an instance of the family's base type.
*/
pub struct DiscriminatorRegistry<F> {
    base: fn() -> F,
    factories: HashMap<String, fn() -> F>,
}

impl<F> std::fmt::Debug for DiscriminatorRegistry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&String> = self.factories.keys().collect();
        tags.sort();
        f.debug_struct("DiscriminatorRegistry")
            .field("family", &std::any::type_name::<F>())
            .field("tags", &tags)
            .finish()
    }
}

impl<F> DiscriminatorRegistry<F> {
    pub fn builder(base: fn() -> F) -> DiscriminatorRegistryBuilder<F> {
        DiscriminatorRegistryBuilder::new(base)
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /**
    Creates the empty instance `node` should be decoded into.

    A missing node, a missing or null `@odata.type` and an unknown tag all
    yield the base type. A tag that is present but not a string is a type
    mismatch on `@odata.type`.
    */
    pub fn create(&self, node: Option<&dyn ParseNode>) -> Result<F, DecodeError> {
        let Some(node) = node else {
            return Ok((self.base)());
        };
        let Some(tag_node) = node.child_node(ODATA_TYPE_KEY) else {
            return Ok((self.base)());
        };
        let tag = tag_node
            .string_value()
            .map_err(|source| DecodeError::TypeMismatch {
                field: ODATA_TYPE_KEY.to_string(),
                expected: Kind::String,
                source,
            })?;
        let Some(tag) = tag else {
            return Ok((self.base)());
        };

        match self.factories.get(&tag) {
            Some(factory) => {
                trace!("'{tag}' selects a subtype of {}", std::any::type_name::<F>());
                Ok(factory())
            }
            None => {
                debug!(
                    "unknown discriminator '{tag}', decoding as base type of {}",
                    std::any::type_name::<F>()
                );
                Ok((self.base)())
            }
        }
    }

    /// [Self::create] followed by reading all of `node`'s fields into the new instance.
    /// A `null` node decodes like a missing one.
    pub fn decode(&self, node: Option<&dyn ParseNode>) -> Result<F, DecodeError>
    where
        F: Parsable,
    {
        let node = node.filter(|node| node.type_() != Type::Null);
        let mut instance = self.create(node)?;
        if let Some(node) = node {
            instance.deserialize_fields(node)?;
        }
        Ok(instance)
    }
}

pub struct DiscriminatorRegistryBuilder<F> {
    base: fn() -> F,
    factories: HashMap<String, fn() -> F>,
}

impl<F> DiscriminatorRegistryBuilder<F> {
    pub fn new(base: fn() -> F) -> Self {
        DiscriminatorRegistryBuilder {
            base,
            factories: HashMap::new(),
        }
    }

    /** Registers the factory for a subtype. Tags must be unique and of the `#namespace.typeName` form. */
    pub fn register(mut self, tag: &str, factory: fn() -> F) -> Result<Self, DiscriminatorRegistryError> {
        if ODataType::parse(tag).is_none() {
            return Err(DiscriminatorRegistryError::MalformedTag(tag.to_string()));
        }
        if self.factories.contains_key(tag) {
            return Err(DiscriminatorRegistryError::DuplicateTag(tag.to_string()));
        }
        self.factories.insert(tag.to_string(), factory);
        Ok(self)
    }

    pub fn build(self) -> DiscriminatorRegistry<F> {
        DiscriminatorRegistry {
            base: self.base,
            factories: self.factories,
        }
    }
}
