use std::{borrow::Cow, sync::Arc};

use indexmap::IndexMap;
use log::trace;

use crate::{
    error::{DecodeError, EncodeError, NodeError, WriterError},
    parsable::{Constructable, Parsable, WireEnum},
    parse_node::ParseNode,
    types::{Kind, Primitive, Scalar},
    value::AdditionalDataHolder,
    writer::SerializationWriter,
};

type DecodeFn<T> = dyn Fn(&mut T, &dyn ParseNode) -> Result<(), NodeError> + Send + Sync;
type EncodeFn<T> = dyn Fn(&T, &mut dyn SerializationWriter) -> Result<(), WriterError> + Send + Sync;

/**
One field of a model: the property name it has on the wire, the kind it is
declared with and the operations moving it between a node and the instance.

Bindings are cheap to clone; inherited bindings share their operations with the
parent's registry.
*/
pub struct FieldBinding<T> {
    wire_name: &'static str,
    kind: Kind,
    decode: Arc<DecodeFn<T>>,
    encode: Arc<EncodeFn<T>>,
}

impl<T> Clone for FieldBinding<T> {
    fn clone(&self) -> Self {
        FieldBinding {
            wire_name: self.wire_name,
            kind: self.kind,
            decode: Arc::clone(&self.decode),
            encode: Arc::clone(&self.encode),
        }
    }
}

impl<T> std::fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("wire_name", &self.wire_name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> FieldBinding<T> {
    pub fn new(
        wire_name: &'static str,
        kind: Kind,
        decode: impl Fn(&mut T, &dyn ParseNode) -> Result<(), NodeError> + Send + Sync + 'static,
        encode: impl Fn(&T, &mut dyn SerializationWriter) -> Result<(), WriterError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        FieldBinding {
            wire_name,
            kind,
            decode: Arc::new(decode),
            encode: Arc::new(encode),
        }
    }

    pub fn wire_name(&self) -> &'static str {
        self.wire_name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Makes this binding usable on a type that embeds `T`.
    fn lift<C>(&self) -> FieldBinding<C>
    where
        C: AsRef<T> + AsMut<T> + 'static,
    {
        let decode = Arc::clone(&self.decode);
        let encode = Arc::clone(&self.encode);
        FieldBinding {
            wire_name: self.wire_name,
            kind: self.kind,
            decode: Arc::new(move |c: &mut C, node: &dyn ParseNode| decode(c.as_mut(), node)),
            encode: Arc::new(move |c: &C, writer: &mut dyn SerializationWriter| {
                encode(c.as_ref(), writer)
            }),
        }
    }
}

/**
The effective field registry of a type: its own bindings overlaid on those of
its parent, keyed by wire name. Iteration order is the serialization order:
inherited fields first, then the type's own fields in declaration order. A field
that overrides an inherited one keeps the inherited position.
*/
pub struct FieldRegistry<T> {
    bindings: IndexMap<&'static str, FieldBinding<T>>,
}

impl<T> std::fmt::Debug for FieldRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.bindings.values()).finish()
    }
}

impl<T: 'static> FieldRegistry<T> {
    pub fn builder() -> FieldRegistryBuilder<T> {
        FieldRegistryBuilder::new()
    }

    pub fn get(&self, wire_name: &str) -> Option<&FieldBinding<T>> {
        self.bindings.get(wire_name)
    }

    pub fn contains(&self, wire_name: &str) -> bool {
        self.bindings.contains_key(wire_name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn wire_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.keys().copied()
    }
}

impl<T: AdditionalDataHolder + 'static> FieldRegistry<T> {
    /**
    Reads every property of `node` into `instance`. Properties with a binding are
    decoded through it, everything else is stored in the instance's
    additional-data bag. The first failing field aborts the decode.
    */
    pub fn deserialize_fields(
        &self,
        instance: &mut T,
        node: &dyn ParseNode,
    ) -> Result<(), DecodeError> {
        for (key, child) in node.properties().map_err(DecodeError::Root)? {
            match self.bindings.get(key.as_str()) {
                Some(binding) => {
                    trace!("decoding field '{key}' as {}", binding.kind);
                    (binding.decode)(instance, child.as_ref()).map_err(|source| {
                        DecodeError::TypeMismatch {
                            field: key.clone(),
                            expected: binding.kind,
                            source,
                        }
                    })?;
                }
                None => {
                    trace!("no field for '{key}', keeping it as additional data");
                    let value = child.untyped_value();
                    instance.additional_data_mut().insert(key, value);
                }
            }
        }
        Ok(())
    }

    /// Writes every bound field in registry order, then the additional-data bag.
    pub fn serialize_fields(
        &self,
        instance: &T,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), EncodeError> {
        for binding in self.bindings.values() {
            (binding.encode)(instance, writer).map_err(|source| EncodeError::WriteFailure {
                field: binding.wire_name.to_string(),
                source,
            })?;
        }
        writer.write_additional_data(instance.additional_data())
    }
}

pub struct FieldRegistryBuilder<T> {
    bindings: IndexMap<&'static str, FieldBinding<T>>,
}

impl<T: 'static> Default for FieldRegistryBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> FieldRegistryBuilder<T> {
    /// Starts a registry for a root type.
    pub fn new() -> Self {
        FieldRegistryBuilder {
            bindings: IndexMap::new(),
        }
    }

    /**
    Starts a registry for a type embedding `P`, inheriting all of `parent`'s
    bindings. The parent registry is left untouched.
    */
    pub fn extending<P>(parent: &FieldRegistry<P>) -> Self
    where
        P: 'static,
        T: AsRef<P> + AsMut<P>,
    {
        FieldRegistryBuilder {
            bindings: parent
                .bindings
                .iter()
                .map(|(name, binding)| (*name, binding.lift::<T>()))
                .collect(),
        }
    }

    /// Adds `binding`, replacing an inherited binding of the same wire name.
    pub fn field(mut self, binding: FieldBinding<T>) -> Self {
        let wire_name = binding.wire_name;
        if self.bindings.insert(wire_name, binding).is_some() {
            trace!("field '{wire_name}' overrides an inherited binding");
        }
        self
    }

    pub fn primitive<V: Primitive>(
        self,
        wire_name: &'static str,
        get: impl Fn(&T) -> &Option<V> + Send + Sync + 'static,
        set: impl Fn(&mut T) -> &mut Option<V> + Send + Sync + 'static,
    ) -> Self {
        self.slot(
            wire_name,
            V::KIND,
            get,
            set,
            |node| V::read(node),
            |writer, key, value| writer.write_scalar_value(Some(key), value.map(V::to_scalar)),
        )
    }

    pub fn enumeration<E: WireEnum>(
        self,
        wire_name: &'static str,
        get: impl Fn(&T) -> &Option<E> + Send + Sync + 'static,
        set: impl Fn(&mut T) -> &mut Option<E> + Send + Sync + 'static,
    ) -> Self {
        self.slot(
            wire_name,
            Kind::Enum(E::TYPE_NAME),
            get,
            set,
            |node| node.enum_value::<E>(),
            |writer, key, value| {
                writer.write_scalar_value(Some(key), value.map(enum_scalar))
            },
        )
    }

    pub fn object<O: Constructable + 'static>(
        self,
        wire_name: &'static str,
        get: impl Fn(&T) -> &Option<O> + Send + Sync + 'static,
        set: impl Fn(&mut T) -> &mut Option<O> + Send + Sync + 'static,
    ) -> Self {
        self.slot(
            wire_name,
            Kind::Object,
            get,
            set,
            |node| node.object_value::<O>(),
            |writer, key, value| {
                writer.write_object_value(Some(key), value.map(|o| o as &dyn Parsable))
            },
        )
    }

    pub fn collection_of_primitives<V: Primitive>(
        self,
        wire_name: &'static str,
        get: impl Fn(&T) -> &Option<Vec<V>> + Send + Sync + 'static,
        set: impl Fn(&mut T) -> &mut Option<Vec<V>> + Send + Sync + 'static,
    ) -> Self {
        self.slot(
            wire_name,
            Kind::Collection,
            get,
            set,
            |node| node.collection_of_primitive_values::<V>(),
            |writer, key, values| {
                let scalars: Option<Vec<Scalar<'_>>> =
                    values.map(|values| values.iter().map(V::to_scalar).collect());
                writer.write_collection_of_scalar_values(Some(key), scalars.as_deref())
            },
        )
    }

    pub fn collection_of_enums<E: WireEnum>(
        self,
        wire_name: &'static str,
        get: impl Fn(&T) -> &Option<Vec<E>> + Send + Sync + 'static,
        set: impl Fn(&mut T) -> &mut Option<Vec<E>> + Send + Sync + 'static,
    ) -> Self {
        self.slot(
            wire_name,
            Kind::Collection,
            get,
            set,
            |node| node.collection_of_enum_values::<E>(),
            |writer, key, values| {
                let scalars: Option<Vec<Scalar<'_>>> =
                    values.map(|values| values.iter().map(enum_scalar).collect());
                writer.write_collection_of_scalar_values(Some(key), scalars.as_deref())
            },
        )
    }

    pub fn collection_of_objects<O: Constructable + 'static>(
        self,
        wire_name: &'static str,
        get: impl Fn(&T) -> &Option<Vec<O>> + Send + Sync + 'static,
        set: impl Fn(&mut T) -> &mut Option<Vec<O>> + Send + Sync + 'static,
    ) -> Self {
        self.slot(
            wire_name,
            Kind::Collection,
            get,
            set,
            |node| node.collection_of_object_values::<O>(),
            |writer, key, values| {
                let objects: Option<Vec<&dyn Parsable>> =
                    values.map(|values| values.iter().map(|o| o as &dyn Parsable).collect());
                writer.write_collection_of_object_values(Some(key), objects.as_deref())
            },
        )
    }

    pub fn build(self) -> FieldRegistry<T> {
        FieldRegistry {
            bindings: self.bindings,
        }
    }

    /// A binding over an `Option<V>` field. Decoding a null leaves the field alone.
    fn slot<V, G, S, R, W>(
        self,
        wire_name: &'static str,
        kind: Kind,
        get: G,
        set: S,
        read: R,
        write: W,
    ) -> Self
    where
        V: 'static,
        G: Fn(&T) -> &Option<V> + Send + Sync + 'static,
        S: Fn(&mut T) -> &mut Option<V> + Send + Sync + 'static,
        R: Fn(&dyn ParseNode) -> Result<Option<V>, NodeError> + Send + Sync + 'static,
        W: Fn(&mut dyn SerializationWriter, &str, Option<&V>) -> Result<(), WriterError>
            + Send
            + Sync
            + 'static,
    {
        let decode = move |instance: &mut T, node: &dyn ParseNode| -> Result<(), NodeError> {
            if let Some(value) = read(node)? {
                *set(instance) = Some(value);
            }
            Ok(())
        };
        let encode = move |instance: &T, writer: &mut dyn SerializationWriter| {
            write(writer, wire_name, get(instance).as_ref())
        };
        self.field(FieldBinding::new(wire_name, kind, decode, encode))
    }
}

fn enum_scalar<E: WireEnum>(value: &E) -> Scalar<'static> {
    Scalar::String(Cow::Owned(value.to_string()))
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use serde_json::json;
    use test_log::test;

    use super::*;
    use crate::{
        adapters::json::{JsonParseNode, JsonSerializationWriter},
        value::AdditionalData,
    };

    #[derive(Debug, Default)]
    struct Base {
        name: Option<String>,
        size: Option<i32>,
        additional_data: AdditionalData,
    }

    #[derive(Debug, Default)]
    struct Derived {
        base: Base,
        size: Option<i64>,
        flag: Option<bool>,
    }

    impl AdditionalDataHolder for Base {
        fn additional_data(&self) -> &AdditionalData {
            &self.additional_data
        }
        fn additional_data_mut(&mut self) -> &mut AdditionalData {
            &mut self.additional_data
        }
    }

    impl AdditionalDataHolder for Derived {
        fn additional_data(&self) -> &AdditionalData {
            self.base.additional_data()
        }
        fn additional_data_mut(&mut self) -> &mut AdditionalData {
            self.base.additional_data_mut()
        }
    }

    impl AsRef<Base> for Derived {
        fn as_ref(&self) -> &Base {
            &self.base
        }
    }

    impl AsMut<Base> for Derived {
        fn as_mut(&mut self) -> &mut Base {
            &mut self.base
        }
    }

    fn base_registry() -> FieldRegistry<Base> {
        FieldRegistry::<Base>::builder()
            .primitive("name", |b| &b.name, |b| &mut b.name)
            .primitive("size", |b| &b.size, |b| &mut b.size)
            .build()
    }

    fn derived_registry(parent: &FieldRegistry<Base>) -> FieldRegistry<Derived> {
        FieldRegistryBuilder::<Derived>::extending(parent)
            .primitive("flag", |d| &d.flag, |d| &mut d.flag)
            .primitive("size", |d| &d.size, |d| &mut d.size)
            .build()
    }

    #[test]
    fn test_extending_keeps_parent_order_and_overrides_in_place() {
        let parent = base_registry();
        let derived = derived_registry(&parent);

        assert_eq!(
            derived.wire_names().collect::<Vec<_>>(),
            vec!["name", "size", "flag"]
        );
        assert_eq!(derived.get("size").map(FieldBinding::kind), Some(Kind::Int64));
        // the parent is not affected by the override
        assert_eq!(parent.get("size").map(FieldBinding::kind), Some(Kind::Int32));
        assert_eq!(parent.len(), 2);
    }

    #[test]
    fn test_inherited_binding_writes_through_to_base() -> Result<(), anyhow::Error> {
        let parent = base_registry();
        let derived = derived_registry(&parent);

        let payload = json!({"name": "n", "size": 5_000_000_000i64, "flag": true, "other": [1]});
        let mut instance = Derived::default();
        derived.deserialize_fields(&mut instance, &JsonParseNode::new(&payload))?;

        assert_eq!(instance.base.name.as_deref(), Some("n"));
        // the overriding binding wins, the shadowed i32 field stays empty
        assert_eq!(instance.size, Some(5_000_000_000));
        assert_eq!(instance.base.size, None);
        assert_eq!(instance.flag, Some(true));
        assert_eq!(
            instance.additional_data().keys().collect::<Vec<_>>(),
            vec!["other"]
        );
        Ok(())
    }

    #[test]
    fn test_null_leaves_field_untouched() -> Result<(), anyhow::Error> {
        let registry = base_registry();
        let mut instance = Base {
            name: Some("kept".to_string()),
            ..Default::default()
        };
        registry.deserialize_fields(&mut instance, &JsonParseNode::new(&json!({"name": null})))?;
        assert_eq!(instance.name.as_deref(), Some("kept"));
        assert!(instance.additional_data.is_empty());
        Ok(())
    }

    #[test]
    fn test_mismatch_names_field_and_kind() {
        let registry = base_registry();
        let mut instance = Base::default();
        let err = registry
            .deserialize_fields(&mut instance, &JsonParseNode::new(&json!({"size": "big"})))
            .unwrap_err();
        assert_eq!(err.field(), Some("size"));
        assert_eq!(err.expected(), Some(Kind::Int32));
    }

    #[test]
    fn test_serialize_fields_in_registry_order() -> Result<(), anyhow::Error> {
        let parent = base_registry();
        let derived = derived_registry(&parent);
        let mut instance = Derived {
            flag: Some(false),
            size: Some(7),
            ..Default::default()
        };
        instance.base.name = Some("x".to_string());
        instance.base.additional_data.insert("extra", 1i64);

        let mut writer = JsonSerializationWriter::new();
        derived.serialize_fields(&instance, &mut writer)?;
        let out = serde_json::to_string(&writer.into_value())?;
        assert_eq!(out, r#"{"name":"x","size":7,"flag":false,"extra":1}"#);
        Ok(())
    }
}
