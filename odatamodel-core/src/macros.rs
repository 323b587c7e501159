/**
Declares a string-mapped enum and implements [crate::WireEnum] for it.

```
odatamodel_core::wire_enum! {
    pub enum Color: "color" {
        Red = "red",
        DarkBlue = "darkBlue",
    }
}

assert_eq!("darkBlue".parse::<Color>().unwrap(), Color::DarkBlue);
assert_eq!(Color::Red.to_string(), "red");
assert!("Red".parse::<Color>().is_err());
```
*/
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $type_name:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownEnumMember;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )*
                    _ => Err($crate::error::UnknownEnumMember {
                        type_name: $type_name,
                        member: s.to_string(),
                    }),
                }
            }
        }

        impl $crate::WireEnum for $name {
            const TYPE_NAME: &'static str = $type_name;
        }
    };
}

/**
Implements the model traits for a struct whose fields are described by a
[crate::FieldRegistry] static.

A root type owns its `additional_data` field:
`impl_model!(Entity, fields = ENTITY_FIELDS);`

A derived type embeds its parent in a field and derefs to it:
`impl_model!(DeviceConfiguration: Entity, base, fields = DEVICE_CONFIGURATION_FIELDS);`

Both forms expect an inherent `new()` constructor, used as the non-polymorphic
factory.
*/
#[macro_export]
macro_rules! impl_model {
    (@model $ty:ident, $registry:expr) => {
        impl $crate::Model for $ty {
            fn field_registry() -> &'static $crate::FieldRegistry<Self> {
                &$registry
            }
        }

        impl $crate::Parsable for $ty {
            fn deserialize_fields(
                &mut self,
                node: &dyn $crate::ParseNode,
            ) -> ::std::result::Result<(), $crate::DecodeError> {
                <Self as $crate::Model>::field_registry().deserialize_fields(self, node)
            }

            fn serialize(
                &self,
                writer: &mut dyn $crate::SerializationWriter,
            ) -> ::std::result::Result<(), $crate::EncodeError> {
                <Self as $crate::Model>::field_registry().serialize_fields(self, writer)
            }
        }

        impl $crate::Constructable for $ty {
            fn create_from_discriminator_value(
                _node: ::std::option::Option<&dyn $crate::ParseNode>,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                Ok($ty::new())
            }
        }
    };
    ($ty:ident, fields = $registry:expr) => {
        impl $crate::AdditionalDataHolder for $ty {
            fn additional_data(&self) -> &$crate::AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut $crate::AdditionalData {
                &mut self.additional_data
            }
        }

        $crate::impl_model!(@model $ty, $registry);
    };
    ($ty:ident : $parent:ident, $base:ident, fields = $registry:expr) => {
        impl ::std::convert::AsRef<$parent> for $ty {
            fn as_ref(&self) -> &$parent {
                &self.$base
            }
        }

        impl ::std::convert::AsMut<$parent> for $ty {
            fn as_mut(&mut self) -> &mut $parent {
                &mut self.$base
            }
        }

        impl ::std::ops::Deref for $ty {
            type Target = $parent;

            fn deref(&self) -> &$parent {
                &self.$base
            }
        }

        impl ::std::ops::DerefMut for $ty {
            fn deref_mut(&mut self) -> &mut $parent {
                &mut self.$base
            }
        }

        impl $crate::AdditionalDataHolder for $ty {
            fn additional_data(&self) -> &$crate::AdditionalData {
                $crate::AdditionalDataHolder::additional_data(&self.$base)
            }

            fn additional_data_mut(&mut self) -> &mut $crate::AdditionalData {
                $crate::AdditionalDataHolder::additional_data_mut(&mut self.$base)
            }
        }

        $crate::impl_model!(@model $ty, $registry);
    };
}

/**
Declares a closed polymorphic family: an enum with one variant per concrete
type, each variant named after the type it holds. The family derefs to its
base type and dispatches on `@odata.type` through the given
[crate::DiscriminatorRegistry] static.

```ignore
model_family! {
    pub enum AnyDeviceConfiguration: DeviceConfiguration {
        DeviceConfiguration,
        IosExpeditedCheckinConfiguration,
    }
    registry = DEVICE_CONFIGURATION_FAMILY;
}
```
*/
#[macro_export]
macro_rules! model_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $base:ident {
            $( $variant:ident ),+ $(,)?
        }
        registry = $registry:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $( $variant($variant) ),+
        }

        impl $name {
            pub fn registry() -> &'static $crate::DiscriminatorRegistry<$name> {
                &$registry
            }
        }

        $(
            impl ::std::convert::From<$variant> for $name {
                fn from(value: $variant) -> Self {
                    $name::$variant(value)
                }
            }
        )+

        impl ::std::ops::Deref for $name {
            type Target = $base;

            fn deref(&self) -> &$base {
                match self {
                    $( $name::$variant(v) => v ),+
                }
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $base {
                match self {
                    $( $name::$variant(v) => v ),+
                }
            }
        }

        impl $crate::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &$crate::AdditionalData {
                match self {
                    $( $name::$variant(v) => $crate::AdditionalDataHolder::additional_data(v) ),+
                }
            }

            fn additional_data_mut(&mut self) -> &mut $crate::AdditionalData {
                match self {
                    $( $name::$variant(v) => $crate::AdditionalDataHolder::additional_data_mut(v) ),+
                }
            }
        }

        impl $crate::Parsable for $name {
            fn deserialize_fields(
                &mut self,
                node: &dyn $crate::ParseNode,
            ) -> ::std::result::Result<(), $crate::DecodeError> {
                match self {
                    $( $name::$variant(v) => $crate::Parsable::deserialize_fields(v, node) ),+
                }
            }

            fn serialize(
                &self,
                writer: &mut dyn $crate::SerializationWriter,
            ) -> ::std::result::Result<(), $crate::EncodeError> {
                match self {
                    $( $name::$variant(v) => $crate::Parsable::serialize(v, writer) ),+
                }
            }
        }

        impl $crate::Constructable for $name {
            fn create_from_discriminator_value(
                node: ::std::option::Option<&dyn $crate::ParseNode>,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                $name::registry().create(node)
            }
        }
    };
}
