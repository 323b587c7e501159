use lazy_static::lazy_static;
use serde_json::json;
use test_log::test;

use crate::{
    adapters::json::JsonParseNode,
    config::{AdditionalDataOrder, NullValues, WriterConfig},
    error::{NodeError, WriterError},
};

use super::*;

#[derive(Debug, Default, Clone, PartialEq)]
struct Animal {
    name: Option<String>,
    legs: Option<i32>,
    weight: Option<f64>,
    odata_type: Option<String>,
    additional_data: AdditionalData,
}

impl Animal {
    fn new() -> Self {
        Animal {
            odata_type: Some("#zoo.animal".to_string()),
            ..Default::default()
        }
    }
}

/// overrides `name` with a field of its own
#[derive(Debug, Default, Clone, PartialEq)]
struct Dog {
    base: Animal,
    name: Option<String>,
    good: Option<bool>,
}

impl Dog {
    fn new() -> Self {
        let mut dog = Dog::default();
        dog.base.odata_type = Some("#zoo.dog".to_string());
        dog
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Cat {
    base: Animal,
    lives: Option<i32>,
}

impl Cat {
    fn new() -> Self {
        let mut cat = Cat::default();
        cat.base.odata_type = Some("#zoo.cat".to_string());
        cat
    }
}

#[derive(Debug, Default, PartialEq)]
struct Enclosure {
    keeper: Option<AnyAnimal>,
    animals: Option<Vec<AnyAnimal>>,
    tags: Option<Vec<String>>,
    habitats: Option<Vec<Habitat>>,
    additional_data: AdditionalData,
}

crate::wire_enum! {
    enum Habitat: "habitat" {
        Forest = "forest",
        Desert = "desert",
    }
}

impl Enclosure {
    fn new() -> Self {
        Self::default()
    }
}

lazy_static! {
    static ref ANIMAL_FIELDS: FieldRegistry<Animal> = FieldRegistry::<Animal>::builder()
        .primitive("name", |a| &a.name, |a| &mut a.name)
        .primitive("legs", |a| &a.legs, |a| &mut a.legs)
        .primitive("weight", |a| &a.weight, |a| &mut a.weight)
        .primitive("@odata.type", |a| &a.odata_type, |a| &mut a.odata_type)
        .build();
    static ref DOG_FIELDS: FieldRegistry<Dog> = FieldRegistryBuilder::<Dog>::extending(&*ANIMAL_FIELDS)
        .primitive("good", |d| &d.good, |d| &mut d.good)
        .primitive("name", |d| &d.name, |d| &mut d.name)
        .build();
    static ref CAT_FIELDS: FieldRegistry<Cat> = FieldRegistryBuilder::<Cat>::extending(&*ANIMAL_FIELDS)
        .primitive("lives", |c| &c.lives, |c| &mut c.lives)
        .build();
    static ref ENCLOSURE_FIELDS: FieldRegistry<Enclosure> = FieldRegistry::<Enclosure>::builder()
        .object("keeper", |e| &e.keeper, |e| &mut e.keeper)
        .collection_of_objects("animals", |e| &e.animals, |e| &mut e.animals)
        .collection_of_primitives("tags", |e| &e.tags, |e| &mut e.tags)
        .collection_of_enums("habitats", |e| &e.habitats, |e| &mut e.habitats)
        .build();
    static ref ANIMAL_FAMILY: DiscriminatorRegistry<AnyAnimal> = animal_family(true);
}

crate::impl_model!(Animal, fields = ANIMAL_FIELDS);
crate::impl_model!(Dog: Animal, base, fields = DOG_FIELDS);
crate::impl_model!(Cat: Animal, base, fields = CAT_FIELDS);
crate::impl_model!(Enclosure, fields = ENCLOSURE_FIELDS);

crate::model_family! {
    #[derive(Clone, PartialEq)]
    enum AnyAnimal: Animal {
        Animal,
        Dog,
        Cat,
    }
    registry = ANIMAL_FAMILY;
}

fn animal_family(with_cats: bool) -> DiscriminatorRegistry<AnyAnimal> {
    let mut builder = DiscriminatorRegistry::builder(|| AnyAnimal::Animal(Animal::new()))
        .register("#zoo.dog", || AnyAnimal::Dog(Dog::new()))
        .unwrap();
    if with_cats {
        builder = builder
            .register("#zoo.cat", || AnyAnimal::Cat(Cat::new()))
            .unwrap();
    }
    builder.build()
}

fn decode_json<T: Constructable>(value: &serde_json::Value) -> Result<T, DecodeError> {
    decode(Some(&JsonParseNode::new(value)))
}

fn encode_json(model: &dyn Parsable) -> Result<serde_json::Value, EncodeError> {
    serialize_to_value(model, WriterConfig::default())
}

#[test]
fn test_dispatch_to_subtype() -> Result<(), anyhow::Error> {
    let payload = json!({"@odata.type": "#zoo.cat", "legs": 4, "lives": 9});
    let AnyAnimal::Cat(cat) = decode_json::<AnyAnimal>(&payload)? else {
        panic!("expected a cat");
    };
    assert_eq!(cat.lives, Some(9));
    assert_eq!(cat.legs, Some(4));
    assert_eq!(cat.odata_type.as_deref(), Some("#zoo.cat"));
    assert!(cat.additional_data().is_empty());
    Ok(())
}

#[test]
fn test_subtype_fields_independent_of_base_fields() -> Result<(), anyhow::Error> {
    let payload = json!({"@odata.type": "#zoo.cat", "lives": 3});
    let mut animal = decode_json::<AnyAnimal>(&payload)?;
    animal.legs = Some(3);
    let AnyAnimal::Cat(cat) = &mut animal else {
        panic!("expected a cat");
    };
    cat.lives = Some(7);
    assert_eq!(cat.lives, Some(7));
    assert_eq!(cat.base.legs, Some(3));
    Ok(())
}

#[test]
fn test_unknown_tag_falls_back_to_base() -> Result<(), anyhow::Error> {
    let payload = json!({"@odata.type": "#zoo.unicorn", "name": "sparkle", "horns": 1});
    let AnyAnimal::Animal(animal) = decode_json::<AnyAnimal>(&payload)? else {
        panic!("expected the base type");
    };
    assert_eq!(animal.name.as_deref(), Some("sparkle"));
    // the tag is still round tripped as an ordinary field
    assert_eq!(animal.odata_type.as_deref(), Some("#zoo.unicorn"));
    assert_eq!(
        animal.additional_data().get("horns"),
        Some(&UntypedValue::Number(Number::Int(1)))
    );
    Ok(())
}

#[test]
fn test_absent_tag_and_absent_node_yield_base() -> Result<(), anyhow::Error> {
    assert!(matches!(
        decode_json::<AnyAnimal>(&json!({"legs": 2}))?,
        AnyAnimal::Animal(_)
    ));
    let empty = decode::<AnyAnimal>(None)?;
    assert_eq!(empty, AnyAnimal::Animal(Animal::new()));
    Ok(())
}

#[test]
fn test_isolated_registry() -> Result<(), anyhow::Error> {
    let no_cats = animal_family(false);
    let payload = json!({"@odata.type": "#zoo.cat", "lives": 9});
    let node = JsonParseNode::new(&payload);

    let animal = no_cats.decode(Some(&node))?;
    let AnyAnimal::Animal(animal) = animal else {
        panic!("expected the base type");
    };
    assert_eq!(
        animal.additional_data().get("lives"),
        Some(&UntypedValue::Number(Number::Int(9)))
    );

    // the process wide family is not affected
    assert!(matches!(AnyAnimal::registry().decode(Some(&node))?, AnyAnimal::Cat(_)));
    Ok(())
}

#[test]
fn test_override_populates_subtype_field() -> Result<(), anyhow::Error> {
    let payload = json!({"@odata.type": "#zoo.dog", "name": "rex", "good": true});
    let AnyAnimal::Dog(dog) = decode_json::<AnyAnimal>(&payload)? else {
        panic!("expected a dog");
    };
    assert_eq!(dog.name.as_deref(), Some("rex"));
    assert_eq!(dog.base.name, None);
    assert_eq!(dog.good, Some(true));
    Ok(())
}

#[test]
fn test_missing_fields_stay_empty() -> Result<(), anyhow::Error> {
    let cat: Cat = decode_json(&json!({"lives": 1}))?;
    assert_eq!(cat.lives, Some(1));
    assert_eq!(cat.name, None);
    assert_eq!(cat.legs, None);
    assert_eq!(cat.weight, None);
    Ok(())
}

#[test]
fn test_mismatch_names_field() {
    let err = decode_json::<AnyAnimal>(&json!({"@odata.type": "#zoo.cat", "lives": "nine"}))
        .unwrap_err();
    assert_eq!(err.field(), Some("lives"));
    assert_eq!(err.expected(), Some(Kind::Int32));
    assert_eq!(
        err.to_string(),
        "cannot decode field 'lives' as int32: expected int32, found string"
    );
}

#[test]
fn test_int32_out_of_range_is_mismatch() {
    let err = decode_json::<Animal>(&json!({"legs": 3_000_000_000i64})).unwrap_err();
    assert_eq!(err.field(), Some("legs"));
    assert!(matches!(
        err,
        DecodeError::TypeMismatch {
            source: NodeError::InvalidLiteral { .. },
            ..
        }
    ));
}

#[test]
fn test_nested_mismatch_path() {
    let payload = json!({
        "animals": [
            {"@odata.type": "#zoo.dog", "good": true},
            {"@odata.type": "#zoo.cat", "lives": 9.5},
        ]
    });
    let err = decode_json::<Enclosure>(&payload).unwrap_err();
    assert_eq!(err.field(), Some("animals"));
    assert_eq!(err.expected(), Some(Kind::Collection));
    assert_eq!(err.path(), "animals[1].lives");
}

#[test]
fn test_null_in_collection_is_mismatch() {
    let err = decode_json::<Enclosure>(&json!({"tags": ["a", null]})).unwrap_err();
    assert_eq!(err.path(), "tags[1]");
}

#[test]
fn test_root_must_be_object() {
    let err = decode_json::<Animal>(&json!([1, 2])).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Root(NodeError::KindMismatch {
            expected: Kind::Object,
            found: Type::Array
        })
    ));
}

#[test]
fn test_null_root_is_absent() -> Result<(), anyhow::Error> {
    let animal: AnyAnimal = deserialize_from_str("null")?;
    assert_eq!(animal, AnyAnimal::Animal(Animal::new()));

    let null = serde_json::Value::Null;
    let node = JsonParseNode::new(&null);
    let animal = ANIMAL_FAMILY.decode(Some(&node))?;
    assert_eq!(animal.odata_type.as_deref(), Some("#zoo.animal"));
    assert!(animal.additional_data().is_empty());

    assert_eq!(decode_json::<Enclosure>(&null)?, Enclosure::new());
    Ok(())
}

#[test]
fn test_enum_collection() -> Result<(), anyhow::Error> {
    let enclosure: Enclosure = decode_json(&json!({"habitats": ["forest", "desert"]}))?;
    assert_eq!(
        enclosure.habitats,
        Some(vec![Habitat::Forest, Habitat::Desert])
    );
    assert!(enclosure.additional_data.is_empty());
    assert_eq!(
        encode_json(&enclosure)?,
        json!({"habitats": ["forest", "desert"]})
    );

    let err = decode_json::<Enclosure>(&json!({"habitats": ["forest", "swamp"]})).unwrap_err();
    assert_eq!(err.field(), Some("habitats"));
    assert_eq!(err.expected(), Some(Kind::Collection));
    assert_eq!(err.path(), "habitats[1]");
    Ok(())
}

#[test]
fn test_nested_objects_dispatch() -> Result<(), anyhow::Error> {
    let payload = json!({
        "keeper": {"@odata.type": "#zoo.dog", "name": "fido"},
        "animals": [
            {"@odata.type": "#zoo.cat", "lives": 9},
            {"name": "generic"},
        ],
        "tags": ["north", "cold"],
    });
    let enclosure: Enclosure = decode_json(&payload)?;
    assert!(matches!(enclosure.keeper, Some(AnyAnimal::Dog(_))));
    let animals = enclosure.animals.as_ref().unwrap();
    assert!(matches!(animals[0], AnyAnimal::Cat(_)));
    assert!(matches!(animals[1], AnyAnimal::Animal(_)));
    assert_eq!(animals[1].name.as_deref(), Some("generic"));
    assert_eq!(
        enclosure.tags,
        Some(vec!["north".to_string(), "cold".to_string()])
    );
    Ok(())
}

#[test]
fn test_round_trip_keeps_unknown_fields() -> Result<(), anyhow::Error> {
    let payload = json!({
        "keeper": {"@odata.type": "#zoo.dog", "name": "fido", "collar": {"color": "red"}},
        "animals": [
            {"@odata.type": "#zoo.cat", "lives": 9, "whiskers": [1, 2.5, null, "x"]},
        ],
        "openedAt": "08:00",
        "capacity": 18446744073709551615u64,
    });
    let decoded: Enclosure = decode_json(&payload)?;
    let encoded = encode_json(&decoded)?;
    let again: Enclosure = decode_json(&encoded)?;
    assert_eq!(decoded, again);

    // re-encoding is stable too
    assert_eq!(encoded, encode_json(&again)?);
    Ok(())
}

#[test]
fn test_serialize_order() -> Result<(), anyhow::Error> {
    let payload = json!({"zzz": 1, "good": false, "@odata.type": "#zoo.dog", "name": "rex", "legs": 4});
    let dog: AnyAnimal = decode_json(&payload)?;
    let out = serialize_to_string(&dog)?;
    // inherited fields first, the override keeps the inherited position, the bag last
    assert_eq!(
        out,
        r##"{"name":"rex","legs":4,"@odata.type":"#zoo.dog","good":false,"zzz":1}"##
    );
    Ok(())
}

#[test]
fn test_fresh_instance_writes_its_tag() -> Result<(), anyhow::Error> {
    let out = serialize_to_string(&Cat::new())?;
    assert_eq!(out, r##"{"@odata.type":"#zoo.cat"}"##);
    Ok(())
}

#[test]
fn test_write_nulls_and_sorted_bag() -> Result<(), anyhow::Error> {
    let mut animal = Animal::default();
    animal.additional_data_mut().insert("b", "2");
    animal.additional_data_mut().insert("a", "1");

    let config = WriterConfig::new()
        .null_values(NullValues::Write)
        .additional_data_order(AdditionalDataOrder::Sorted);
    let out = serde_json::to_string(&serialize_to_value(&animal, config)?)?;
    assert_eq!(
        out,
        r##"{"name":null,"legs":null,"weight":null,"@odata.type":null,"a":"1","b":"2"}"##
    );
    Ok(())
}

#[test]
fn test_non_finite_float_is_write_failure() {
    let animal = Animal {
        weight: Some(f64::NAN),
        ..Animal::new()
    };
    let err = encode_json(&animal).unwrap_err();
    assert_eq!(err.field(), "weight");
    assert!(matches!(
        err,
        EncodeError::WriteFailure {
            source: WriterError::NonFiniteNumber(_),
            ..
        }
    ));
}

#[test]
fn test_write_failure_in_bag_names_key() {
    let mut animal = Animal::new();
    animal
        .additional_data_mut()
        .insert("score", f64::INFINITY);
    let err = encode_json(&animal).unwrap_err();
    assert_eq!(err.field(), "score");
}

#[test]
fn test_nested_write_failure() {
    let mut cat = Cat::new();
    cat.weight = Some(f64::NEG_INFINITY);
    let enclosure = Enclosure {
        animals: Some(vec![AnyAnimal::Cat(cat)]),
        ..Enclosure::new()
    };
    let err = encode_json(&enclosure).unwrap_err();
    assert_eq!(err.field(), "animals");
    assert!(matches!(
        err,
        EncodeError::WriteFailure {
            source: WriterError::Element { index: 0, .. },
            ..
        }
    ));
}

#[test]
fn test_registries_are_shared_across_threads() -> Result<(), anyhow::Error> {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let payload = json!({"@odata.type": "#zoo.cat", "lives": i});
                decode_json::<AnyAnimal>(&payload)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let AnyAnimal::Cat(cat) = handle.join().unwrap()? else {
            panic!("expected a cat");
        };
        assert_eq!(cat.lives, Some(i as i32));
    }
    Ok(())
}

#[test]
fn test_deserialize_from_str_reports_syntax_errors() {
    assert!(deserialize_from_str::<Animal>("{\"name\": ").is_err());
    let animal: Animal = deserialize_from_str(r#"{"name": "x"}"#).unwrap();
    assert_eq!(animal.name.as_deref(), Some("x"));
}

/// plain fields, bound by hand
#[derive(Debug, Default)]
struct Reading {
    value: f64,
    enabled: bool,
    additional_data: AdditionalData,
}

impl Reading {
    fn new() -> Self {
        Self::default()
    }
}

lazy_static! {
    static ref READING_FIELDS: FieldRegistry<Reading> = FieldRegistry::<Reading>::builder()
        .field(FieldBinding::new(
            "value",
            Kind::Float64,
            |r: &mut Reading, node: &dyn ParseNode| {
                r.value = node.primitive_value::<f64>()?.unwrap_or_default();
                Ok(())
            },
            |r: &Reading, writer: &mut dyn SerializationWriter| {
                writer.write_f64_value(Some("value"), Some(r.value))
            },
        ))
        .field(FieldBinding::new(
            "enabled",
            Kind::Boolean,
            |r: &mut Reading, node: &dyn ParseNode| {
                r.enabled = node.bool_value()?.unwrap_or_default();
                Ok(())
            },
            |r: &Reading, writer: &mut dyn SerializationWriter| {
                writer.write_bool_value(Some("enabled"), r.enabled.then_some(true))
            },
        ))
        .build();
}

crate::impl_model!(Reading, fields = READING_FIELDS);

#[test]
fn test_hand_written_bindings() -> Result<(), anyhow::Error> {
    let reading: Reading = decode_json(&json!({"value": 21.5, "enabled": null}))?;
    assert_eq!(reading.value, 21.5);
    assert!(!reading.enabled);
    assert_eq!(encode_json(&reading)?, json!({"value": 21.5}));

    let err = decode_json::<Reading>(&json!({"enabled": "yes"})).unwrap_err();
    assert_eq!(err.expected(), Some(Kind::Boolean));
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct Timer {
    span: Option<IsoDuration>,
    additional_data: AdditionalData,
}

impl Timer {
    fn new() -> Self {
        Self::default()
    }
}

lazy_static! {
    static ref TIMER_FIELDS: FieldRegistry<Timer> = FieldRegistry::<Timer>::builder()
        .primitive("span", |t| &t.span, |t| &mut t.span)
        .build();
}

crate::impl_model!(Timer, fields = TIMER_FIELDS);

#[test]
fn test_negative_zero_duration_round_trip() -> Result<(), anyhow::Error> {
    let timer: Timer = decode_json(&json!({"span": "-PT0S"}))?;
    let span = timer.span.as_ref().unwrap();
    assert!(span.negative);
    assert_eq!(span.to_string(), "-PT0S");

    let encoded = encode_json(&timer)?;
    assert_eq!(encoded, json!({"span": "-PT0S"}));
    assert_eq!(decode_json::<Timer>(&encoded)?, timer);
    Ok(())
}
