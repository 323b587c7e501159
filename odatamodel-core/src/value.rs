use std::fmt::Display;

use indexmap::IndexMap;

use crate::types::Type;

/// A JSON number, kept in the representation it was read with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(i) => i.fmt(f),
            Number::UInt(u) => u.fmt(f),
            Number::Float(x) => x.fmt(f),
        }
    }
}

/**
A decoded value that no field binding claimed. This is the element type of the
[AdditionalData] bag and can represent anything a JSON document can.
*/
#[derive(Debug, Clone, PartialEq)]
pub enum UntypedValue {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Array(Vec<UntypedValue>),
    Object(IndexMap<String, UntypedValue>),
}

impl UntypedValue {
    pub fn type_(&self) -> Type {
        match self {
            UntypedValue::Null => Type::Null,
            UntypedValue::Boolean(_) => Type::Boolean,
            UntypedValue::Number(_) => Type::Number,
            UntypedValue::String(_) => Type::String,
            UntypedValue::Array(_) => Type::Array,
            UntypedValue::Object(_) => Type::Object,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            UntypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            UntypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, UntypedValue::Null)
    }
}

impl From<&str> for UntypedValue {
    fn from(value: &str) -> Self {
        UntypedValue::String(value.to_string())
    }
}

impl From<String> for UntypedValue {
    fn from(value: String) -> Self {
        UntypedValue::String(value)
    }
}

impl From<bool> for UntypedValue {
    fn from(value: bool) -> Self {
        UntypedValue::Boolean(value)
    }
}

impl From<i64> for UntypedValue {
    fn from(value: i64) -> Self {
        UntypedValue::Number(Number::Int(value))
    }
}

impl From<f64> for UntypedValue {
    fn from(value: f64) -> Self {
        UntypedValue::Number(Number::Float(value))
    }
}

impl<V: Into<UntypedValue>> From<Vec<V>> for UntypedValue {
    fn from(value: Vec<V>) -> Self {
        UntypedValue::Array(value.into_iter().map(Into::into).collect())
    }
}

/**
The additional-data bag: every property of a payload that the decoded type has no
field for, kept in the order it was read so that it can be written back out.
*/
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditionalData {
    entries: IndexMap<String, UntypedValue>,
}

impl AdditionalData {
    pub fn new() -> Self {
        Self::default()
    }

    /// replaces any prior value stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<UntypedValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&UntypedValue> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<UntypedValue> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &UntypedValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl<K: Into<String>, V: Into<UntypedValue>> FromIterator<(K, V)> for AdditionalData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        AdditionalData {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Types that carry an [AdditionalData] bag.
pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;
    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_kept() {
        let mut bag = AdditionalData::new();
        bag.insert("zeta", 1i64);
        bag.insert("alpha", "a");
        bag.insert("mid", true);
        let keys: Vec<&str> = bag.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut bag = AdditionalData::new();
        bag.insert("k", "first");
        bag.insert("k", "second");
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get("k").and_then(UntypedValue::as_str), Some("second"));
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut bag: AdditionalData = [("a", 1i64), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(bag.remove("b"), Some(UntypedValue::Number(Number::Int(2))));
        let keys: Vec<&str> = bag.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_numbers_compare_by_representation() {
        assert_ne!(
            UntypedValue::Number(Number::Int(1)),
            UntypedValue::Number(Number::Float(1.0))
        );
    }
}
