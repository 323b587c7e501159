use chrono::SecondsFormat;
use serde_json::{Map, Value};

use crate::{
    config::{AdditionalDataOrder, NullValues, WriterConfig},
    error::WriterError,
    parsable::Parsable,
    types::Scalar,
    value::{Number, UntypedValue},
    writer::SerializationWriter,
};

/**
Builds a [serde_json::Value] from a model. Properties are kept in the order
they are written in.

```
use odatamodel_core::{adapters::json::JsonSerializationWriter, SerializationWriter};

let mut writer = JsonSerializationWriter::new();
let w: &mut dyn SerializationWriter = &mut writer;
w.write_string_value(Some("displayName"), Some("policy")).unwrap();
w.write_i32_value(Some("version"), None).unwrap();
assert_eq!(writer.into_value().to_string(), r#"{"displayName":"policy"}"#);
```
*/
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    config: WriterConfig,
    properties: Map<String, Value>,
    root: Option<Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WriterConfig) -> Self {
        JsonSerializationWriter {
            config,
            ..Default::default()
        }
    }

    /// The written document: the keyless root value if one was written,
    /// otherwise an object of all written properties.
    pub fn into_value(self) -> Value {
        match self.root {
            Some(root) => root,
            None => Value::Object(self.properties),
        }
    }

    fn put(&mut self, key: Option<&str>, value: Value) -> Result<(), WriterError> {
        match key {
            Some(key) => {
                self.properties.insert(key.to_string(), value);
                Ok(())
            }
            None if self.root.is_none() && self.properties.is_empty() => {
                self.root = Some(value);
                Ok(())
            }
            None => Err(WriterError::MissingKey),
        }
    }

    fn put_absent(&mut self, key: Option<&str>) -> Result<(), WriterError> {
        match self.config.get_null_values() {
            NullValues::Omit => Ok(()),
            NullValues::Write => self.put(key, Value::Null),
        }
    }

    fn object(&self, value: &dyn Parsable) -> Result<Value, WriterError> {
        let mut nested = JsonSerializationWriter::with_config(self.config);
        value
            .serialize(&mut nested)
            .map_err(|e| WriterError::Object(Box::new(e)))?;
        Ok(nested.into_value())
    }
}

fn float(x: f64) -> Result<Value, WriterError> {
    serde_json::Number::from_f64(x)
        .map(Value::Number)
        .ok_or(WriterError::NonFiniteNumber(x))
}

fn scalar(value: &Scalar<'_>) -> Result<Value, WriterError> {
    Ok(match value {
        Scalar::String(s) => Value::String(s.to_string()),
        Scalar::Boolean(b) => Value::Bool(*b),
        Scalar::Int32(i) => Value::from(*i),
        Scalar::Int64(i) => Value::from(*i),
        Scalar::Float32(x) => float(*x as f64)?,
        Scalar::Float64(x) => float(*x)?,
        Scalar::DateTime(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        Scalar::DateOnly(d) => Value::String(d.format("%Y-%m-%d").to_string()),
        Scalar::TimeOnly(t) => Value::String(t.to_string()),
        Scalar::Duration(d) => Value::String(d.to_string()),
        Scalar::Uuid(u) => Value::String(u.hyphenated().to_string()),
    })
}

fn untyped(value: &UntypedValue) -> Result<Value, WriterError> {
    Ok(match value {
        UntypedValue::Null => Value::Null,
        UntypedValue::Boolean(b) => Value::Bool(*b),
        UntypedValue::Number(Number::Int(i)) => Value::from(*i),
        UntypedValue::Number(Number::UInt(u)) => Value::from(*u),
        UntypedValue::Number(Number::Float(x)) => float(*x)?,
        UntypedValue::String(s) => Value::String(s.clone()),
        UntypedValue::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| untyped(item).map_err(|e| element(index, e)))
                .collect::<Result<_, _>>()?,
        ),
        UntypedValue::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| match untyped(v) {
                    Ok(v) => Ok((k.clone(), v)),
                    Err(source) => Err(WriterError::Entry {
                        key: k.clone(),
                        source: Box::new(source),
                    }),
                })
                .collect::<Result<_, _>>()?,
        ),
    })
}

fn element(index: usize, source: WriterError) -> WriterError {
    WriterError::Element {
        index,
        source: Box::new(source),
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_scalar_value(
        &mut self,
        key: Option<&str>,
        value: Option<Scalar<'_>>,
    ) -> Result<(), WriterError> {
        match value {
            Some(value) => {
                let value = scalar(&value)?;
                self.put(key, value)
            }
            None => self.put_absent(key),
        }
    }

    fn write_collection_of_scalar_values(
        &mut self,
        key: Option<&str>,
        values: Option<&[Scalar<'_>]>,
    ) -> Result<(), WriterError> {
        let Some(values) = values else {
            return self.put_absent(key);
        };
        let items = values
            .iter()
            .enumerate()
            .map(|(index, value)| scalar(value).map_err(|e| element(index, e)))
            .collect::<Result<Vec<_>, _>>()?;
        self.put(key, Value::Array(items))
    }

    fn write_object_value(
        &mut self,
        key: Option<&str>,
        value: Option<&dyn Parsable>,
    ) -> Result<(), WriterError> {
        match value {
            Some(value) => {
                let value = self.object(value)?;
                self.put(key, value)
            }
            None => self.put_absent(key),
        }
    }

    fn write_collection_of_object_values(
        &mut self,
        key: Option<&str>,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), WriterError> {
        let Some(values) = values else {
            return self.put_absent(key);
        };
        let items = values
            .iter()
            .enumerate()
            .map(|(index, value)| self.object(*value).map_err(|e| element(index, e)))
            .collect::<Result<Vec<_>, _>>()?;
        self.put(key, Value::Array(items))
    }

    fn write_untyped_value(
        &mut self,
        key: Option<&str>,
        value: &UntypedValue,
    ) -> Result<(), WriterError> {
        let value = untyped(value)?;
        self.put(key, value)
    }

    fn write_null_value(&mut self, key: Option<&str>) -> Result<(), WriterError> {
        self.put(key, Value::Null)
    }

    fn additional_data_order(&self) -> AdditionalDataOrder {
        self.config.get_additional_data_order()
    }
}
