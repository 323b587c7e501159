use std::borrow::Cow;

use crate::{
    config::AdditionalDataOrder,
    error::{EncodeError, WriterError},
    parsable::Parsable,
    types::Scalar,
    value::{AdditionalData, UntypedValue},
};

/**
Sink for serialized models. A `key` of `None` writes a value without a property
name, which only makes sense at the root of a document.

Absent values (`None`) are passed through so that the writer can decide whether
to omit them or emit an explicit null.
*/
pub trait SerializationWriter {
    fn write_scalar_value(
        &mut self,
        key: Option<&str>,
        value: Option<Scalar<'_>>,
    ) -> Result<(), WriterError>;

    fn write_collection_of_scalar_values(
        &mut self,
        key: Option<&str>,
        values: Option<&[Scalar<'_>]>,
    ) -> Result<(), WriterError>;

    /// Writes a nested object by handing a writer for it to [Parsable::serialize].
    fn write_object_value(
        &mut self,
        key: Option<&str>,
        value: Option<&dyn Parsable>,
    ) -> Result<(), WriterError>;

    fn write_collection_of_object_values(
        &mut self,
        key: Option<&str>,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), WriterError>;

    fn write_untyped_value(
        &mut self,
        key: Option<&str>,
        value: &UntypedValue,
    ) -> Result<(), WriterError>;

    fn write_null_value(&mut self, key: Option<&str>) -> Result<(), WriterError>;

    fn additional_data_order(&self) -> AdditionalDataOrder {
        AdditionalDataOrder::Insertion
    }

    /**
    Flushes an additional-data bag, one property per entry. A rejected entry is
    reported under its key.
    */
    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), EncodeError> {
        let mut entries: Vec<(&String, &UntypedValue)> = data.iter().collect();
        if self.additional_data_order() == AdditionalDataOrder::Sorted {
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        }
        for (key, value) in entries {
            self.write_untyped_value(Some(key.as_str()), value)
                .map_err(|source| EncodeError::WriteFailure {
                    field: key.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

impl dyn SerializationWriter + '_ {
    pub fn write_string_value(
        &mut self,
        key: Option<&str>,
        value: Option<&str>,
    ) -> Result<(), WriterError> {
        self.write_scalar_value(key, value.map(|s| Scalar::String(Cow::Borrowed(s))))
    }

    pub fn write_bool_value(
        &mut self,
        key: Option<&str>,
        value: Option<bool>,
    ) -> Result<(), WriterError> {
        self.write_scalar_value(key, value.map(Scalar::Boolean))
    }

    pub fn write_i32_value(
        &mut self,
        key: Option<&str>,
        value: Option<i32>,
    ) -> Result<(), WriterError> {
        self.write_scalar_value(key, value.map(Scalar::Int32))
    }

    pub fn write_f64_value(
        &mut self,
        key: Option<&str>,
        value: Option<f64>,
    ) -> Result<(), WriterError> {
        self.write_scalar_value(key, value.map(Scalar::Float64))
    }
}
