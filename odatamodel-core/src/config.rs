/// What a writer does with a field that has no value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullValues {
    /// leave the property out
    #[default]
    Omit,
    /// emit the property with an explicit `null`
    Write,
}

/// Order in which the additional-data bag is flushed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdditionalDataOrder {
    /// the order the entries were read or inserted in
    #[default]
    Insertion,
    /// sorted by key, for byte-stable output
    Sorted,
}

/**
Settings for serialization writers.

```
use odatamodel_core::config::{AdditionalDataOrder, NullValues, WriterConfig};

let config = WriterConfig::new()
    .null_values(NullValues::Write)
    .additional_data_order(AdditionalDataOrder::Sorted);
assert_eq!(config.get_null_values(), NullValues::Write);
```
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterConfig {
    null_values: NullValues,
    additional_data_order: AdditionalDataOrder,
}

impl WriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn null_values(mut self, null_values: NullValues) -> Self {
        self.null_values = null_values;
        self
    }

    pub fn additional_data_order(mut self, order: AdditionalDataOrder) -> Self {
        self.additional_data_order = order;
        self
    }

    pub fn get_null_values(&self) -> NullValues {
        self.null_values
    }

    pub fn get_additional_data_order(&self) -> AdditionalDataOrder {
        self.additional_data_order
    }
}
