use serde_json::Value;

use crate::{
    error::NodeError,
    parse_node::ParseNode,
    types::{Kind, Type},
    value::{Number, UntypedValue},
};

/// A [ParseNode] borrowing a node of a parsed JSON document.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        JsonParseNode { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn mismatch(&self, expected: Kind) -> NodeError {
        NodeError::KindMismatch {
            expected,
            found: type_of(self.value),
        }
    }

    /// Integral number of this node, range checked against `expected`.
    fn integer<T: TryFrom<i64>>(&self, expected: Kind) -> Result<Option<T>, NodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .and_then(|i| T::try_from(i).ok())
                .map(Some)
                .ok_or_else(|| NodeError::InvalidLiteral {
                    expected,
                    literal: n.to_string(),
                }),
            _ => Err(self.mismatch(expected)),
        }
    }
}

fn type_of(value: &Value) -> Type {
    match value {
        Value::Null => Type::Null,
        Value::Bool(_) => Type::Boolean,
        Value::Number(_) => Type::Number,
        Value::String(_) => Type::String,
        Value::Array(_) => Type::Array,
        Value::Object(_) => Type::Object,
    }
}

fn untyped(value: &Value) -> UntypedValue {
    match value {
        Value::Null => UntypedValue::Null,
        Value::Bool(b) => UntypedValue::Boolean(*b),
        Value::Number(n) => UntypedValue::Number(if let Some(i) = n.as_i64() {
            Number::Int(i)
        } else if let Some(u) = n.as_u64() {
            Number::UInt(u)
        } else {
            // serde_json numbers are always representable as f64 unless
            // arbitrary_precision is enabled, which we don't
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }),
        Value::String(s) => UntypedValue::String(s.clone()),
        Value::Array(items) => UntypedValue::Array(items.iter().map(untyped).collect()),
        Value::Object(map) => UntypedValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), untyped(v)))
                .collect(),
        ),
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn type_(&self) -> Type {
        type_of(self.value)
    }

    fn child_node(&self, name: &str) -> Option<Box<dyn ParseNode + '_>> {
        self.value
            .as_object()?
            .get(name)
            .map(|child| Box::new(JsonParseNode::new(child)) as Box<dyn ParseNode + '_>)
    }

    fn properties(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, NodeError> {
        match self.value {
            Value::Object(map) => Ok(map
                .iter()
                .map(|(k, v)| {
                    (
                        k.clone(),
                        Box::new(JsonParseNode::new(v)) as Box<dyn ParseNode + '_>,
                    )
                })
                .collect()),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }

    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, NodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(
                items
                    .iter()
                    .map(|v| Box::new(JsonParseNode::new(v)) as Box<dyn ParseNode + '_>)
                    .collect(),
            )),
            _ => Err(self.mismatch(Kind::Collection)),
        }
    }

    fn string_value(&self) -> Result<Option<String>, NodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    fn bool_value(&self) -> Result<Option<bool>, NodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch(Kind::Boolean)),
        }
    }

    fn i32_value(&self) -> Result<Option<i32>, NodeError> {
        self.integer(Kind::Int32)
    }

    fn i64_value(&self) -> Result<Option<i64>, NodeError> {
        self.integer(Kind::Int64)
    }

    fn f32_value(&self) -> Result<Option<f32>, NodeError> {
        match self.f64_value() {
            Ok(Some(x)) if x.abs() > f32::MAX as f64 => Err(NodeError::InvalidLiteral {
                expected: Kind::Float32,
                literal: x.to_string(),
            }),
            Ok(x) => Ok(x.map(|x| x as f32)),
            Err(NodeError::KindMismatch { .. }) => Err(self.mismatch(Kind::Float32)),
            Err(e) => Err(e),
        }
    }

    fn f64_value(&self) -> Result<Option<f64>, NodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| NodeError::InvalidLiteral {
                expected: Kind::Float64,
                literal: n.to_string(),
            }),
            _ => Err(self.mismatch(Kind::Float64)),
        }
    }

    fn untyped_value(&self) -> UntypedValue {
        untyped(self.value)
    }
}
