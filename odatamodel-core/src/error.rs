use crate::types::{Kind, Type};

/// Failure to coerce a parse node into a declared kind. Carries no field name;
/// the field registry adds that when it wraps the error into a [DecodeError].
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("expected {expected}, found {found}")]
    KindMismatch { expected: Kind, found: Type },
    #[error("'{literal}' is not a valid {expected}")]
    InvalidLiteral { expected: Kind, literal: String },
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<NodeError>,
    },
    /// a nested object failed to decode
    #[error(transparent)]
    Object(Box<DecodeError>),
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("cannot decode field '{field}' as {expected}: {source}")]
    TypeMismatch {
        field: String,
        expected: Kind,
        #[source]
        source: NodeError,
    },
    #[error("cannot decode payload root: {0}")]
    Root(#[source] NodeError),
}

impl DecodeError {
    /// wire name of the outermost field that failed, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::TypeMismatch { field, .. } => Some(field),
            DecodeError::Root(_) => None,
        }
    }

    pub fn expected(&self) -> Option<Kind> {
        match self {
            DecodeError::TypeMismatch { expected, .. } => Some(*expected),
            DecodeError::Root(_) => None,
        }
    }

    /**
    Dotted path to the innermost failing field, descending through nested objects
    and collection elements, e.g. `deviceSettingStateSummaries[1].version`.
    */
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut current = Some(self);
        while let Some(err) = current {
            let node_err = match err {
                DecodeError::TypeMismatch { field, source, .. } => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(field);
                    source
                }
                DecodeError::Root(source) => source,
            };
            current = None;
            let mut node_err = node_err;
            loop {
                match node_err {
                    NodeError::Element { index, source } => {
                        path.push_str(&format!("[{index}]"));
                        node_err = source.as_ref();
                    }
                    NodeError::Object(inner) => {
                        current = Some(inner.as_ref());
                        break;
                    }
                    _ => break,
                }
            }
        }
        path
    }
}

/// Returned by the [FromStr](std::str::FromStr) impls of [crate::wire_enum] enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{member}' is not a member of {type_name}")]
pub struct UnknownEnumMember {
    pub type_name: &'static str,
    pub member: String,
}

/// Failure of a writer to accept a value. Like [NodeError], it does not know
/// which field it was writing.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    #[error("{0} cannot be represented on the wire")]
    NonFiniteNumber(f64),
    #[error("a value without a key can only be written at the root")]
    MissingKey,
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<WriterError>,
    },
    #[error("entry '{key}': {source}")]
    Entry {
        key: String,
        #[source]
        source: Box<WriterError>,
    },
    /// a nested object failed to serialize
    #[error(transparent)]
    Object(Box<EncodeError>),
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot write field '{field}': {source}")]
    WriteFailure {
        field: String,
        #[source]
        source: WriterError,
    },
}

impl EncodeError {
    pub fn field(&self) -> &str {
        match self {
            EncodeError::WriteFailure { field, .. } => field,
        }
    }
}
