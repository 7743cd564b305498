use super::{FieldKind, ValueMap, ValueRecord};

use jiff::Timestamp;
use serde::ser::{Serialize, SerializeSeq, Serializer};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 64-bit floating point value
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values
    List(Vec<Value>),

    /// String-keyed map, looked up by whole key
    Map(ValueMap),

    /// Null value
    #[default]
    Null,

    /// Structured record, traversed one field at a time
    Record(ValueRecord),

    /// String value
    String(String),

    /// Point in time
    Timestamp(Timestamp),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is the zero value of its type.
    ///
    /// Empty values read from a source record never override a record's own
    /// value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(v) => !v,
            Self::F64(v) => *v == 0.0,
            Self::I64(v) => *v == 0,
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::Record(record) => record.is_empty(),
            Self::String(v) => v.is_empty(),
            Self::Timestamp(v) => *v == Timestamp::UNIX_EPOCH,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&ValueRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Converts a value read from a source record into the representation a
    /// destination field of kind `kind` expects.
    ///
    /// Integers become timestamps (Unix seconds) or floats. Anything else is
    /// returned unchanged.
    pub fn coerce(self, kind: FieldKind) -> Value {
        match (kind, self) {
            (FieldKind::Timestamp, Self::I64(secs)) => match Timestamp::from_second(secs) {
                Ok(ts) => Self::Timestamp(ts),
                Err(_) => Self::I64(secs),
            },
            (FieldKind::Float, Self::I64(v)) => Self::F64(v as f64),
            (_, value) => value,
        }
    }

    /// Replaces a nested record by its identifier, when it has one.
    pub fn into_identified(self) -> Value {
        match self {
            Self::Record(record) => match record.id() {
                Some(id) => id.clone(),
                None => Self::Record(record),
            },
            value => value,
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::F64(_) => "F64",
            Self::I64(_) => "I64",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Null => "Null",
            Self::Record(_) => "Record",
            Self::String(_) => "String",
            Self::Timestamp(_) => "Timestamp",
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::F64(v) => serializer.serialize_f64(*v),
            Self::I64(v) => serializer.serialize_i64(*v),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => map.serialize(serializer),
            Self::Null => serializer.serialize_none(),
            Self::Record(record) => record.serialize(serializer),
            Self::String(v) => serializer.serialize_str(v),
            Self::Timestamp(v) => serializer.collect_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Value {
        Value::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Value {
        Value::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Value {
        Value::I64(src.into())
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Value {
        Value::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Value {
        Value::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Value {
        Value::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl From<Timestamp> for Value {
    fn from(src: Timestamp) -> Value {
        Value::Timestamp(src)
    }
}

impl From<ValueRecord> for Value {
    fn from(src: ValueRecord) -> Value {
        Value::Record(src)
    }
}

impl From<ValueMap> for Value {
    fn from(src: ValueMap) -> Value {
        Value::Map(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Value {
        match src {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
