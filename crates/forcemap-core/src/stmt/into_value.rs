use super::{FieldKind, Value, ValueMap, ValueRecord};

use indexmap::IndexMap;
use jiff::Timestamp;
use std::collections::{BTreeMap, HashMap};

/// Types that can be read as a [`Value`].
///
/// Record fields and source record fields are read through this trait. `KIND`
/// tells the mapper how to coerce a source value into the field.
pub trait IntoValue {
    const KIND: FieldKind = FieldKind::Other;

    fn to_value(&self) -> Value;
}

macro_rules! impl_into_value {
    ( $kind:ident => $( $t:ty ),+ ) => {
        $(
            impl IntoValue for $t {
                const KIND: FieldKind = FieldKind::$kind;

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )+
    };
}

impl_into_value!(Bool => bool);
impl_into_value!(Float => f64);
impl_into_value!(Integer => i64, i32);
impl_into_value!(Timestamp => Timestamp);

impl IntoValue for f32 {
    const KIND: FieldKind = FieldKind::Float;

    fn to_value(&self) -> Value {
        Value::F64((*self).into())
    }
}

macro_rules! impl_into_value_small_int {
    ( $( $t:ty ),+ ) => {
        $(
            impl IntoValue for $t {
                const KIND: FieldKind = FieldKind::Integer;

                fn to_value(&self) -> Value {
                    Value::I64((*self).into())
                }
            }
        )+
    };
}

impl_into_value_small_int!(i8, i16, u8, u16, u32);

impl IntoValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl IntoValue for &str {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl IntoValue for ValueRecord {
    const KIND: FieldKind = FieldKind::Record;

    fn to_value(&self) -> Value {
        Value::Record(self.clone())
    }
}

impl IntoValue for ValueMap {
    fn to_value(&self) -> Value {
        Value::Map(self.clone())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    const KIND: FieldKind = T::KIND;

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: IntoValue> IntoValue for Box<T> {
    const KIND: FieldKind = T::KIND;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(IntoValue::to_value).collect())
    }
}

impl<V: IntoValue, S> IntoValue for HashMap<String, V, S> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

impl<V: IntoValue> IntoValue for BTreeMap<String, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

impl<V: IntoValue, S> IntoValue for IndexMap<String, V, S> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}
