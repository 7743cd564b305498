use super::{IntoValue, Value, ValueMap};

impl IntoValue for serde_json::Value {
    fn to_value(&self) -> Value {
        Value::from(self)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(src: &serde_json::Value) -> Value {
        use serde_json::Value as Json;

        match src {
            Json::Null => Value::Null,
            Json::Bool(v) => Value::Bool(*v),
            Json::Number(n) => match n.as_i64() {
                Some(v) => Value::I64(v),
                None => n.as_f64().map(Value::F64).unwrap_or(Value::Null),
            },
            Json::String(v) => Value::String(v.clone()),
            Json::Array(items) => Value::List(items.iter().map(Value::from).collect()),
            Json::Object(map) => Value::Map(
                map.iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect::<ValueMap>(),
            ),
        }
    }
}
