use super::{resolve::Resolved, Config, Mode};
use crate::AttributeSet;

use forcemap_core::{
    schema::{Coercion, FieldDescriptor, ObjectSchema, WireType},
    stmt::Value,
};
use indexmap::IndexMap;
use jiff::tz::TimeZone;
use tracing::trace;

/// Projects resolved record fields onto the object schema, in schema order.
pub(crate) fn project(
    schema: &ObjectSchema,
    resolved: &IndexMap<String, Resolved>,
    mode: Mode,
    config: &Config,
) -> AttributeSet {
    let mut attributes = AttributeSet::new();

    for field in schema.fields() {
        let Some(entry) = resolved.get(field.key()) else {
            continue;
        };

        if !mode.is_write() {
            attributes.insert(field.select_name(), entry.value.clone());
            continue;
        }

        if entry.value.is_null() {
            continue;
        }

        if !field.writable {
            trace!(object = schema.name(), field = %field.name, "skipping read-only field");
            continue;
        }

        match write_value(field, entry, config) {
            Some(value) => {
                attributes.insert(field.name.as_str(), value);
            }
            None => {
                trace!(object = schema.name(), field = %field.name, "relationship has no identifier");
            }
        }
    }

    for name in unmatched_keys(schema, resolved) {
        trace!(object = schema.name(), field = %name, "field not in schema");
    }

    attributes
}

/// Record keys that no schema field is keyed by.
fn unmatched_keys<'a>(
    schema: &'a ObjectSchema,
    resolved: &'a IndexMap<String, Resolved>,
) -> impl Iterator<Item = &'a String> + 'a {
    resolved
        .keys()
        .filter(|name| !schema.resolve(name).is_some_and(|field| field.key() == *name))
}

/// Applies the field's write-time coercion. Returns `None` when a
/// relationship record carries no identifier.
fn write_value(field: &FieldDescriptor, entry: &Resolved, config: &Config) -> Option<Value> {
    let value = match (field.coercion, entry.value.clone()) {
        // Source systems express currency in minor units
        (Coercion::Currency, Value::F64(amount)) if entry.from_source => Value::F64(amount / 100.0),
        (Coercion::Relationship, Value::Record(record)) => record.id()?.clone(),
        (_, value) => value,
    };

    let value = match value {
        Value::Timestamp(ts) if field.wire_type == WireType::Date => {
            Value::String(ts.to_zoned(TimeZone::UTC).date().to_string())
        }
        Value::String(code) if field.name == config.currency_code_field => {
            Value::String(code.to_uppercase())
        }
        value => value,
    };

    Some(value)
}
