use super::{path, Source, Value};
use crate::{Error, Result};

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A structured value: a named type with a fixed set of named fields.
///
/// Unlike a [`ValueMap`](super::ValueMap), a record is traversed one path
/// segment at a time, and naming a field the record does not have is an
/// error.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    /// Name of the type the record was built from
    ty: String,

    /// Field values by field name, in declaration order
    fields: IndexMap<String, Value>,

    /// Name of the field holding the record's identifier
    id_field: Option<String>,
}

impl ValueRecord {
    pub fn new(ty: impl Into<String>) -> ValueRecord {
        ValueRecord {
            ty: ty.into(),
            fields: IndexMap::new(),
            id_field: None,
        }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Marks `name` as the field identifying the record.
    pub fn set_id_field(&mut self, name: impl Into<String>) {
        self.id_field = Some(name.into());
    }

    /// Returns the record's identifier, if it has a non-empty one.
    pub fn id(&self) -> Option<&Value> {
        let name = self.id_field.as_deref()?;
        self.fields.get(name).filter(|value| !value.is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// A record is empty when every one of its fields is.
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Value::is_empty)
    }
}

impl Source for ValueRecord {
    fn resolve(&self, path: &str) -> Result<Option<Value>> {
        let (segment, rest) = path::split(path);
        let Some(value) = self.fields.get(segment) else {
            return Err(Error::field_access(&self.ty, segment));
        };
        path::descend(&self.ty, segment, value, rest)
    }
}

impl Serialize for ValueRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
