use super::{IntoValue, Value};
use crate::Result;

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// A secondary value records pull override values from.
///
/// Structured types follow a dotted path one segment at a time (see
/// [`path`](super::path)); string-keyed maps look the remaining path up as a
/// single key. Returns `Ok(None)` when the path resolves to nothing or to an
/// empty value.
pub trait Source: Sync {
    fn resolve(&self, path: &str) -> Result<Option<Value>>;
}

impl<T: Source + ?Sized> Source for &T {
    fn resolve(&self, path: &str) -> Result<Option<Value>> {
        (**self).resolve(path)
    }
}

impl<T: Source + ?Sized> Source for Box<T> {
    fn resolve(&self, path: &str) -> Result<Option<Value>> {
        (**self).resolve(path)
    }
}

impl<T: Source + ?Sized + Send> Source for Arc<T> {
    fn resolve(&self, path: &str) -> Result<Option<Value>> {
        (**self).resolve(path)
    }
}

fn lookup<V: IntoValue>(value: Option<&V>) -> Option<Value> {
    value.map(IntoValue::to_value).filter(|value| !value.is_empty())
}

impl<V: IntoValue + Sync, S: Sync> Source for HashMap<String, V, S>
where
    S: std::hash::BuildHasher,
{
    fn resolve(&self, path: &str) -> Result<Option<Value>> {
        Ok(lookup(self.get(path)))
    }
}

impl<V: IntoValue + Sync> Source for BTreeMap<String, V> {
    fn resolve(&self, path: &str) -> Result<Option<Value>> {
        Ok(lookup(self.get(path)))
    }
}

impl<V: IntoValue + Sync, S: Sync> Source for IndexMap<String, V, S>
where
    S: std::hash::BuildHasher,
{
    fn resolve(&self, path: &str) -> Result<Option<Value>> {
        Ok(lookup(self.get(path)))
    }
}

impl Source for serde_json::Map<String, serde_json::Value> {
    fn resolve(&self, path: &str) -> Result<Option<Value>> {
        Ok(lookup(self.get(path)))
    }
}

impl Source for serde_json::Value {
    fn resolve(&self, path: &str) -> Result<Option<Value>> {
        match self {
            serde_json::Value::Object(map) => map.resolve(path),
            _ => Ok(None),
        }
    }
}
