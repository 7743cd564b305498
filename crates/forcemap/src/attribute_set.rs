use forcemap_core::stmt::Value;

use indexmap::IndexMap;
use serde::Serialize;

/// Wire field names mapped to the values to send, in schema order.
///
/// Produced by [`Mapper::map_attributes`](crate::Mapper::map_attributes) and
/// serialized as the request body.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
    attributes: IndexMap<String, Value>,
}

impl AttributeSet {
    pub fn new() -> AttributeSet {
        AttributeSet::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Removes `name`, keeping the order of the remaining attributes.
    ///
    /// Removing a name that is not present does nothing.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl IntoIterator for AttributeSet {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> AttributeSet {
        AttributeSet {
            attributes: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
