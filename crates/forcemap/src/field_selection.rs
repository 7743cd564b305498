use indexmap::IndexSet;

/// Field names to request when reading a record, in schema order.
///
/// Relationship fields appear as `<relationship>.Id`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    names: IndexSet<String>,
}

impl FieldSelection {
    pub fn new() -> FieldSelection {
        FieldSelection::default()
    }

    /// Adds `name` unless it is already selected. Returns `true` if added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Renders the selection as a `fields` query parameter value.
    pub fn to_param(&self) -> String {
        self.iter().collect::<Vec<_>>().join(",")
    }
}

impl<S: Into<String>> Extend<S> for FieldSelection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> FieldSelection {
        FieldSelection {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
