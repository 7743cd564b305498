use super::WireType;

use std::borrow::Cow;

/// How a field's value is adjusted before it is written.
///
/// Resolved once from the field's wire type and relationship name when the
/// schema is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Written as resolved
    Plain,

    /// Source values are minor currency units and get divided by 100
    Currency,

    /// Nested records are written as their identifier
    Relationship,
}

impl Coercion {
    pub fn resolve(wire_type: &WireType, relationship_name: Option<&str>) -> Coercion {
        if relationship_name.is_some() {
            Coercion::Relationship
        } else if *wire_type == WireType::Currency {
            Coercion::Currency
        } else {
            Coercion::Plain
        }
    }
}

/// Metadata of one remote field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Wire name of the field
    pub name: String,

    /// Name of the linked record, for relationship fields
    pub relationship_name: Option<String>,

    /// Remote type tag
    pub wire_type: WireType,

    /// True if the remote API accepts client supplied values
    pub writable: bool,

    /// Write-time adjustment derived from the fields above
    pub coercion: Coercion,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, wire_type: WireType, writable: bool) -> FieldDescriptor {
        FieldDescriptor {
            name: name.into(),
            relationship_name: None,
            coercion: Coercion::resolve(&wire_type, None),
            wire_type,
            writable,
        }
    }

    /// Sets the relationship name. Empty names are ignored.
    pub fn with_relationship(mut self, relationship_name: impl Into<String>) -> FieldDescriptor {
        let relationship_name = relationship_name.into();
        if !relationship_name.is_empty() {
            self.relationship_name = Some(relationship_name);
        }
        self.coercion = Coercion::resolve(&self.wire_type, self.relationship_name.as_deref());
        self
    }

    pub fn is_relationship(&self) -> bool {
        self.relationship_name.is_some()
    }

    /// The name records use for this field: the relationship name when there
    /// is one, the wire name otherwise.
    pub fn key(&self) -> &str {
        self.relationship_name.as_deref().unwrap_or(&self.name)
    }

    /// The name to request when reading the field.
    pub fn select_name(&self) -> Cow<'_, str> {
        match &self.relationship_name {
            Some(relationship) => Cow::Owned(format!("{relationship}.Id")),
            None => Cow::Borrowed(&self.name),
        }
    }
}
