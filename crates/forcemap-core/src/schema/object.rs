use super::{FieldDescriptor, RawSchema, WireType};

use std::collections::HashMap;

/// The fields of one remote object type, in schema order.
#[derive(Debug)]
pub struct ObjectSchema {
    /// Remote object name
    name: String,

    /// Field metadata, in the order the remote API declares it
    fields: Vec<FieldDescriptor>,

    /// Comma separated wire names of every selectable field
    all_field_names: String,

    /// Field position by wire name
    by_name: HashMap<String, usize>,

    /// Field position by relationship name
    by_relationship: HashMap<String, usize>,
}

impl ObjectSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> ObjectSchema {
        // Geolocation fields cannot be projected in a flat field list
        let all_field_names = fields
            .iter()
            .filter(|field| !field.wire_type.is_geolocation())
            .map(|field| field.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut by_name = HashMap::with_capacity(fields.len());
        let mut by_relationship = HashMap::new();

        for (index, field) in fields.iter().enumerate() {
            by_name.entry(field.name.clone()).or_insert(index);
            if let Some(relationship) = &field.relationship_name {
                by_relationship.entry(relationship.clone()).or_insert(index);
            }
        }

        ObjectSchema {
            name: name.into(),
            fields,
            all_field_names,
            by_name,
            by_relationship,
        }
    }

    /// Builds the schema from a describe document.
    ///
    /// `object_name` is used when the document does not carry a name.
    pub fn from_raw(object_name: &str, raw: RawSchema) -> ObjectSchema {
        let name = if raw.name.is_empty() {
            object_name.to_string()
        } else {
            raw.name
        };

        let fields = raw
            .fields
            .into_iter()
            .map(|field| {
                let descriptor =
                    FieldDescriptor::new(field.name, WireType::from_tag(&field.ty), field.updateable);
                match field.relationship_name {
                    Some(relationship) => descriptor.with_relationship(relationship),
                    None => descriptor,
                }
            })
            .collect();

        ObjectSchema::new(name, fields)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Comma separated names of every field that can be selected, for
    /// "select all" reads.
    pub fn all_field_names(&self) -> &str {
        &self.all_field_names
    }

    /// Returns the field with wire name `name`.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name.get(name).map(|&index| &self.fields[index])
    }

    /// Returns the field a record key refers to: the relationship field when
    /// `key` is a relationship name, the field with that wire name otherwise.
    pub fn resolve(&self, key: &str) -> Option<&FieldDescriptor> {
        self.by_relationship
            .get(key)
            .map(|&index| &self.fields[index])
            .or_else(|| self.field(key))
    }
}
