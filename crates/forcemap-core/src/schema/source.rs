use super::RawSchema;
use crate::{async_trait, Error, Result};

use std::collections::HashMap;
use std::sync::Arc;

/// Supplies object descriptions, usually by calling the remote describe
/// endpoint.
///
/// Implementations report request failures with [`Error::transport`] and
/// names the remote API does not know with [`Error::unknown_object`].
#[async_trait]
pub trait SchemaSource: std::fmt::Debug + Send + Sync + 'static {
    async fn fetch_schema(&self, object_name: &str) -> Result<RawSchema>;
}

#[async_trait]
impl<T: SchemaSource + ?Sized> SchemaSource for Box<T> {
    async fn fetch_schema(&self, object_name: &str) -> Result<RawSchema> {
        (**self).fetch_schema(object_name).await
    }
}

#[async_trait]
impl<T: SchemaSource + ?Sized> SchemaSource for Arc<T> {
    async fn fetch_schema(&self, object_name: &str) -> Result<RawSchema> {
        (**self).fetch_schema(object_name).await
    }
}

/// Serves describe documents from memory.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    schemas: HashMap<String, RawSchema>,
}

impl StaticSource {
    pub fn new() -> StaticSource {
        StaticSource::default()
    }

    /// Loads one describe document, or a JSON array of them.
    pub fn from_json(json: &str) -> Result<StaticSource> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let schemas: Vec<RawSchema> = match value {
            serde_json::Value::Array(_) => serde_json::from_value(value)?,
            _ => vec![serde_json::from_value(value)?],
        };

        let mut source = StaticSource::new();
        for schema in schemas {
            source.insert(schema);
        }
        Ok(source)
    }

    pub fn insert(&mut self, schema: RawSchema) -> &mut Self {
        self.schemas.insert(schema.name.clone(), schema);
        self
    }

    pub fn with(mut self, schema: RawSchema) -> StaticSource {
        self.insert(schema);
        self
    }
}

#[async_trait]
impl SchemaSource for StaticSource {
    async fn fetch_schema(&self, object_name: &str) -> Result<RawSchema> {
        self.schemas
            .get(object_name)
            .cloned()
            .ok_or_else(|| Error::unknown_object(object_name))
    }
}
