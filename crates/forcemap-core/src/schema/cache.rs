use super::{ObjectSchema, SchemaSource};
use crate::{Error, Result};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OnceCell;
use tracing::debug;

type Slot = Arc<OnceCell<Arc<ObjectSchema>>>;

/// Process-lifetime cache of object schemas.
///
/// The first `describe` call for an object name fetches the schema from the
/// [`SchemaSource`]; every later call returns the same [`ObjectSchema`].
/// Entries are never refreshed or evicted.
///
/// Concurrent first calls for one name share a single fetch. A failed fetch
/// is not cached, so a later call tries again.
#[derive(Debug)]
pub struct SchemaCache {
    source: Box<dyn SchemaSource>,

    /// One slot per object name ever requested
    slots: Mutex<HashMap<String, Slot>>,
}

impl SchemaCache {
    pub fn new(source: impl SchemaSource) -> SchemaCache {
        SchemaCache {
            source: Box::new(source),
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the schema of `object_name`, fetching it on first use.
    pub async fn describe(&self, object_name: &str) -> Result<Arc<ObjectSchema>> {
        if object_name.is_empty() {
            return Err(Error::unknown_object(object_name).context(Error::schema_fetch(object_name)));
        }

        let slot = self.slot(object_name);
        let schema = slot.get_or_try_init(|| self.fetch(object_name)).await?;
        Ok(schema.clone())
    }

    /// Returns the schema of `object_name` if it has already been fetched.
    pub fn cached(&self, object_name: &str) -> Option<Arc<ObjectSchema>> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(object_name).and_then(|slot| slot.get().cloned())
    }

    /// Number of cached schemas.
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.values().filter(|slot| slot.initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, object_name: &str) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.entry(object_name.to_string()).or_default().clone()
    }

    async fn fetch(&self, object_name: &str) -> Result<Arc<ObjectSchema>> {
        debug!(object = object_name, "schema cache miss");

        let raw = self
            .source
            .fetch_schema(object_name)
            .await
            .map_err(|err| err.context(Error::schema_fetch(object_name)))?;

        let schema = ObjectSchema::from_raw(object_name, raw);
        debug!(
            object = object_name,
            fields = schema.fields().len(),
            "schema cached"
        );

        Ok(Arc::new(schema))
    }
}
