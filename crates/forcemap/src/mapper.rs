mod builder;
pub use builder::Builder;

mod project;
mod resolve;

use crate::{AttributeSet, FieldSelection, Record};

use forcemap_core::{
    region::RegionLookup,
    schema::{ObjectSchema, SchemaCache, SchemaSource},
    stmt::Source,
    Result,
};
use std::sync::Arc;

/// What the produced attributes are for.
///
/// Field resolution is the same for every mode; only the final projection
/// against the object schema differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Body of a create request
    Insert,

    /// Body of an update or upsert request
    Update,

    /// Field list of a read request
    SelectiveRead,
}

impl Mode {
    pub fn is_write(self) -> bool {
        matches!(self, Mode::Insert | Mode::Update)
    }
}

/// Maps records to the attributes sent to the remote API.
///
/// Cloning a mapper is cheap; clones share the schema cache.
#[derive(Debug, Clone)]
pub struct Mapper {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    cache: Arc<SchemaCache>,
    config: Config,
}

#[derive(Debug)]
pub(crate) struct Config {
    /// Field whose value is upper-cased on write
    pub(crate) currency_code_field: String,

    /// Wire name suffixes of fields holding country or region names
    pub(crate) region_suffixes: Vec<String>,

    pub(crate) regions: Arc<dyn RegionLookup>,
}

impl Mapper {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates a mapper with the default configuration.
    pub fn new(source: impl SchemaSource) -> Mapper {
        Builder::default().build(source)
    }

    pub fn cache(&self) -> &Arc<SchemaCache> {
        &self.shared.cache
    }

    /// Returns the schema of `object_name`, fetching it on first use.
    pub async fn describe(&self, object_name: &str) -> Result<Arc<ObjectSchema>> {
        self.shared.cache.describe(object_name).await
    }

    /// Maps `record` to the attributes to send for `mode`.
    ///
    /// Fields declaring a source path take their value from `source` when
    /// the path resolves to a non-empty value there. Only fields the remote
    /// schema knows are kept; write modes also drop null and read-only fields.
    #[tracing::instrument(skip_all, fields(object = R::OBJECT, mode = ?mode))]
    pub async fn map_attributes<R: Record>(
        &self,
        record: &R,
        source: Option<&dyn Source>,
        mode: Mode,
    ) -> Result<AttributeSet> {
        let resolved = resolve::resolve_record(record, source, &self.shared.config)?;
        let schema = self.describe(R::OBJECT).await?;
        Ok(project::project(&schema, &resolved, mode, &self.shared.config))
    }

    /// Returns the field names to request when reading `record`.
    pub async fn select_fields<R: Record>(
        &self,
        record: &R,
        source: Option<&dyn Source>,
    ) -> Result<FieldSelection> {
        let attributes = self
            .map_attributes(record, source, Mode::SelectiveRead)
            .await?;
        Ok(attributes.keys().collect())
    }

    /// Maps `record` for an upsert keyed by its external id.
    ///
    /// The external id travels in the request URL, so its field is removed
    /// from the attributes.
    pub async fn upsert_attributes<R: Record>(
        &self,
        record: &R,
        source: Option<&dyn Source>,
    ) -> Result<AttributeSet> {
        let mut attributes = self.map_attributes(record, source, Mode::Update).await?;
        if let Some(external_id) = R::EXTERNAL_ID {
            attributes.remove(external_id);
        }
        Ok(attributes)
    }

    /// Comma separated names of every selectable field of `R`'s object.
    pub async fn all_fields<R: Record>(&self) -> Result<String> {
        let schema = self.describe(R::OBJECT).await?;
        Ok(schema.all_field_names().to_string())
    }
}
