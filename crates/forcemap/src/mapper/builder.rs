use super::{Config, Mapper, Shared};

use forcemap_core::{
    region::{Countries, RegionLookup},
    schema::{SchemaCache, SchemaSource},
};
use std::sync::Arc;

/// Configures a [`Mapper`].
#[derive(Debug, Clone)]
pub struct Builder {
    currency_code_field: String,
    region_suffixes: Vec<String>,
    regions: Arc<dyn RegionLookup>,
}

impl Default for Builder {
    fn default() -> Builder {
        Builder {
            currency_code_field: "CurrencyIsoCode".to_string(),
            region_suffixes: vec!["Country".to_string(), "State".to_string()],
            regions: Arc::new(Countries),
        }
    }
}

impl Builder {
    /// Set the field whose value is upper-cased on write
    pub fn currency_code_field(&mut self, name: impl Into<String>) -> &mut Self {
        self.currency_code_field = name.into();
        self
    }

    /// Set the lookup used to turn region names into 2-letter codes
    pub fn region_lookup(&mut self, lookup: impl RegionLookup) -> &mut Self {
        self.regions = Arc::new(lookup);
        self
    }

    /// Set the wire name suffixes of fields holding region names
    pub fn region_suffixes<I, S>(&mut self, suffixes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.region_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(&self, source: impl SchemaSource) -> Mapper {
        self.build_with_cache(Arc::new(SchemaCache::new(source)))
    }

    /// Builds a mapper sharing an existing schema cache.
    pub fn build_with_cache(&self, cache: Arc<SchemaCache>) -> Mapper {
        Mapper {
            shared: Arc::new(Shared {
                cache,
                config: Config {
                    currency_code_field: self.currency_code_field.clone(),
                    region_suffixes: self.region_suffixes.clone(),
                    regions: self.regions.clone(),
                },
            }),
        }
    }
}
