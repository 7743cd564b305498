mod error;
pub use error::{Error, IntoError};

pub mod region;
pub use region::{Countries, RegionLookup};

pub mod schema;
pub use schema::{ObjectSchema, SchemaCache, SchemaSource};

pub mod stmt;

/// A Result type alias that uses forcemap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
