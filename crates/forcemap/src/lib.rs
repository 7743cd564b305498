mod attribute_set;
pub use attribute_set::AttributeSet;

mod field_selection;
pub use field_selection::FieldSelection;

pub mod mapper;
pub use mapper::{Builder, Mapper, Mode};

mod record;
pub use record::{FieldDef, Record};

pub use forcemap_core::{
    region::{Countries, RegionLookup},
    schema::{FieldDescriptor, ObjectSchema, RawField, RawSchema, SchemaCache, SchemaSource, StaticSource},
    stmt::{FieldKind, IntoValue, Source, Value, ValueMap, ValueRecord},
    Error, Result,
};

pub use forcemap_macros::{Record, Source};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{FieldDef, Record};
    pub use forcemap_core::{
        stmt::{path, FieldKind, IntoValue, Source, Value, ValueRecord},
        Error, Result,
    };
    pub use std::option::Option;
}
