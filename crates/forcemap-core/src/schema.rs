mod cache;
pub use cache::SchemaCache;

mod descriptor;
pub use descriptor::{Coercion, FieldDescriptor};

mod object;
pub use object::ObjectSchema;

mod raw;
pub use raw::{RawField, RawSchema};

mod source;
pub use source::{SchemaSource, StaticSource};

mod wire_type;
pub use wire_type::WireType;
