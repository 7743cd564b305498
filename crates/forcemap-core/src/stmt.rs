mod into_value;
pub use into_value::IntoValue;

mod json;

pub mod path;

mod source;
pub use source::Source;

mod ty;
pub use ty::FieldKind;

mod value;
pub use value::Value;

mod value_map;
pub use value_map::ValueMap;

mod value_record;
pub use value_record::ValueRecord;
