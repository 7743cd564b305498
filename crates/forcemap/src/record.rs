use forcemap_core::stmt::{FieldKind, IntoValue, Value};

/// A statically declared field of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Rust field name
    pub name: &'static str,

    /// Wire name the field is written under
    pub wire_name: &'static str,

    /// Dotted path of an overriding value in the source record
    pub source: Option<&'static str>,

    /// Destination kind, used to coerce source values
    pub kind: FieldKind,
}

/// A typed domain record mapped onto a remote object.
///
/// Usually implemented with `#[derive(Record)]`:
///
/// ```ignore
/// #[derive(forcemap::Record)]
/// #[object("Contact")]
/// struct Contact {
///     #[field("Id")]
///     id: Option<String>,
///
///     #[field("LastName")]
///     #[source("customer.name")]
///     last_name: String,
/// }
/// ```
pub trait Record: IntoValue + Sync {
    /// Remote object name
    const OBJECT: &'static str;

    /// Wire name of the external id field, for upserts
    const EXTERNAL_ID: Option<&'static str> = None;

    /// Fields carrying a wire name, in declaration order.
    fn fields() -> &'static [FieldDef];

    /// Reads the field at `index` of [`Record::fields`].
    fn field_value(&self, index: usize) -> Value;

    /// Returns `true` if the record declares a field with this wire name.
    fn declares(wire_name: &str) -> bool {
        Self::fields().iter().any(|field| field.wire_name == wire_name)
    }
}
