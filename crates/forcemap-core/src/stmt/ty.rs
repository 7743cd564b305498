/// The shape of a record field, as far as value coercion is concerned.
///
/// A record field's kind is derived from its Rust type through
/// [`IntoValue::KIND`](super::IntoValue::KIND) and decides how a value pulled
/// from a source record is converted before it replaces the field's own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Float,
    Integer,
    Text,
    Timestamp,

    /// A nested record, usually a relationship.
    Record,

    /// Anything without a coercion rule.
    Other,
}
