use super::Error;

/// Error when a source path cannot be followed through a structured value.
///
/// This occurs when:
/// - A path segment names a field the intermediate record does not declare
/// - A path continues past a scalar value
///
/// Source paths are declared statically next to record fields, so hitting this
/// error means the declaration and the source type disagree.
#[derive(Debug)]
pub(super) struct FieldAccessError {
    ty: Box<str>,
    segment: Box<str>,
}

impl std::error::Error for FieldAccessError {}

impl core::fmt::Display for FieldAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field access failed: `{}` has no field `{}`",
            self.ty, self.segment
        )
    }
}

impl Error {
    /// Creates a field access error for `segment` on the structured type `ty`.
    pub fn field_access(ty: impl Into<String>, segment: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FieldAccess(FieldAccessError {
            ty: ty.into().into(),
            segment: segment.into().into(),
        }))
    }

    /// Returns `true` if this error is a field access error.
    pub fn is_field_access(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldAccess(_))
    }
}
