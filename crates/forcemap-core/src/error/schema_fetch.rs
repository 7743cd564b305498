use super::Error;

/// Error when the schema of an object could not be obtained.
///
/// The failure reported by the schema source (a transport error or an unknown
/// object name) is attached as the cause.
#[derive(Debug)]
pub(super) struct SchemaFetchError {
    object: Box<str>,
}

impl std::error::Error for SchemaFetchError {}

impl core::fmt::Display for SchemaFetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to describe object `{}`", self.object)
    }
}

impl Error {
    /// Creates a schema fetch error for `object`.
    ///
    /// Usually added as context on top of the error returned by a
    /// [`SchemaSource`](crate::SchemaSource).
    pub fn schema_fetch(object: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaFetch(SchemaFetchError {
            object: object.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema fetch error.
    pub fn is_schema_fetch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaFetch(_))
    }
}
