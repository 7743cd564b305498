use super::Error;

/// Error when the remote API does not know an object name.
#[derive(Debug)]
pub(super) struct UnknownObjectError {
    object: Box<str>,
}

impl std::error::Error for UnknownObjectError {}

impl core::fmt::Display for UnknownObjectError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown object `{}`", self.object)
    }
}

impl Error {
    /// Creates an unknown object error.
    pub fn unknown_object(object: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownObject(UnknownObjectError {
            object: object.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown object error.
    pub fn is_unknown_object(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownObject(_))
    }
}
