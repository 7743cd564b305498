use super::Error;

/// A describe document that could not be decoded.
#[derive(Debug)]
pub(super) struct InvalidSchemaError {
    inner: serde_json::Error,
}

impl std::error::Error for InvalidSchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl core::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema document: {}", self.inner)
    }
}

impl Error {
    /// Returns `true` if this error is an undecodable describe document.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchemaError { inner: err }))
    }
}
