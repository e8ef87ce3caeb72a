use super::Error;

/// Error when no conversion rule resolves for a scalar field.
///
/// The registry never falls back to passing a raw value through, so this is
/// always reported as a configuration error.
#[derive(Debug)]
pub(super) struct NoConverterFoundError {
    native_type: Box<str>,
    key: Option<Box<str>>,
}

impl std::error::Error for NoConverterFoundError {}

impl core::fmt::Display for NoConverterFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no converter found for native type `{}`", self.native_type)?;
        if let Some(key) = &self.key {
            write!(f, " (override key `{key}`)")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a native type (and optional override key) with no converter.
    pub fn no_converter_found(native_type: &str, key: Option<&str>) -> Error {
        Error::from(super::ErrorKind::NoConverterFound(NoConverterFoundError {
            native_type: native_type.into(),
            key: key.map(Into::into),
        }))
    }

    /// Returns `true` if this error is a missing converter error.
    pub fn is_no_converter_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoConverterFound(_))
    }
}
