use super::Error;

/// Error when the metadata declared for a mapped type is invalid.
///
/// This occurs when:
/// - Two fields of the same type use the same remote name
/// - A declared role does not match the field's shape (a collection declared as a scalar)
/// - A nested type is itself a function, or the type graph is recursive
/// - Scalar-only settings (converter, format hints) are attached to a structure or table
///
/// These errors are detected the first time the type is resolved and are not
/// recoverable at run time.
#[derive(Debug)]
pub(super) struct MappingConfigurationError {
    type_name: Box<str>,
    message: Box<str>,
}

impl std::error::Error for MappingConfigurationError {}

impl core::fmt::Display for MappingConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid mapping for `{}`: {}", self.type_name, self.message)
    }
}

impl Error {
    /// Creates a mapping configuration error for the named type.
    pub fn mapping_configuration(type_name: &str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MappingConfiguration(
            MappingConfigurationError {
                type_name: type_name.into(),
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a mapping configuration error.
    pub fn is_mapping_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MappingConfiguration(_))
    }
}
