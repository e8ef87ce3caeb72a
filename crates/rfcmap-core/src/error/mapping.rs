use super::{Error, ErrorKind};

/// Error when a field value fails to encode or decode.
///
/// The failing field is identified by its path of remote names from the root
/// structure; the converter's error is kept as the cause.
#[derive(Debug)]
pub(super) struct MappingError {
    pub(super) path: Box<str>,
}

impl std::error::Error for MappingError {}

impl core::fmt::Display for MappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapping failed at `{}`", self.path)
    }
}

impl Error {
    /// Wraps `cause` in a mapping error for the field at `path`.
    ///
    /// If `cause` is itself a mapping error, its path is relative to `path`:
    /// the two are joined into one error, so `INNER` wrapping `CARRIER`
    /// reports `INNER.CARRIER` and `FLIGHT_LIST` wrapping `[1].PRICE` reports
    /// `FLIGHT_LIST[1].PRICE`.
    pub fn mapping(path: impl Into<String>, cause: Error) -> Error {
        let path = path.into();

        let joined = match cause.kind() {
            ErrorKind::Mapping(inner) => Some(join(&path, &inner.path)),
            _ => None,
        };

        let (path, cause) = match joined {
            Some(joined) => match cause.cause() {
                Some(root) => (joined, root.clone()),
                None => {
                    return Error::from(ErrorKind::Mapping(MappingError {
                        path: joined.into(),
                    }))
                }
            },
            None => (path, cause),
        };

        cause.context(Error::from(ErrorKind::Mapping(MappingError {
            path: path.into(),
        })))
    }

    /// Returns `true` if this error is a mapping error.
    pub fn is_mapping(&self) -> bool {
        matches!(self.kind(), ErrorKind::Mapping(_))
    }

    /// The dotted path of the failing field, for mapping errors.
    pub fn field_path(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::Mapping(err) => Some(&err.path),
            _ => None,
        }
    }
}

fn join(outer: &str, inner: &str) -> String {
    if outer.is_empty() {
        inner.to_string()
    } else if inner.is_empty() || inner.starts_with('[') {
        format!("{outer}{inner}")
    } else {
        format!("{outer}.{inner}")
    }
}
