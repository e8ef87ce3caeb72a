//! Conversion rules between native values and remote scalars.

mod datetime;
pub use datetime::Temporal;

mod decimal;
pub use decimal::DecimalConverter;

mod flag;
pub use flag::Flag;

mod float;
pub use float::Float;

mod format;
pub use format::{Format, Pad};

mod integer;
pub use integer::Integer;

mod registry;
pub use registry::Registry;

mod text;
pub use text::Text;

use crate::{Result, Scalar, Value};

use std::fmt::Debug;

/// Encodes native values into remote scalars and decodes them back.
///
/// Converters are stateless and deterministic. For every value `encode`
/// accepts, `decode` returns that value again. A converter never rounds,
/// truncates or coerces a value; it rejects what it cannot represent with an
/// invalid value error.
pub trait Converter: Debug + Send + Sync + 'static {
    fn encode(&self, value: Value, format: &Format) -> Result<Scalar>;

    /// Decodes a remote scalar.
    ///
    /// Returns `Ok(None)` when the scalar is the remote system's initial value
    /// for the type, which is handled as if the field were absent.
    fn decode(&self, scalar: Scalar, format: &Format) -> Result<Option<Value>>;
}

fn unexpected_value(value: &Value, expected: &str) -> crate::Error {
    crate::Error::invalid_value(format!(
        "expected {expected}, found {}",
        value.variant_name()
    ))
}

fn unexpected_scalar(scalar: &Scalar, expected: &str) -> crate::Error {
    crate::Error::invalid_value(format!(
        "expected {expected} scalar, found {}",
        scalar.kind_name()
    ))
}
