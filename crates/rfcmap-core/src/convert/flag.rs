use super::{unexpected_scalar, unexpected_value, Converter, Format};
use crate::{Error, Result, Scalar, Value};

/// Single-character flag: `true` is `"X"`, `false` is empty.
///
/// A blank decodes to `false`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flag;

impl Converter for Flag {
    fn encode(&self, value: Value, _format: &Format) -> Result<Scalar> {
        match value {
            Value::Bool(true) => Ok(Scalar::from("X")),
            Value::Bool(false) => Ok(Scalar::from("")),
            _ => Err(unexpected_value(&value, "Bool")),
        }
    }

    fn decode(&self, scalar: Scalar, _format: &Format) -> Result<Option<Value>> {
        let Scalar::Char(text) = &scalar else {
            return Err(unexpected_scalar(&scalar, "Char"));
        };

        match text.trim() {
            "X" => Ok(Some(Value::Bool(true))),
            "" => Ok(Some(Value::Bool(false))),
            other => Err(Error::invalid_value(format!(
                "`{other}` is not a flag value"
            ))),
        }
    }
}
