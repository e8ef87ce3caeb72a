use super::{unexpected_scalar, unexpected_value, Converter, Format};
use crate::{Error, Result, Scalar, Type, Value};

/// Binary floating point numbers.
#[derive(Debug, Clone, Copy)]
pub struct Float {
    ty: Type,
}

impl Float {
    /// # Panics
    ///
    /// Panics if `ty` is neither `F32` nor `F64`.
    pub fn new(ty: Type) -> Float {
        assert!(ty.is_float(), "`{ty}` is not a floating point type");
        Float { ty }
    }
}

impl Converter for Float {
    fn encode(&self, value: Value, _format: &Format) -> Result<Scalar> {
        let n = match value {
            Value::F32(n) => f64::from(n),
            Value::F64(n) => n,
            _ => return Err(unexpected_value(&value, "a float")),
        };

        if !n.is_finite() {
            return Err(Error::invalid_value(format!(
                "{n} cannot be sent to the remote system"
            )));
        }

        Ok(Scalar::Float(n))
    }

    fn decode(&self, scalar: Scalar, _format: &Format) -> Result<Option<Value>> {
        let n = match scalar {
            Scalar::Float(n) => n,
            Scalar::Int(n) => n as f64,
            _ => return Err(unexpected_scalar(&scalar, "Float")),
        };

        match self.ty {
            Type::F32 => {
                let narrowed = n as f32;
                if n.is_finite() && !narrowed.is_finite() {
                    return Err(Error::invalid_value(format!(
                        "{n} is out of range for f32"
                    )));
                }
                Ok(Some(Value::F32(narrowed)))
            }
            _ => Ok(Some(Value::F64(n))),
        }
    }
}
