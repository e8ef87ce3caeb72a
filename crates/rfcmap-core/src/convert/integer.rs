use super::{unexpected_scalar, unexpected_value, Converter, Format};
use crate::{Error, Result, Scalar, Type, Value};

/// Integers of one native width.
///
/// Without a width the value is sent as [`Scalar::Int`]. With a width it is
/// sent as zero-padded digit text of exactly that many characters, which
/// only holds non-negative values.
#[derive(Debug, Clone, Copy)]
pub struct Integer {
    ty: Type,
}

impl Integer {
    /// # Panics
    ///
    /// Panics if `ty` is not an integer type.
    pub fn new(ty: Type) -> Integer {
        assert!(ty.is_integer(), "`{ty}` is not an integer type");
        Integer { ty }
    }

    pub fn ty(&self) -> Type {
        self.ty
    }
}

impl Converter for Integer {
    fn encode(&self, value: Value, format: &Format) -> Result<Scalar> {
        let Some(n) = value.to_i128() else {
            return Err(unexpected_value(&value, "an integer"));
        };

        match format.width {
            None => i64::try_from(n).map(Scalar::Int).map_err(|_| {
                Error::invalid_value(format!("{n} does not fit a remote integer"))
            }),
            Some(width) => {
                if n < 0 {
                    return Err(Error::invalid_value(format!(
                        "negative value {n} cannot be sent as {width}-digit numeric text"
                    )));
                }

                let digits = n.to_string();
                if digits.len() > width {
                    return Err(Error::invalid_value(format!(
                        "{n} has more than {width} digits"
                    )));
                }

                Ok(Scalar::Char(format!("{digits:0>width$}")))
            }
        }
    }

    fn decode(&self, scalar: Scalar, _format: &Format) -> Result<Option<Value>> {
        let n = match &scalar {
            Scalar::Int(n) => i128::from(*n),
            Scalar::Char(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                if !text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::invalid_value(format!(
                        "`{text}` is not numeric text"
                    )));
                }
                text.parse::<i128>().map_err(|_| {
                    Error::invalid_value(format!("`{text}` is out of range"))
                })?
            }
            _ => return Err(unexpected_scalar(&scalar, "Int or Char")),
        };

        Value::from_i128(n, self.ty).map(Some)
    }
}
