use super::{unexpected_scalar, unexpected_value, Converter, Format};
use crate::{Error, Result, Scalar, Value};

use rust_decimal::Decimal;
use std::str::FromStr;

/// Packed decimal numbers for amounts and quantities.
///
/// With a `scale` the value is sent with exactly that many fractional digits.
/// A value with more significant fractional digits, or with more digits in
/// total than `precision`, is rejected rather than rounded.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalConverter;

impl DecimalConverter {
    /// The largest `scale` hint a decimal field may declare.
    pub const MAX_SCALE: u32 = 28;

    /// The largest `precision` hint a decimal field may declare.
    pub const MAX_PRECISION: u32 = 29;

    fn check(&self, value: Decimal, format: &Format) -> Result<Decimal> {
        let mut scaled = value;

        if let Some(scale) = format.scale {
            if scale > Self::MAX_SCALE {
                return Err(Error::invalid_value(format!(
                    "scale {scale} exceeds the supported {} fractional digits",
                    Self::MAX_SCALE
                )));
            }
            if value.normalize().scale() > scale {
                return Err(Error::invalid_value(format!(
                    "{value} has more than {scale} fractional digits"
                )));
            }

            // `rescale` keeps a smaller scale when the digits would overflow
            scaled.rescale(scale);
            if scaled.scale() != scale {
                return Err(Error::invalid_value(format!(
                    "{value} cannot be represented with {scale} fractional digits"
                )));
            }
        }

        if let Some(precision) = format.precision {
            let digits = scaled.mantissa().unsigned_abs().to_string().len();
            if digits > precision as usize {
                return Err(Error::invalid_value(format!(
                    "{value} has more than {precision} digits"
                )));
            }
        }

        Ok(scaled)
    }
}

impl Converter for DecimalConverter {
    fn encode(&self, value: Value, format: &Format) -> Result<Scalar> {
        match value {
            Value::Decimal(value) => self.check(value, format).map(Scalar::Decimal),
            _ => Err(unexpected_value(&value, "Decimal")),
        }
    }

    fn decode(&self, scalar: Scalar, format: &Format) -> Result<Option<Value>> {
        let value = match scalar {
            Scalar::Decimal(value) => value,
            Scalar::Int(n) => Decimal::from(n),
            Scalar::Char(ref text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                Decimal::from_str(text).map_err(|_| {
                    Error::invalid_value(format!("`{text}` is not a decimal number"))
                })?
            }
            Scalar::Float(_) => return Err(unexpected_scalar(&scalar, "Decimal")),
        };

        self.check(value, format).map(|value| Some(Value::Decimal(value)))
    }
}
