use super::{unexpected_scalar, unexpected_value, Converter, Format, Pad};
use crate::{Error, Result, Scalar, Value};

/// Character fields, optionally of fixed width.
///
/// Fixed-width text is padded with spaces on the side given by the format and
/// the padding is stripped again on decode. Text that does not fit, or that
/// already has a space on the padded side, is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct Text;

impl Converter for Text {
    fn encode(&self, value: Value, format: &Format) -> Result<Scalar> {
        let text = match value {
            Value::String(text) => text,
            _ => return Err(unexpected_value(&value, "String")),
        };

        let Some(width) = format.width else {
            return Ok(Scalar::Char(text));
        };

        let len = text.chars().count();
        if len > width {
            return Err(Error::invalid_value(format!(
                "`{text}` is longer than {width} characters"
            )));
        }

        let padded = match format.pad {
            Pad::Right if text.ends_with(' ') => None,
            Pad::Left if text.starts_with(' ') => None,
            Pad::Right => Some(format!("{text:<width$}")),
            Pad::Left => Some(format!("{text:>width$}")),
        };

        padded.map(Scalar::Char).ok_or_else(|| {
            Error::invalid_value(format!(
                "`{text}` has a space on its padded side and would not survive padding"
            ))
        })
    }

    fn decode(&self, scalar: Scalar, format: &Format) -> Result<Option<Value>> {
        let text = match scalar {
            Scalar::Char(text) => text,
            _ => return Err(unexpected_scalar(&scalar, "Char")),
        };

        let text = match (format.width, format.pad) {
            (None, _) => text,
            (Some(_), Pad::Right) => text.trim_end_matches(' ').to_string(),
            (Some(_), Pad::Left) => text.trim_start_matches(' ').to_string(),
        };

        Ok(Some(Value::String(text)))
    }
}
