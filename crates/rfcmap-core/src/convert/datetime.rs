use super::{unexpected_scalar, unexpected_value, Converter, Format};
use crate::{Error, Result, Scalar, Type, Value};

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;

/// Dates, times and timestamps as character data.
///
/// The default encodings are the basic ISO 8601 forms `YYYYMMDD`, `HHMMSS`
/// and `YYYYMMDDHHMMSS`; a field's `pattern` replaces them. The remote initial
/// value (empty, blank, or all zeros for dates and timestamps) decodes as
/// absent.
#[derive(Debug, Clone, Copy)]
pub struct Temporal {
    ty: Type,
}

impl Temporal {
    /// # Panics
    ///
    /// Panics if `ty` is not `Date`, `Time` or `DateTime`.
    pub fn new(ty: Type) -> Temporal {
        assert!(ty.is_temporal(), "`{ty}` is not a date or time type");
        Temporal { ty }
    }

    fn pattern<'a>(&self, format: &'a Format) -> Result<&'a str> {
        let pattern = match (&format.pattern, self.ty) {
            (Some(pattern), _) => pattern,
            (None, Type::Date) => "%Y%m%d",
            (None, Type::Time) => "%H%M%S",
            (None, _) => "%Y%m%d%H%M%S",
        };

        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(Error::invalid_value(format!(
                "`{pattern}` is not a valid date/time pattern"
            )));
        }

        Ok(pattern)
    }

    fn parse(&self, text: &str, pattern: &str) -> Result<Value> {
        let parsed = match self.ty {
            Type::Date => NaiveDate::parse_from_str(text, pattern).map(Value::Date),
            Type::Time => NaiveTime::parse_from_str(text, pattern).map(Value::Time),
            _ => NaiveDateTime::parse_from_str(text, pattern).map(Value::DateTime),
        };

        parsed.map_err(|err| {
            Error::invalid_value(format!(
                "`{text}` does not match `{pattern}` for {}: {err}",
                self.ty
            ))
        })
    }

    fn is_initial(&self, text: &str) -> bool {
        text.is_empty() || (self.ty != Type::Time && text.bytes().all(|b| b == b'0'))
    }
}

impl Converter for Temporal {
    fn encode(&self, value: Value, format: &Format) -> Result<Scalar> {
        let pattern = self.pattern(format)?;

        let mut text = String::new();
        let written = match (&value, self.ty) {
            (Value::Date(v), Type::Date) => write!(text, "{}", v.format(pattern)),
            (Value::Time(v), Type::Time) => write!(text, "{}", v.format(pattern)),
            (Value::DateTime(v), Type::DateTime) => write!(text, "{}", v.format(pattern)),
            _ => return Err(unexpected_value(&value, self.ty.name())),
        };

        if written.is_err() {
            return Err(Error::invalid_value(format!(
                "`{pattern}` cannot format a {}",
                self.ty
            )));
        }

        if self.parse(&text, pattern).ok().as_ref() != Some(&value) {
            return Err(Error::invalid_value(format!(
                "{value:?} cannot be represented exactly as `{pattern}`"
            )));
        }

        Ok(Scalar::Char(text))
    }

    fn decode(&self, scalar: Scalar, format: &Format) -> Result<Option<Value>> {
        let Scalar::Char(text) = &scalar else {
            return Err(unexpected_scalar(&scalar, "Char"));
        };

        let text = text.trim();
        if self.is_initial(text) {
            return Ok(None);
        }

        self.parse(text, self.pattern(format)?).map(Some)
    }
}
