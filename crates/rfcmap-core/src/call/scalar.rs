use rust_decimal::Decimal;

/// A remote primitive value.
///
/// This is the closed set of representations the remote system understands.
/// Native values are encoded into one of these by a converter.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Character data, including fixed-width text, numeric text, dates and
    /// flags.
    Char(String),

    /// A signed integer.
    Int(i64),

    /// A binary floating point number.
    Float(f64),

    /// A packed decimal number.
    Decimal(Decimal),
}

impl Scalar {
    pub fn as_char(&self) -> Option<&str> {
        match self {
            Scalar::Char(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Scalar::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::Char(_) => "Char",
            Scalar::Int(_) => "Int",
            Scalar::Float(_) => "Float",
            Scalar::Decimal(_) => "Decimal",
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Char(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Char(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<Decimal> for Scalar {
    fn from(value: Decimal) -> Self {
        Scalar::Decimal(value)
    }
}
