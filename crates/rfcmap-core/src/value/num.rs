use super::{Type, Value};
use crate::Error;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
                $name:literal
            }
        )*
    ) => {
        impl Value {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        _ => Err(Error::type_conversion(value, $name)),
                    }
                }
            }
        )*
    };
}

impl_num! {
    I8(i8) { is_i8 "i8" }
    I16(i16) { is_i16 "i16" }
    I32(i32) { is_i32 "i32" }
    I64(i64) { is_i64 "i64" }
    U8(u8) { is_u8 "u8" }
    U16(u16) { is_u16 "u16" }
    U32(u32) { is_u32 "u32" }
    U64(u64) { is_u64 "u64" }
    F32(f32) { is_f32 "f32" }
    F64(f64) { is_f64 "f64" }
}

impl Value {
    /// Widens an integer value of any width. Returns `None` for non-integers.
    pub fn to_i128(&self) -> Option<i128> {
        Some(match *self {
            Value::I8(v) => v.into(),
            Value::I16(v) => v.into(),
            Value::I32(v) => v.into(),
            Value::I64(v) => v.into(),
            Value::U8(v) => v.into(),
            Value::U16(v) => v.into(),
            Value::U32(v) => v.into(),
            Value::U64(v) => v.into(),
            _ => return None,
        })
    }

    /// Narrows `value` into the integer type `ty`, failing when it is out of
    /// range.
    pub fn from_i128(value: i128, ty: Type) -> Result<Value, Error> {
        macro_rules! narrow {
            ($variant:ident, $t:ty) => {
                <$t>::try_from(value).map(Value::$variant).map_err(|_| {
                    Error::invalid_value(format!(
                        "{} is out of range for {}",
                        value,
                        stringify!($t)
                    ))
                })
            };
        }

        match ty {
            Type::I8 => narrow!(I8, i8),
            Type::I16 => narrow!(I16, i16),
            Type::I32 => narrow!(I32, i32),
            Type::I64 => narrow!(I64, i64),
            Type::U8 => narrow!(U8, u8),
            Type::U16 => narrow!(U16, u16),
            Type::U32 => narrow!(U32, u32),
            Type::U64 => narrow!(U64, u64),
            _ => Err(Error::invalid_value(format!("{ty} is not an integer type"))),
        }
    }
}
