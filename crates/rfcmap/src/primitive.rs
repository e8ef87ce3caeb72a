use crate::{Result, Type, Value};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rfcmap_core::schema::NativeType;
use rust_decimal::Decimal;

/// A Rust type that is sent as a single remote scalar.
///
/// Implement this for a domain type (usually a newtype) and invoke
/// [`primitive!`](crate::primitive) to use it as a field. Naming a parent in
/// [`native`](Primitive::native) lets the type reuse the parent's converter.
///
/// ```
/// use rfcmap::{Primitive, Result, Type, Value};
/// use rfcmap::schema::NativeType;
///
/// #[derive(Debug, Default, Clone, PartialEq)]
/// struct Carrier(String);
///
/// impl Primitive for Carrier {
///     fn native() -> NativeType {
///         NativeType::of::<Carrier>("Carrier", Type::String).with_parent(String::native)
///     }
///
///     fn to_value(&self) -> Value {
///         Value::from(&self.0)
///     }
///
///     fn from_value(value: Value) -> Result<Self> {
///         Ok(Carrier(value.try_into()?))
///     }
/// }
///
/// rfcmap::primitive!(Carrier);
/// ```
pub trait Primitive: Sized + 'static {
    fn native() -> NativeType;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self>;
}

/// Implements [`Field`](crate::Field) with scalar shape for types that
/// implement [`Primitive`].
#[macro_export]
macro_rules! primitive {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl $crate::Field for $ty {
                fn shape() -> $crate::schema::Shape {
                    $crate::schema::Shape::Scalar(<$ty as $crate::Primitive>::native())
                }

                fn store(&self) -> ::std::option::Option<$crate::Value> {
                    ::std::option::Option::Some(<$ty as $crate::Primitive>::to_value(self))
                }

                fn load(value: $crate::Value) -> $crate::Result<Self> {
                    <$ty as $crate::Primitive>::from_value(value)
                }
            }
        )*
    };
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $name:literal, $variant:ident; )* ) => {
        $(
            impl Primitive for $ty {
                fn native() -> NativeType {
                    NativeType::of::<$ty>($name, Type::$variant)
                }

                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }

                fn from_value(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }

            crate::primitive!($ty);
        )*
    };
}

impl_primitive! {
    bool => "bool", Bool;
    i8 => "i8", I8;
    i16 => "i16", I16;
    i32 => "i32", I32;
    i64 => "i64", I64;
    u8 => "u8", U8;
    u16 => "u16", U16;
    u32 => "u32", U32;
    u64 => "u64", U64;
    f32 => "f32", F32;
    f64 => "f64", F64;
    Decimal => "Decimal", Decimal;
    String => "String", String;
    NaiveDate => "NaiveDate", Date;
    NaiveTime => "NaiveTime", Time;
    NaiveDateTime => "NaiveDateTime", DateTime;
}
