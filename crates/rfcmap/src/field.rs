use crate::{Error, Mapped, Result, Value};

use rfcmap_core::schema::Shape;

/// A Rust type that can be the type of a mapped field.
///
/// The field's [`Shape`] decides its role in the call structure: primitives
/// are scalars, `Vec<T>` of a mapped type is a table and a mapped type is a
/// structure. `Option<T>` has the shape of `T` and may be absent.
pub trait Field: Sized {
    /// True if the field may be absent.
    const OPTIONAL: bool = false;

    fn shape() -> Shape;

    /// The value to send, or `None` if the field is absent.
    fn store(&self) -> Option<Value>;

    fn load(value: Value) -> Result<Self>;

    /// Merges a received value into the field.
    ///
    /// Scalars and tables are replaced. Structures merge field by field, so
    /// nested fields missing from the reply keep their value.
    fn apply(&mut self, value: Value) -> Result<()> {
        *self = Self::load(value)?;
        Ok(())
    }
}

impl<T: Field> Field for Option<T> {
    const OPTIONAL: bool = true;

    fn shape() -> Shape {
        T::shape()
    }

    fn store(&self) -> Option<Value> {
        self.as_ref().and_then(Field::store)
    }

    fn load(value: Value) -> Result<Self> {
        Ok(Some(T::load(value)?))
    }

    fn apply(&mut self, value: Value) -> Result<()> {
        match self {
            Some(inner) => inner.apply(value),
            None => {
                *self = Some(T::load(value)?);
                Ok(())
            }
        }
    }
}

impl<T: Mapped> Field for Vec<T> {
    fn shape() -> Shape {
        Shape::Table(T::type_ref())
    }

    fn store(&self) -> Option<Value> {
        Some(Value::List(
            self.iter().map(|row| Value::Record(row.store())).collect(),
        ))
    }

    fn load(value: Value) -> Result<Self> {
        value
            .into_list()?
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                row.into_record()
                    .and_then(T::from_record)
                    .map_err(|err| Error::mapping(format!("[{index}]"), err))
            })
            .collect()
    }
}
