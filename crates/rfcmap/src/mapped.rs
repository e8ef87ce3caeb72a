use crate::{Result, ValueRecord};

use rfcmap_core::schema::{TypeDescriptor, TypeRef};

/// A Rust type mapped to a remote function, structure or table row.
///
/// Usually derived with `#[derive(Mapped)]`. Generated code only moves field
/// values in and out by position; names, roles and conversions are applied by
/// the mapping engine from the resolved metadata.
pub trait Mapped: Default + Sized + 'static {
    /// Declares the type's remote name, kind and fields.
    fn describe() -> TypeDescriptor;

    /// The field values, in declared order.
    fn store(&self) -> ValueRecord;

    /// Merges received field values into `self`. Absent slots leave the field
    /// unchanged.
    fn apply(&mut self, record: ValueRecord) -> Result<()>;

    fn type_ref() -> TypeRef {
        TypeRef::of::<Self>(std::any::type_name::<Self>(), Self::describe)
    }

    /// Builds a new instance from `T::default()` and the received values.
    fn from_record(record: ValueRecord) -> Result<Self> {
        let mut value = Self::default();
        value.apply(record)?;
        Ok(value)
    }
}
