use super::TypeDescriptor;
use crate::Type;

use std::any::TypeId;
use std::fmt;

/// Identifies a scalar Rust type.
///
/// A native type may name a parent: the type it is a more specific form of,
/// such as `String` for a newtype wrapping a `String`. Converter lookup walks
/// the parent chain.
#[derive(Clone, Copy)]
pub struct NativeType {
    pub id: TypeId,

    /// Display name of the Rust type.
    pub name: &'static str,

    /// The kind of value the type is stored as.
    pub ty: Type,

    parent: Option<fn() -> NativeType>,
}

impl NativeType {
    pub fn of<T: 'static>(name: &'static str, ty: Type) -> NativeType {
        NativeType {
            id: TypeId::of::<T>(),
            name,
            ty,
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: fn() -> NativeType) -> NativeType {
        self.parent = Some(parent);
        self
    }

    pub fn parent(&self) -> Option<NativeType> {
        self.parent.map(|parent| parent())
    }

    /// This type followed by its parents, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = NativeType> {
        std::iter::successors(Some(*self), NativeType::parent)
    }
}

impl PartialEq for NativeType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NativeType {}

impl fmt::Debug for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeType")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("parent", &self.parent().map(|parent| parent.name))
            .finish()
    }
}

/// A reference to a mapped type, used to resolve nested structures and table
/// rows.
#[derive(Clone, Copy)]
pub struct TypeRef {
    pub id: TypeId,
    pub name: &'static str,
    pub describe: fn() -> TypeDescriptor,
}

impl TypeRef {
    pub fn of<T: 'static>(name: &'static str, describe: fn() -> TypeDescriptor) -> TypeRef {
        TypeRef {
            id: TypeId::of::<T>(),
            name,
            describe,
        }
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeRef {}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.name).finish()
    }
}
