//! Metadata describing how native types map onto call structures.
//!
//! A [`TypeDescriptor`] is the declaration of a mapped type, usually produced
//! by `#[derive(Mapped)]`. [`Metadata`] resolves descriptors into immutable
//! [`MappedType`]s once and caches them for the life of the process.

mod descriptor;
pub use descriptor::{CallKind, FieldDescriptor, Role, Shape, TypeDescriptor};

mod mapped_type;
pub use mapped_type::{FieldKind, FieldMapping, MappedType};

mod metadata;
pub use metadata::Metadata;

mod native;
pub use native::{NativeType, TypeRef};
