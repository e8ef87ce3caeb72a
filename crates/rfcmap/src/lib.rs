mod builder;
pub use builder::Builder;

mod environment;
pub use environment::Environment;

mod field;
pub use field::Field;

mod mapped;
pub use mapped::Mapped;

pub mod mapping;

mod primitive;
pub use primitive::Primitive;

mod session;
pub use session::{CurrentSessions, Session, SessionManager, SharedSession};

pub use rfcmap_macros::Mapped;

pub use rfcmap_core::{
    bail, call, convert, err, schema, transport, value, Connection, Connector, Converter, Error,
    Format, IntoError, Node, Properties, Registry, Result, Structure, Table, TransportError, Type,
    Value, ValueRecord,
};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, Field, Mapped, Primitive, Result};
    pub use rfcmap_core::convert::{Format, Pad};
    pub use rfcmap_core::schema::{
        CallKind, FieldDescriptor, NativeType, Role, Shape, TypeDescriptor, TypeRef,
    };
    pub use rfcmap_core::{Value, ValueRecord};
    pub use std::{default::Default, option::Option};

    /// Declares a field whose shape and optionality come from its Rust type.
    pub fn field<T: Field>(local_name: &str) -> FieldDescriptor {
        FieldDescriptor::new(local_name, T::shape(), T::OPTIONAL)
    }

    /// Applies `value` to `target`, attributing a failure to the field.
    pub fn apply_field<T: Field>(target: &mut T, remote_name: &str, value: Value) -> Result<()> {
        target
            .apply(value)
            .map_err(|err| Error::mapping(remote_name, err))
    }
}
