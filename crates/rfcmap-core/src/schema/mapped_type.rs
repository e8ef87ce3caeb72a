use super::{CallKind, NativeType, Role};
use crate::convert::{Converter, Format};

use std::any::TypeId;
use std::sync::Arc;

/// The resolved, immutable metadata of a mapped type.
#[derive(Debug)]
pub struct MappedType {
    pub id: TypeId,

    /// Rust type name
    pub name: &'static str,

    /// Name of the remote function or structure
    pub remote_name: String,

    pub kind: CallKind,

    /// Fields in declared order. A field's position is its slot in the
    /// type's `ValueRecord`.
    pub fields: Vec<FieldMapping>,
}

#[derive(Debug, Clone)]
pub struct FieldMapping {
    /// Position of the field within the mapped type
    pub index: usize,

    pub local_name: String,

    pub remote_name: String,

    /// True if the field may be absent (`None` in Rust).
    pub optional: bool,

    /// The converter override key the field was declared with, if any.
    pub converter_key: Option<String>,

    pub kind: FieldKind,
}

#[derive(Debug, Clone)]
pub enum FieldKind {
    Scalar {
        native: NativeType,
        converter: Arc<dyn Converter>,
        format: Format,
    },
    Structure(Arc<MappedType>),
    Table(Arc<MappedType>),
}

impl MappedType {
    pub fn field(&self, index: usize) -> Option<&FieldMapping> {
        self.fields.get(index)
    }

    pub fn field_by_remote_name(&self, name: &str) -> Option<&FieldMapping> {
        self.fields.iter().find(|field| field.remote_name == name)
    }

    /// Remote field names in declared order.
    pub fn remote_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|field| field.remote_name.as_str())
    }

    pub fn is_function(&self) -> bool {
        self.kind == CallKind::Function
    }
}

impl FieldMapping {
    pub fn role(&self) -> Role {
        match self.kind {
            FieldKind::Scalar { .. } => Role::Scalar,
            FieldKind::Structure(_) => Role::Structure,
            FieldKind::Table(_) => Role::Table,
        }
    }

    /// The nested type of a structure or table field.
    pub fn nested(&self) -> Option<&Arc<MappedType>> {
        match &self.kind {
            FieldKind::Structure(nested) | FieldKind::Table(nested) => Some(nested),
            FieldKind::Scalar { .. } => None,
        }
    }
}
