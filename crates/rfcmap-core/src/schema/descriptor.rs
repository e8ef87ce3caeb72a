use super::{NativeType, TypeRef};
use crate::convert::{Format, Pad};

use std::fmt;

/// The declaration of a mapped type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Rust type name, used in error messages.
    pub name: &'static str,

    /// Name of the remote function or structure.
    pub remote_name: String,

    pub kind: CallKind,

    /// Fields in declared order.
    pub fields: Vec<FieldDescriptor>,
}

/// What a mapped type stands for on the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// The parameters of a remote function. Only a function can be executed.
    Function,

    /// A structure parameter.
    Structure,

    /// The row type of a table parameter.
    TableRow,
}

/// The role of a field in the call structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Scalar,
    Structure,
    Table,
}

/// The shape of a field's Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A scalar value.
    Scalar(NativeType),

    /// A mapped composite.
    Structure(TypeRef),

    /// An ordered sequence of a mapped composite.
    Table(TypeRef),
}

/// The declaration of one field of a mapped type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Rust field name.
    pub local_name: String,

    /// Remote field name. Defaults to the local name in upper snake case.
    pub remote_name: Option<String>,

    /// Declared role, checked against the shape.
    pub role: Option<Role>,

    pub shape: Shape,

    /// Absent values are skipped when building.
    pub optional: bool,

    /// Converter override key.
    pub converter: Option<String>,

    pub format: Format,
}

impl TypeDescriptor {
    pub fn function(name: &'static str, remote_name: impl Into<String>) -> TypeDescriptor {
        TypeDescriptor::new(name, remote_name, CallKind::Function)
    }

    pub fn structure(name: &'static str, remote_name: impl Into<String>) -> TypeDescriptor {
        TypeDescriptor::new(name, remote_name, CallKind::Structure)
    }

    pub fn table_row(name: &'static str, remote_name: impl Into<String>) -> TypeDescriptor {
        TypeDescriptor::new(name, remote_name, CallKind::TableRow)
    }

    pub fn new(
        name: &'static str,
        remote_name: impl Into<String>,
        kind: CallKind,
    ) -> TypeDescriptor {
        TypeDescriptor {
            name,
            remote_name: remote_name.into(),
            kind,
            fields: vec![],
        }
    }

    /// Appends a field.
    pub fn field(mut self, field: FieldDescriptor) -> TypeDescriptor {
        self.fields.push(field);
        self
    }
}

impl FieldDescriptor {
    pub fn new(local_name: impl Into<String>, shape: Shape, optional: bool) -> FieldDescriptor {
        FieldDescriptor {
            local_name: local_name.into(),
            remote_name: None,
            role: None,
            shape,
            optional,
            converter: None,
            format: Format::default(),
        }
    }

    pub fn remote_name(mut self, name: impl Into<String>) -> FieldDescriptor {
        self.remote_name = Some(name.into());
        self
    }

    pub fn role(mut self, role: Role) -> FieldDescriptor {
        self.role = Some(role);
        self
    }

    pub fn converter(mut self, key: impl Into<String>) -> FieldDescriptor {
        self.converter = Some(key.into());
        self
    }

    pub fn format(mut self, format: Format) -> FieldDescriptor {
        self.format = format;
        self
    }

    pub fn width(mut self, width: usize) -> FieldDescriptor {
        self.format.width = Some(width);
        self
    }

    pub fn pad(mut self, pad: Pad) -> FieldDescriptor {
        self.format.pad = pad;
        self
    }

    pub fn scale(mut self, scale: u32) -> FieldDescriptor {
        self.format.scale = Some(scale);
        self
    }

    pub fn precision(mut self, precision: u32) -> FieldDescriptor {
        self.format.precision = Some(precision);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> FieldDescriptor {
        self.format.pattern = Some(pattern.into());
        self
    }
}

impl Shape {
    pub fn role(&self) -> Role {
        match self {
            Shape::Scalar(_) => Role::Scalar,
            Shape::Structure(_) => Role::Structure,
            Shape::Table(_) => Role::Table,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Scalar => "scalar",
            Role::Structure => "structure",
            Role::Table => "table",
        })
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CallKind::Function => "function",
            CallKind::Structure => "structure",
            CallKind::TableRow => "table row",
        })
    }
}
