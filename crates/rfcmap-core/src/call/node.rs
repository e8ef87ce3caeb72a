use super::{Scalar, Structure, Table};

/// A node of the call structure tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A remote primitive value.
    Scalar(Scalar),

    /// An ordered mapping of remote field names to nodes.
    Structure(Structure),

    /// An ordered sequence of rows, each a structure of the same shape.
    Table(Table),
}

impl Node {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn is_structure(&self) -> bool {
        matches!(self, Node::Structure(_))
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Node::Table(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_structure(&self) -> Option<&Structure> {
        match self {
            Node::Structure(structure) => Some(structure),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(table) => Some(table),
            _ => None,
        }
    }

    /// A short name for the node kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::Structure(_) => "structure",
            Node::Table(_) => "table",
        }
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

impl From<Structure> for Node {
    fn from(value: Structure) -> Self {
        Node::Structure(value)
    }
}

impl From<Table> for Node {
    fn from(value: Table) -> Self {
        Node::Table(value)
    }
}
