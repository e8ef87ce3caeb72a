use super::{Node, Scalar, Table};

use indexmap::IndexMap;

/// An ordered mapping of remote field names to nodes.
///
/// Field order is insertion order and is part of the contract with the remote
/// system. Inserting a name that is already present replaces its node and
/// keeps its position.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Structure {
    fields: IndexMap<String, Node>,
}

impl Structure {
    pub fn new() -> Structure {
        Structure::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.fields.insert(name.into(), node.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, node: impl Into<Node>) -> Structure {
        self.insert(name, node);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.fields.get_mut(name)
    }

    pub fn scalar(&self, name: &str) -> Option<&Scalar> {
        self.get(name).and_then(Node::as_scalar)
    }

    pub fn structure(&self, name: &str) -> Option<&Structure> {
        self.get(name).and_then(Node::as_structure)
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.get(name).and_then(Node::as_table)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Removes a field, keeping the order of the remaining fields.
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        self.fields.shift_remove(name)
    }

    /// Field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.fields.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Structure {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Structure {
            fields: iter
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }
}

impl IntoIterator for Structure {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
