use super::Value;

use std::ops;

/// The field values of one mapped object, by position.
///
/// Slot `i` holds field `i` of the object's mapped type, in declared order.
/// `None` marks an absent field: it is skipped when building and was not
/// present in a reply when mapping.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: Vec<Option<Value>>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Option<Value>>) -> Self {
        Self { fields }
    }

    /// A record of `len` absent fields.
    pub fn absent(len: usize) -> Self {
        Self {
            fields: vec![None; len],
        }
    }

    /// Takes the value out of slot `index`, leaving it absent.
    pub fn take(&mut self, index: usize) -> Option<Value> {
        self.fields.get_mut(index).and_then(Option::take)
    }
}

impl ops::Deref for ValueRecord {
    type Target = [Option<Value>];

    fn deref(&self) -> &Self::Target {
        &self.fields[..]
    }
}

impl ops::DerefMut for ValueRecord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fields[..]
    }
}

impl IntoIterator for ValueRecord {
    type Item = Option<Value>;
    type IntoIter = std::vec::IntoIter<Option<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueRecord {
    type Item = &'a Option<Value>;
    type IntoIter = std::slice::Iter<'a, Option<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
