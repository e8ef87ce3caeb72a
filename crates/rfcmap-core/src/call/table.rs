use super::Structure;

use std::ops;

/// An ordered sequence of rows.
///
/// Rows keep the order they were pushed in; duplicates are kept.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Structure>,
}

impl Table {
    pub fn new() -> Table {
        Table::default()
    }

    pub fn push(&mut self, row: Structure) {
        self.rows.push(row);
    }

    pub fn into_rows(self) -> Vec<Structure> {
        self.rows
    }
}

impl ops::Deref for Table {
    type Target = [Structure];

    fn deref(&self) -> &Self::Target {
        &self.rows[..]
    }
}

impl From<Vec<Structure>> for Table {
    fn from(rows: Vec<Structure>) -> Self {
        Table { rows }
    }
}

impl FromIterator<Structure> for Table {
    fn from_iter<I: IntoIterator<Item = Structure>>(iter: I) -> Self {
        Table {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Table {
    type Item = Structure;
    type IntoIter = std::vec::IntoIter<Structure>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Structure;
    type IntoIter = std::slice::Iter<'a, Structure>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
