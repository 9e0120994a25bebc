//! Grouping sets: unordered collections of grouping column tokens.

use serde::{Deserialize, Serialize};
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A single grouping set of a `GROUP BY GROUPING SETS` / `CUBE` / `ROLLUP` clause.
///
/// The column token type is opaque; only equality and hashing are used to
/// relate two grouping sets to each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Serialize + Eq + Hash",
    deserialize = "T: Deserialize<'de> + Eq + Hash"
))]
pub struct GroupingSet<T: Eq + Hash> {
    columns: HashSet<T>,
}

impl<T: Eq + Hash> GroupingSet<T> {
    pub fn new(columns: HashSet<T>) -> Self {
        Self { columns }
    }

    /// The grouping set of the grand total, `()`.
    pub fn empty() -> Self {
        Self {
            columns: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &T) -> bool {
        self.columns.contains(column)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.columns.iter()
    }

    /// True if every column of `other` is also a column of `self`.
    /// Equal sets are supersets of each other.
    pub fn is_superset_of(&self, other: &Self) -> bool {
        self.columns.is_superset(&other.columns)
    }

    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.columns.is_subset(&other.columns)
    }

    pub fn columns(&self) -> &HashSet<T> {
        &self.columns
    }
}

impl<T: Eq + Hash + Debug> GroupingSet<T> {
    /// Deterministic rendering such as `{'a', 'b'}`, with the `Debug` form of
    /// each column sorted so diagnostics do not depend on hash order.
    pub fn describe(&self) -> String {
        let mut rendered: Vec<String> = self.columns.iter().map(|c| format!("{:?}", c)).collect();
        rendered.sort();
        format!("{{{}}}", rendered.join(", "))
    }
}

impl<T: Eq + Hash> Default for GroupingSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Eq + Hash> FromIterator<T> for GroupingSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> From<HashSet<T>> for GroupingSet<T> {
    fn from(columns: HashSet<T>) -> Self {
        Self::new(columns)
    }
}

impl<T: Eq + Hash> From<Vec<T>> for GroupingSet<T> {
    fn from(columns: Vec<T>) -> Self {
        columns.into_iter().collect()
    }
}

impl<T: Eq + Hash> IntoIterator for GroupingSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a GroupingSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
