//! Forest validation errors.

use super::GroupingSetId;
use thiserror::Error;

/// Result type for forest construction.
pub type ForestResult<T> = Result<T, ForestError>;

/// Reasons a proposed parent/child relationship is rejected.
///
/// Every variant is a caller error detected while constructing a forest;
/// nothing is left half-built when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    /// A referenced id is not in `[0, count)`.
    #[error(
        "Grouping set id ({id}) should be less than the number of grouping sets ({count})"
    )]
    IdOutOfRange { id: GroupingSetId, count: usize },

    /// A child is claimed by two parents.
    #[error(
        "Grouping set {child} has at least two parents: grouping set {existing_parent} and grouping set {new_parent}"
    )]
    MultipleParents {
        child: GroupingSetId,
        existing_parent: GroupingSetId,
        new_parent: GroupingSetId,
    },

    /// A parent does not contain every column of its child.
    #[error(
        "Grouping set {parent} ({parent_set}) is a parent but not a superset of grouping set {child} ({child_set})"
    )]
    NotASuperset {
        parent: GroupingSetId,
        parent_set: String,
        child: GroupingSetId,
        child_set: String,
    },

    /// Following parent links loops; `cycle` lists its members in traversal order.
    #[error("A cycle exists: {cycle:?}")]
    Cycle { cycle: Vec<GroupingSetId> },

    /// A parent list whose length is not the number of grouping sets.
    #[error(
        "Parent list has {actual} entries but there are {expected} grouping sets"
    )]
    ParentListLength { expected: usize, actual: usize },
}
