//! Validated forests of grouping sets.
//!
//! A forest relates the grouping sets of one aggregation by superset
//! containment: a parent's columns always include every column of its
//! children, so a child's aggregate can be rolled up from its parent's.
//!
//! Ids are positions in the grouping-set list. A forest is kept in three
//! views that always agree:
//!
//! ```text
//!   id_to_parent        [None, Some(2), Some(0), ...]
//!   parent_to_children  {0: {2, 3}, 2: {1}, ...}      (no empty entries)
//!   root_ids            {0, ...}
//! ```
//!
//! Both constructors funnel into one `finish` step that works on the
//! parent-link array, so equivalent inputs produce identical forests.

mod cycle;
mod error;
pub mod graph;
mod render;

pub use error::{ForestError, ForestResult};

use crate::grouping_set::GroupingSet;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Position of a grouping set in its forest's grouping-set list.
pub type GroupingSetId = usize;

/// An immutable, validated forest over a list of grouping sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingSetForest<T: Eq + Hash> {
    grouping_sets: Vec<GroupingSet<T>>,
    parent_to_children: BTreeMap<GroupingSetId, BTreeSet<GroupingSetId>>,
    id_to_parent: Vec<Option<GroupingSetId>>,
    root_ids: BTreeSet<GroupingSetId>,
}

impl<T: Eq + Hash + Debug> GroupingSetForest<T> {
    /// Build a forest from a map of parent id to claimed child ids.
    ///
    /// Parents with no children may map to an empty set or be left out; both
    /// normalize to the same forest. Pairs are checked in map order, so the
    /// first parent recorded for a child is the one reported when a second
    /// parent claims it.
    pub fn from_children(
        grouping_sets: Vec<GroupingSet<T>>,
        parent_to_children: &BTreeMap<GroupingSetId, BTreeSet<GroupingSetId>>,
    ) -> ForestResult<Self> {
        let count = grouping_sets.len();
        let mut id_to_parent = vec![None; count];

        for (&parent, children) in parent_to_children {
            check_id(parent, count)?;
            for &child in children {
                check_id(child, count)?;
                if let Some(existing_parent) = id_to_parent[child] {
                    tracing::debug!(child, existing_parent, parent, "rejecting second parent");
                    return Err(ForestError::MultipleParents {
                        child,
                        existing_parent,
                        new_parent: parent,
                    });
                }
                id_to_parent[child] = Some(parent);
                check_superset(&grouping_sets, parent, child)?;
            }
        }

        Self::finish(grouping_sets, id_to_parent)
    }

    /// Build a forest from each id's parent, `None` marking a root.
    pub fn from_parents(
        grouping_sets: Vec<GroupingSet<T>>,
        id_to_parent: &[Option<GroupingSetId>],
    ) -> ForestResult<Self> {
        let count = grouping_sets.len();
        if id_to_parent.len() != count {
            return Err(ForestError::ParentListLength {
                expected: count,
                actual: id_to_parent.len(),
            });
        }

        for (child, parent) in id_to_parent.iter().enumerate() {
            if let Some(parent) = *parent {
                check_id(parent, count)?;
                check_superset(&grouping_sets, parent, child)?;
            }
        }

        Self::finish(grouping_sets, id_to_parent.to_vec())
    }

    /// Shared tail of both constructors: reject cycles, then derive the
    /// children map and the roots from the parent links.
    fn finish(
        grouping_sets: Vec<GroupingSet<T>>,
        id_to_parent: Vec<Option<GroupingSetId>>,
    ) -> ForestResult<Self> {
        cycle::check_no_cycle(&id_to_parent)?;

        let mut parent_to_children: BTreeMap<GroupingSetId, BTreeSet<GroupingSetId>> =
            BTreeMap::new();
        let mut root_ids = BTreeSet::new();
        for (id, parent) in id_to_parent.iter().enumerate() {
            match parent {
                Some(parent) => {
                    parent_to_children.entry(*parent).or_default().insert(id);
                }
                None => {
                    root_ids.insert(id);
                }
            }
        }

        Ok(Self {
            grouping_sets,
            parent_to_children,
            id_to_parent,
            root_ids,
        })
    }
}

impl<T: Eq + Hash> GroupingSetForest<T> {
    /// The forest over no grouping sets.
    pub fn empty() -> Self {
        Self {
            grouping_sets: Vec::new(),
            parent_to_children: BTreeMap::new(),
            id_to_parent: Vec::new(),
            root_ids: BTreeSet::new(),
        }
    }

    pub fn grouping_sets(&self) -> &[GroupingSet<T>] {
        &self.grouping_sets
    }

    /// Parent id to child ids. Ids without children have no entry.
    pub fn parent_to_children(&self) -> &BTreeMap<GroupingSetId, BTreeSet<GroupingSetId>> {
        &self.parent_to_children
    }

    pub fn id_to_parent(&self) -> &[Option<GroupingSetId>] {
        &self.id_to_parent
    }

    pub fn root_ids(&self) -> &BTreeSet<GroupingSetId> {
        &self.root_ids
    }

    pub fn len(&self) -> usize {
        self.grouping_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grouping_sets.is_empty()
    }

    pub fn grouping_set(&self, id: GroupingSetId) -> Option<&GroupingSet<T>> {
        self.grouping_sets.get(id)
    }

    pub fn parent_of(&self, id: GroupingSetId) -> Option<GroupingSetId> {
        self.id_to_parent.get(id).copied().flatten()
    }

    /// Children of `id`, empty for leaves and unknown ids.
    pub fn children_of(&self, id: GroupingSetId) -> impl Iterator<Item = GroupingSetId> + '_ {
        self.parent_to_children
            .get(&id)
            .into_iter()
            .flat_map(|children| children.iter().copied())
    }

    pub fn is_root(&self, id: GroupingSetId) -> bool {
        self.root_ids.contains(&id)
    }

    /// Parent, grandparent, ... of `id`, ending with its root.
    pub fn ancestors(&self, id: GroupingSetId) -> Vec<GroupingSetId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent_of(id);
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.parent_of(parent);
        }
        ancestors
    }

    /// Number of edges between `id` and its root.
    pub fn depth(&self, id: GroupingSetId) -> usize {
        self.ancestors(id).len()
    }

    pub fn into_grouping_sets(self) -> Vec<GroupingSet<T>> {
        self.grouping_sets
    }
}

impl<T: Eq + Hash> Default for GroupingSetForest<T> {
    fn default() -> Self {
        Self::empty()
    }
}

fn check_id(id: GroupingSetId, count: usize) -> ForestResult<()> {
    if id < count {
        Ok(())
    } else {
        Err(ForestError::IdOutOfRange { id, count })
    }
}

/// `parent` and `child` must already be range-checked.
fn check_superset<T: Eq + Hash + Debug>(
    grouping_sets: &[GroupingSet<T>],
    parent: GroupingSetId,
    child: GroupingSetId,
) -> ForestResult<()> {
    let parent_set = &grouping_sets[parent];
    let child_set = &grouping_sets[child];
    if parent_set.is_superset_of(child_set) {
        return Ok(());
    }
    tracing::debug!(parent, child, "rejecting parent that is not a superset");
    Err(ForestError::NotASuperset {
        parent,
        parent_set: parent_set.describe(),
        child,
        child_set: child_set.describe(),
    })
}
