//! Cycle detection over a parent-link array.
//!
//! Each id's ancestor chain is walked at most once overall: once a path ends
//! at a root (or at an id already proven to reach one) every id on it is
//! marked as checked and later walks stop as soon as they reach it.

use super::error::{ForestError, ForestResult};
use super::GroupingSetId;
use std::collections::{HashMap, HashSet};

/// Fail with the first cycle found in `id_to_parent`.
///
/// `id_to_parent` must already be range-checked.
pub(crate) fn check_no_cycle(id_to_parent: &[Option<GroupingSetId>]) -> ForestResult<()> {
    let mut checked: HashSet<GroupingSetId> = HashSet::with_capacity(id_to_parent.len());
    for id in 0..id_to_parent.len() {
        if !checked.contains(&id) {
            check_reverse_path(id, id_to_parent, &mut checked)?;
        }
    }
    Ok(())
}

/// Follow `start, parent(start), parent(parent(start)), ...` until it reaches
/// a root, a checked id, or an id already on the path.
fn check_reverse_path(
    start: GroupingSetId,
    id_to_parent: &[Option<GroupingSetId>],
    checked: &mut HashSet<GroupingSetId>,
) -> ForestResult<()> {
    let mut path = vec![start];
    // id -> position in `path`
    let mut positions: HashMap<GroupingSetId, usize> = HashMap::from([(start, 0)]);

    loop {
        let last = path[path.len() - 1];
        let parent = match id_to_parent[last] {
            Some(parent) if !checked.contains(&parent) => parent,
            _ => {
                checked.extend(path);
                return Ok(());
            }
        };

        if let Some(&first) = positions.get(&parent) {
            let cycle = path[first..].to_vec();
            tracing::debug!(?cycle, "rejecting parent links with a cycle");
            return Err(ForestError::Cycle { cycle });
        }

        positions.insert(parent, path.len());
        path.push(parent);
    }
}
