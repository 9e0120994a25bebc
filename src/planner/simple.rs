// src/planner/simple.rs
use super::{ForestPlanner, ParentChoice};
use crate::config::PlannerSettings;
use crate::forest::{GroupingSetForest, GroupingSetId};
use crate::grouping_set::GroupingSet;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Greedy planner: every grouping set hangs under one of its smallest
/// supersets.
///
/// Ids are visited in ascending grouping-set size. A set's parental
/// candidates are the sets to its right in that order that are supersets of
/// it and are as small as the first such superset. Since every edge points
/// rightward in the sorted order, the result has no cycles, and since every
/// candidate is a superset, every edge satisfies the superset rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplePlanner {
    parent_choice: ParentChoice,
}

impl SimplePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent_choice(parent_choice: ParentChoice) -> Self {
        Self { parent_choice }
    }

    pub fn from_settings(settings: &PlannerSettings) -> Self {
        Self::with_parent_choice(settings.parent_choice)
    }

    pub fn parent_choice(&self) -> ParentChoice {
        self.parent_choice
    }

    fn choose_parent(
        &self,
        candidates: &BTreeSet<GroupingSetId>,
        parent_to_children: &BTreeMap<GroupingSetId, BTreeSet<GroupingSetId>>,
    ) -> Option<GroupingSetId> {
        match self.parent_choice {
            ParentChoice::LowestId => candidates.first().copied(),
            // min_by_key keeps the first minimum, so ties go to the lowest id
            ParentChoice::FewestChildren => candidates.iter().copied().min_by_key(|candidate| {
                parent_to_children
                    .get(candidate)
                    .map_or(0, |children| children.len())
            }),
        }
    }
}

impl ForestPlanner for SimplePlanner {
    fn plan<T: Eq + Hash + Debug>(&self, grouping_sets: Vec<GroupingSet<T>>) -> GroupingSetForest<T> {
        // Grouping set ids sorted by the sizes of the grouping sets they identify
        let mut sorted_ids: Vec<GroupingSetId> = (0..grouping_sets.len()).collect();
        sorted_ids.sort_by_key(|&id| grouping_sets[id].len());

        let mut parent_to_children: BTreeMap<GroupingSetId, BTreeSet<GroupingSetId>> =
            BTreeMap::new();
        for (position, &id) in sorted_ids.iter().enumerate() {
            let candidates = parental_candidates(position, &sorted_ids, &grouping_sets);
            tracing::trace!(id, ?candidates, "parental candidates");

            let Some(parent) = self.choose_parent(&candidates, &parent_to_children) else {
                tracing::debug!(id, "no superset found, grouping set becomes a root");
                continue;
            };
            tracing::debug!(id, parent, "assigned parent");
            parent_to_children.entry(parent).or_default().insert(id);
        }

        match GroupingSetForest::from_children(grouping_sets, &parent_to_children) {
            Ok(forest) => forest,
            // Edges only point at rightward supersets and each id is inserted
            // once, so validation cannot fail.
            Err(err) => unreachable!("planned forest failed validation: {err}"),
        }
    }
}

/// Ids to the right of `position` in `sorted_ids` that are supersets of the
/// grouping set at `position` and have the size of the first such superset.
///
/// Scanning stops at the first set larger than that size.
fn parental_candidates<T: Eq + Hash>(
    position: usize,
    sorted_ids: &[GroupingSetId],
    grouping_sets: &[GroupingSet<T>],
) -> BTreeSet<GroupingSetId> {
    let searching = &grouping_sets[sorted_ids[position]];
    let mut candidates = BTreeSet::new();
    let mut candidate_size = None;

    for &id in &sorted_ids[position + 1..] {
        let grouping_set = &grouping_sets[id];
        if let Some(size) = candidate_size {
            if grouping_set.len() > size {
                break;
            }
        }
        if grouping_set.is_superset_of(searching) {
            candidate_size.get_or_insert(grouping_set.len());
            candidates.insert(id);
        }
    }

    candidates
}
