//! Forest planners - pick a superset forest for a flat list of grouping sets.
//!
//! A planner sees only the grouping sets of one aggregation. It must return
//! a forest whose grouping-set list starts with the input, in the same order,
//! so ids keep pointing at the caller's grouping sets. A planner may append
//! synthetic grouping sets after the input (for example a shared ancestor
//! that narrows the forest); [`SimplePlanner`] never does.

mod simple;

pub use simple::SimplePlanner;

use crate::forest::GroupingSetForest;
use crate::grouping_set::GroupingSet;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Plans a [`GroupingSetForest`] for a list of grouping sets.
pub trait ForestPlanner {
    /// The index at which a grouping set appears in `grouping_sets` is its id
    /// in the returned forest.
    fn plan<T: Eq + Hash + Debug>(&self, grouping_sets: Vec<GroupingSet<T>>) -> GroupingSetForest<T>;
}

/// How [`SimplePlanner`] picks among equally small superset candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentChoice {
    /// The candidate with the fewest children so far; lowest id on ties.
    #[default]
    FewestChildren,
    /// Always the lowest candidate id.
    LowestId,
}
