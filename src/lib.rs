//! # grouping-forest
//!
//! Superset forests over the grouping sets of `GROUP BY GROUPING SETS`,
//! `CUBE` and `ROLLUP` clauses.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Grouping sets (opaque column tokens)        │
//! └─────────────────────────────────────────────────────────┘
//!               │                              │
//!               ▼ [planner]                    │ caller-supplied
//! ┌───────────────────────────┐                │ parents / children
//! │  parent/children proposal │                │
//! └───────────────────────────┘                │
//!               │                              │
//!               ▼ [forest: validate + normalize]
//! ┌─────────────────────────────────────────────────────────┐
//! │        GroupingSetForest (immutable, validated)          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [graph export]
//! ┌─────────────────────────────────────────────────────────┐
//! │           petgraph DiGraph for aggregation planning      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! A child grouping set can be aggregated from its parent's result because
//! the parent groups by every column the child does.

pub mod config;
pub mod forest;
pub mod grouping_set;
pub mod input;
pub mod planner;

pub use forest::{ForestError, ForestResult, GroupingSetForest, GroupingSetId};
pub use grouping_set::GroupingSet;
pub use planner::{ForestPlanner, ParentChoice, SimplePlanner};
