//! File documents for the CLI: grouping sets in, forests out.
//!
//! An input document lists the grouping sets of one aggregation and, for
//! `check`, the relationship to validate. Parent lists use `-1` for roots
//! because TOML arrays cannot hold nulls.
//!
//! ```toml
//! grouping_sets = [["a", "b"], ["a"], []]
//! parents = [-1, 0, 1]
//!
//! # or, instead of `parents`:
//! [children]
//! 0 = [1]
//! 1 = [2]
//! ```

use crate::forest::{ForestError, GroupingSetForest, GroupingSetId};
use crate::grouping_set::GroupingSet;
use crate::planner::ForestPlanner;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Parent-list entry marking a root.
pub const ROOT_SENTINEL: i64 = -1;

/// Errors reading or interpreting a forest document.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse TOML input: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported input format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("Input gives both `parents` and `children`; use one")]
    ConflictingRelationships,

    #[error("Input gives neither `parents` nor `children`")]
    MissingRelationship,

    #[error("Parent of grouping set {id} is {value}; expected an id or -1")]
    InvalidParent { id: GroupingSetId, value: i64 },

    #[error("Children key '{0}' is not a grouping set id")]
    InvalidChildKey(String),

    #[error("Children keys '{first}' and '{second}' both name grouping set {id}")]
    DuplicateChildKey {
        id: GroupingSetId,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Forest(#[from] ForestError),
}

/// A grouping-set document, optionally with a relationship to validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ForestInput {
    pub grouping_sets: Vec<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<i64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<BTreeMap<String, Vec<GroupingSetId>>>,
}

impl ForestInput {
    /// Read a `.toml` or `.json` document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&fs::read_to_string(path)?),
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            _ => Err(InputError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, InputError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn grouping_sets(&self) -> Vec<GroupingSet<String>> {
        self.grouping_sets
            .iter()
            .map(|columns| columns.iter().cloned().collect())
            .collect()
    }

    /// Plan a forest over the document's grouping sets, ignoring any
    /// relationship it gives.
    pub fn plan<P: ForestPlanner>(&self, planner: &P) -> GroupingSetForest<String> {
        planner.plan(self.grouping_sets())
    }

    /// Validate the relationship the document gives.
    pub fn check(&self) -> Result<GroupingSetForest<String>, InputError> {
        match (&self.parents, &self.children) {
            (Some(_), Some(_)) => Err(InputError::ConflictingRelationships),
            (None, None) => Err(InputError::MissingRelationship),
            (Some(parents), None) => {
                let id_to_parent = decode_parents(parents)?;
                Ok(GroupingSetForest::from_parents(
                    self.grouping_sets(),
                    &id_to_parent,
                )?)
            }
            (None, Some(children)) => {
                let parent_to_children = decode_children(children)?;
                Ok(GroupingSetForest::from_children(
                    self.grouping_sets(),
                    &parent_to_children,
                )?)
            }
        }
    }
}

fn decode_parents(parents: &[i64]) -> Result<Vec<Option<GroupingSetId>>, InputError> {
    parents
        .iter()
        .enumerate()
        .map(|(id, &value)| match value {
            ROOT_SENTINEL => Ok(None),
            value => GroupingSetId::try_from(value)
                .map(Some)
                .map_err(|_| InputError::InvalidParent { id, value }),
        })
        .collect()
}

/// Keys are parsed as ids; two keys naming the same id (`"1"` and `"01"`)
/// are rejected rather than letting one overwrite the other.
fn decode_children(
    children: &BTreeMap<String, Vec<GroupingSetId>>,
) -> Result<BTreeMap<GroupingSetId, BTreeSet<GroupingSetId>>, InputError> {
    let mut parent_to_children: BTreeMap<GroupingSetId, BTreeSet<GroupingSetId>> =
        BTreeMap::new();
    let mut keys: BTreeMap<GroupingSetId, &String> = BTreeMap::new();

    for (key, ids) in children {
        let parent = key
            .trim()
            .parse::<GroupingSetId>()
            .map_err(|_| InputError::InvalidChildKey(key.clone()))?;
        if let Some(first) = keys.insert(parent, key) {
            return Err(InputError::DuplicateChildKey {
                id: parent,
                first: first.clone(),
                second: key.clone(),
            });
        }
        parent_to_children.insert(parent, ids.iter().copied().collect());
    }

    Ok(parent_to_children)
}

/// Serializable summary of a forest, used for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestReport {
    /// Columns of each grouping set, sorted.
    pub grouping_sets: Vec<Vec<String>>,
    /// Parent of each id, `-1` for roots.
    pub id_to_parent: Vec<i64>,
    pub parent_to_children: BTreeMap<GroupingSetId, Vec<GroupingSetId>>,
    pub root_ids: Vec<GroupingSetId>,
}

impl ForestReport {
    pub fn from_forest(forest: &GroupingSetForest<String>) -> Self {
        let grouping_sets = forest
            .grouping_sets()
            .iter()
            .map(|set| {
                let mut columns: Vec<String> = set.iter().cloned().collect();
                columns.sort();
                columns
            })
            .collect();
        let id_to_parent = forest
            .id_to_parent()
            .iter()
            .map(|parent| match parent {
                Some(parent) => i64::try_from(*parent).unwrap_or(i64::MAX),
                None => ROOT_SENTINEL,
            })
            .collect();
        let parent_to_children = forest
            .parent_to_children()
            .iter()
            .map(|(parent, children)| (*parent, children.iter().copied().collect()))
            .collect();

        Self {
            grouping_sets,
            id_to_parent,
            parent_to_children,
            root_ids: forest.root_ids().iter().copied().collect(),
        }
    }
}
