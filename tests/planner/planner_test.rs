//! Tests for the simple forest planner.

use grouping_forest::config::PlannerSettings;
use grouping_forest::{
    ForestPlanner, GroupingSet, GroupingSetForest, GroupingSetId, ParentChoice, SimplePlanner,
};
use std::collections::BTreeSet;

fn sets(columns: &[&[char]]) -> Vec<GroupingSet<char>> {
    columns.iter().map(|c| c.iter().copied().collect()).collect()
}

fn plan(grouping_sets: Vec<GroupingSet<char>>) -> GroupingSetForest<char> {
    SimplePlanner::new().plan(grouping_sets)
}

fn assert_superset_edges(forest: &GroupingSetForest<char>) {
    for (child, parent) in forest.id_to_parent().iter().enumerate() {
        if let Some(parent) = parent {
            let parent_set = &forest.grouping_sets()[*parent];
            let child_set = &forest.grouping_sets()[child];
            assert!(parent_set.is_superset_of(child_set), "{} -> {}", parent, child);
        }
    }
}

#[test]
fn test_plan_empty_input() {
    let forest = plan(Vec::new());
    assert!(forest.grouping_sets().is_empty());
    assert!(forest.parent_to_children().is_empty());
    assert!(forest.id_to_parent().is_empty());
    assert!(forest.root_ids().is_empty());
    assert_eq!(forest, GroupingSetForest::empty());
}

#[test]
fn test_plan_single_grouping_set() {
    let forest = plan(sets(&[&['a', 'b']]));
    assert_eq!(forest.id_to_parent(), &[None]);
    assert_eq!(forest.root_ids(), &BTreeSet::from([0]));
}

#[test]
fn test_plan_rollup_is_a_chain() {
    // ROLLUP(a, b, c)
    let forest = plan(sets(&[&['a', 'b', 'c'], &['a', 'b'], &['a'], &[]]));
    assert_eq!(forest.id_to_parent(), &[None, Some(0), Some(1), Some(2)]);
    assert_eq!(forest.root_ids(), &BTreeSet::from([0]));
    assert_eq!(forest.depth(3), 3);
}

#[test]
fn test_plan_cube_spreads_children() {
    // CUBE(a, b, c)
    let grouping_sets = sets(&[
        &['a', 'b', 'c'], // id 0
        &['a', 'b'],      // id 1
        &['a', 'c'],      // id 2
        &['b', 'c'],      // id 3
        &['a'],           // id 4
        &['b'],           // id 5
        &['c'],           // id 6
        &[],              // id 7
    ]);
    let forest = plan(grouping_sets);

    // {b} could go under {a, b} or {b, c}; {a, b} already has {a}, so {b, c} wins
    assert_eq!(
        forest.id_to_parent(),
        &[
            None,
            Some(0),
            Some(0),
            Some(0),
            Some(1),
            Some(3),
            Some(2),
            Some(4)
        ]
    );
    assert_eq!(forest.root_ids(), &BTreeSet::from([0]));
    assert_superset_edges(&forest);
}

#[test]
fn test_plan_cube_lowest_id() {
    let grouping_sets = sets(&[
        &['a', 'b', 'c'],
        &['a', 'b'],
        &['a', 'c'],
        &['b', 'c'],
        &['a'],
        &['b'],
        &['c'],
        &[],
    ]);
    let forest = SimplePlanner::with_parent_choice(ParentChoice::LowestId).plan(grouping_sets);
    assert_eq!(
        forest.id_to_parent(),
        &[
            None,
            Some(0),
            Some(0),
            Some(0),
            Some(1),
            Some(1),
            Some(2),
            Some(4)
        ]
    );
}

#[test]
fn test_plan_identical_grouping_sets_chain() {
    let forest = plan(sets(&[&['b'], &['b'], &['b']]));
    assert_eq!(forest.id_to_parent(), &[Some(1), Some(2), None]);
}

#[test]
fn test_plan_ties_between_equal_candidates() {
    let grouping_sets = sets(&[
        &['a', 'b'], // id 0
        &['a', 'b'], // id 1
        &['a'],      // id 2
        &['b'],      // id 3
    ]);
    let forest = plan(grouping_sets);
    // {a} takes the lowest of the two equal candidates, {b} the emptier one
    assert_eq!(forest.id_to_parent(), &[Some(1), None, Some(0), Some(1)]);
    assert_superset_edges(&forest);
}

#[test]
fn test_plan_disjoint_sets_are_roots() {
    let forest = plan(sets(&[&['g', 'h'], &['a'], &['z']]));
    assert_eq!(forest.id_to_parent(), &[None, None, None]);
    assert_eq!(forest.root_ids(), &BTreeSet::from([0, 1, 2]));
    assert!(forest.parent_to_children().is_empty());
}

#[test]
fn test_plan_skips_larger_supersets() {
    // {a} sits under {a, b}, never directly under {a, b, c}
    let forest = plan(sets(&[&['a', 'b', 'c'], &['a'], &['a', 'b']]));
    assert_eq!(forest.parent_of(1), Some(2));
    assert_eq!(forest.parent_of(2), Some(0));
}

#[test]
fn test_plan_preserves_input_order() {
    let grouping_sets = sets(&[
        &['a', 'b', 'c'],
        &['a'],
        &['a', 'b'],
        &['a', 'c'],
        &['b'],
        &['b'],
        &['b'],
        &['g', 'h'],
        &['g'],
        &[],
        &['z'],
    ]);
    let forest = plan(grouping_sets.clone());
    assert_eq!(forest.grouping_sets(), grouping_sets.as_slice());
    assert_superset_edges(&forest);

    // the empty set picks one of the smallest non-empty sets
    let empty_parent = forest.parent_of(9).unwrap();
    assert_eq!(forest.grouping_sets()[empty_parent].len(), 1);
}

#[test]
fn test_plan_is_deterministic() {
    let grouping_sets = sets(&[
        &['a', 'b'],
        &['b', 'c'],
        &['a', 'c'],
        &['a'],
        &['b'],
        &['c'],
        &[],
    ]);
    let first = plan(grouping_sets.clone());
    for _ in 0..10 {
        assert_eq!(plan(grouping_sets.clone()), first);
    }
}

#[test]
fn test_planner_from_settings() {
    let settings = PlannerSettings {
        parent_choice: ParentChoice::LowestId,
    };
    let planner = SimplePlanner::from_settings(&settings);
    assert_eq!(planner.parent_choice(), ParentChoice::LowestId);
    assert_eq!(
        SimplePlanner::from_settings(&PlannerSettings::default()),
        SimplePlanner::new()
    );
}

#[test]
fn test_plan_with_string_columns() {
    let grouping_sets: Vec<GroupingSet<String>> = vec![
        vec!["region".to_string(), "year".to_string()].into(),
        vec!["region".to_string()].into(),
    ];
    let forest = SimplePlanner::new().plan(grouping_sets);
    let expected: &[Option<GroupingSetId>] = &[None, Some(0)];
    assert_eq!(forest.id_to_parent(), expected);
}
