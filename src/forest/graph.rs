//! petgraph views of a forest for downstream plan generation.

use super::{GroupingSetForest, GroupingSetId};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, Topo};
use std::hash::Hash;

impl<T: Eq + Hash> GroupingSetForest<T> {
    /// Directed graph with one node per grouping set and one edge per
    /// parent → child link. Node `NodeIndex::new(id)` carries weight `id`.
    pub fn to_graph(&self) -> DiGraph<GroupingSetId, ()> {
        let edge_count = self.len() - self.root_ids().len();
        let mut graph = DiGraph::with_capacity(self.len(), edge_count);
        for id in 0..self.len() {
            graph.add_node(id);
        }
        for (&parent, children) in self.parent_to_children() {
            for &child in children {
                graph.add_edge(NodeIndex::new(parent), NodeIndex::new(child), ());
            }
        }
        graph
    }

    /// `id` followed by every descendant, depth first.
    ///
    /// Unknown ids have an empty subtree.
    pub fn subtree(&self, id: GroupingSetId) -> Vec<GroupingSetId> {
        if id >= self.len() {
            return Vec::new();
        }
        let graph = self.to_graph();
        let mut dfs = Dfs::new(&graph, NodeIndex::new(id));
        let mut ids = Vec::new();
        while let Some(node) = dfs.next(&graph) {
            ids.push(graph[node]);
        }
        ids
    }

    /// Every id, each parent before all of its children.
    ///
    /// This is an order in which each grouping set can be aggregated from
    /// its already-aggregated parent.
    pub fn evaluation_order(&self) -> Vec<GroupingSetId> {
        let graph = self.to_graph();
        let mut topo = Topo::new(&graph);
        let mut ids = Vec::with_capacity(self.len());
        while let Some(node) = topo.next(&graph) {
            ids.push(graph[node]);
        }
        ids
    }
}
