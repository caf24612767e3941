//! Shortest-path primitive consumed by the payment calculator.
//!
//! The calculator only needs "cheapest route from `source` to `target` over
//! this view of the graph". Any correct non-negative-weight algorithm can
//! implement [`ShortestPath`]; the view may be the full graph or an
//! edge-filtered one.

use petgraph::{
    algo::astar,
    graph::NodeIndex,
    visit::{EdgeRef, IntoEdges, Visitable},
};

/// Cheapest route found by a [`ShortestPath`] implementation
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub cost: f64,
    /// Visited nodes from source to target, both included
    pub nodes: Vec<NodeIndex>,
}

pub trait ShortestPath {
    /// Cheapest route from `source` to `target`, or `None` if unreachable.
    ///
    /// Must be deterministic: the same graph view always yields the same
    /// route, including between equal-cost candidates.
    fn shortest_path<G>(&self, graph: G, source: NodeIndex, target: NodeIndex) -> Option<Route>
    where
        G: IntoEdges<NodeId = NodeIndex, EdgeWeight = f64> + Visitable;
}

/// Dijkstra's algorithm, run as A* with a zero heuristic.
///
/// Equal-cost paths are resolved by petgraph's search order, which only
/// depends on node and edge insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl ShortestPath for Dijkstra {
    fn shortest_path<G>(&self, graph: G, source: NodeIndex, target: NodeIndex) -> Option<Route>
    where
        G: IntoEdges<NodeId = NodeIndex, EdgeWeight = f64> + Visitable,
    {
        astar(
            graph,
            source,
            |node| node == target,
            |edge| *edge.weight(),
            |_| 0.0,
        )
        .map(|(cost, nodes)| Route { cost, nodes })
    }
}
