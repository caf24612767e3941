use crate::{
    error::{PaymentError, Result},
    shortest_path::{Dijkstra, ShortestPath},
    types::{EdgePayment, Graph, PaymentReport},
    utils::node_label,
    validation::check_endpoints,
};
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    visit::{EdgeFiltered, EdgeRef},
};
use rayon::prelude::*;
use std::{fmt::Debug, hash::Hash};
use tracing::{debug, trace};

/// Computes the cheapest path between two nodes and the VCG payment owed to
/// each edge on it.
///
/// The payment for edge `e` on the chosen path `P*` is
/// `cost(best path avoiding e) - (cost(P*) - cost(e))`, or infinity when no
/// path avoids `e`.
#[derive(Debug, Clone)]
pub struct PathPaymentCalculator<S = Dijkstra> {
    algorithm: S,
    parallel: bool,
}

impl Default for PathPaymentCalculator<Dijkstra> {
    fn default() -> Self {
        Self::new(Dijkstra)
    }
}

impl<S> PathPaymentCalculator<S>
where
    S: ShortestPath + Sync,
{
    pub fn new(algorithm: S) -> Self {
        Self {
            algorithm,
            parallel: true,
        }
    }

    /// Recompute per-edge alternatives on the rayon pool (default) or in
    /// path order on the calling thread. Both produce the same report.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn compute<N>(&self, graph: &Graph<N>, source: &N, target: &N) -> Result<PaymentReport<N>>
    where
        N: Clone + Eq + Hash + Debug + Send + Sync,
    {
        let (start, end) = check_endpoints(graph, source, target)?;
        let dag = graph.inner();

        let route = self
            .algorithm
            .shortest_path(dag, start, end)
            .ok_or_else(|| PaymentError::NoPath {
                start: node_label(source),
                end: node_label(target),
            })?;
        let total_cost = route.cost;

        // Resolve each hop to its edge; unique per ordered pair
        let hops = route
            .nodes
            .windows(2)
            .map(|pair| {
                dag.find_edge(pair[0], pair[1])
                    .map(|edge| (pair[0], pair[1], edge))
                    .ok_or_else(|| PaymentError::MalformedRoute {
                        start: node_label(&dag[pair[0]]),
                        end: node_label(&dag[pair[1]]),
                    })
            })
            .collect::<Result<Vec<(NodeIndex, NodeIndex, EdgeIndex)>>>()?;

        debug!(
            source = ?source,
            target = ?target,
            total_cost,
            hops = hops.len(),
            "selected reference path"
        );

        let price = |&(u, v, edge): &(NodeIndex, NodeIndex, EdgeIndex)| {
            let cost = dag[edge];
            let without_edge = EdgeFiltered::from_fn(dag, |e| e.id() != edge);
            let cost_without = self
                .algorithm
                .shortest_path(&without_edge, start, end)
                .map(|alt| alt.cost);
            let payment = match cost_without {
                Some(alt) => alt - (total_cost - cost),
                None => f64::INFINITY,
            };

            trace!(
                start = ?dag[u],
                end = ?dag[v],
                cost,
                cost_without = ?cost_without,
                payment,
                "priced edge"
            );

            EdgePayment {
                start: dag[u].clone(),
                end: dag[v].clone(),
                cost,
                cost_without,
                payment,
            }
        };

        let payments: Vec<EdgePayment<N>> = if self.parallel {
            hops.par_iter().map(price).collect()
        } else {
            hops.iter().map(price).collect()
        };

        Ok(PaymentReport {
            path: route.nodes.iter().map(|&n| dag[n].clone()).collect(),
            total_cost,
            payments,
        })
    }
}

/// Cheapest path from `source` to `target` with a VCG payment per path edge,
/// using Dijkstra for every search.
pub fn compute_payments<N>(graph: &Graph<N>, source: &N, target: &N) -> Result<PaymentReport<N>>
where
    N: Clone + Eq + Hash + Debug + Send + Sync,
{
    PathPaymentCalculator::default().compute(graph, source, target)
}
