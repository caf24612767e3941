use crate::{
    error::{PaymentError, Result},
    types::Graph,
    utils::{is_valid_cost, node_label},
};
use petgraph::graph::NodeIndex;
use std::{fmt::Debug, hash::Hash};

/// Resolve source and target to graph indices, failing on unknown nodes
pub(crate) fn check_endpoints<N>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
) -> Result<(NodeIndex, NodeIndex)>
where
    N: Clone + Eq + Hash + Debug,
{
    let resolve = |node: &N| {
        graph
            .node_index(node)
            .ok_or_else(|| PaymentError::InvalidNode {
                node: node_label(node),
            })
    };

    Ok((resolve(source)?, resolve(target)?))
}

/// Reject edge costs a non-negative shortest-path search cannot handle
pub(crate) fn check_weight<N: Debug>(start: &N, end: &N, cost: f64) -> Result<()> {
    if !is_valid_cost(cost) {
        return Err(PaymentError::InvalidWeight {
            start: node_label(start),
            end: node_label(end),
            weight: cost,
        });
    }
    Ok(())
}
