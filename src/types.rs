use crate::{error::Result, validation::check_weight};
use petgraph::graph::{DiGraph, NodeIndex};
use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    hash::Hash,
};

#[cfg(feature = "borsh")]
use borsh::{BorshDeserialize, BorshSerialize};
#[cfg(feature = "serde")]
use {
    serde::{Deserialize, Serialize},
    tabled::Tabled,
};

/// Directed graph with non-negative edge costs and at most one edge per
/// ordered node pair.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    inner: DiGraph<N, f64>,
    index: HashMap<N, NodeIndex>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            inner: DiGraph::new(),
            index: HashMap::new(),
        }
    }
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(start, end, cost)` triples
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = Self::new();
        for (start, end, cost) in edges {
            graph.add_edge(start, end, cost)?;
        }
        Ok(graph)
    }

    /// Add a node, returning its index. Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: N) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.inner.add_node(node.clone());
        self.index.insert(node, idx);
        idx
    }

    /// Add the directed edge `start -> end`, overwriting the cost of an
    /// existing edge between the same pair.
    pub fn add_edge(&mut self, start: N, end: N, cost: f64) -> Result<()> {
        check_weight(&start, &end, cost)?;
        let a = self.add_node(start);
        let b = self.add_node(end);
        self.inner.update_edge(a, b, cost);
        Ok(())
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Cost of the edge `start -> end`, if present
    pub fn cost(&self, start: &N, end: &N) -> Option<f64> {
        let a = self.node_index(start)?;
        let b = self.node_index(end)?;
        self.inner.find_edge(a, b).map(|edge| self.inner[edge])
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub(crate) fn node_index(&self, node: &N) -> Option<NodeIndex> {
        self.index.get(node).copied()
    }

    pub(crate) fn inner(&self) -> &DiGraph<N, f64> {
        &self.inner
    }
}

/// Payment owed to a single edge of the chosen path
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "borsh", derive(BorshSerialize, BorshDeserialize))]
pub struct EdgePayment<N> {
    pub start: N,
    pub end: N,
    pub cost: f64,
    /// Cheapest source-to-target cost once this edge is unavailable
    pub cost_without: Option<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_payment"))]
    pub payment: f64,
}

/// JSON has no infinity; serde_json writes it as `null`
#[cfg(feature = "serde")]
fn deserialize_payment<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(<Option<f64> as Deserialize>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

impl<N> EdgePayment<N> {
    /// True when no alternative path exists without this edge
    pub fn is_critical(&self) -> bool {
        self.cost_without.is_none()
    }
}

/// Chosen path, its cost and the payment owed to each of its edges
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "borsh", derive(BorshSerialize, BorshDeserialize))]
pub struct PaymentReport<N> {
    pub path: Vec<N>,
    pub total_cost: f64,
    /// One entry per path edge, in path order
    pub payments: Vec<EdgePayment<N>>,
}

impl<N: PartialEq> PaymentReport<N> {
    /// Payment for the path edge `start -> end`
    pub fn payment(&self, start: &N, end: &N) -> Option<f64> {
        self.payments
            .iter()
            .find(|p| &p.start == start && &p.end == end)
            .map(|p| p.payment)
    }

    /// Sum of all edge payments; infinite if any edge is critical
    pub fn total_payment(&self) -> f64 {
        self.payments.iter().map(|p| p.payment).sum()
    }

    /// Payments in excess of the edges' own costs
    pub fn overpayment(&self) -> f64 {
        self.total_payment() - self.total_cost
    }
}

impl<N: Debug> Display for PaymentReport<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path chosen: {:?}", self.path)?;
        write!(f, "Total cost: {}", self.total_cost)?;
        for p in &self.payments {
            write!(
                f,
                "\nPayment for edge ({:?}, {:?}): {:.1}",
                p.start, p.end, p.payment
            )?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, Tabled)]
struct PaymentRow {
    #[tabled(rename = "Edge")]
    edge: String,
    #[tabled(rename = "Cost")]
    cost: f64,
    #[tabled(rename = "Cost without", display = "display_cost_without")]
    cost_without: Option<f64>,
    #[tabled(rename = "Payment", display = "display_payment")]
    payment: f64,
}

#[cfg(feature = "serde")]
fn display_cost_without(cost: &Option<f64>) -> String {
    match cost {
        Some(c) => c.to_string(),
        None => "unreachable".to_string(),
    }
}

#[cfg(feature = "serde")]
fn display_payment(payment: &f64) -> String {
    format!("{payment:.4}")
}

#[cfg(feature = "serde")]
impl<N: Debug> PaymentReport<N> {
    /// Render the payments as a table, one row per path edge
    pub fn to_table(&self) -> String {
        use crate::utils::node_label;
        use tabled::{Table, settings::Style};

        let rows = self.payments.iter().map(|p| PaymentRow {
            edge: format!("{} -> {}", node_label(&p.start), node_label(&p.end)),
            cost: p.cost,
            cost_without: p.cost_without,
            payment: p.payment,
        });
        Table::new(rows).with(Style::rounded()).to_string()
    }
}

#[cfg(feature = "serde")]
mod csv_support {
    use super::*;
    use crate::error::PaymentError;
    use std::{io::Read, path::Path};

    #[derive(Debug, Deserialize)]
    struct EdgeRecord {
        #[serde(rename = "From")]
        start: String,
        #[serde(rename = "To")]
        end: String,
        #[serde(rename = "Cost")]
        cost: f64,
    }

    impl Graph<String> {
        /// Read an edge list from a CSV file with `From,To,Cost` headers
        pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
            let reader =
                csv::Reader::from_path(path).map_err(|e| PaymentError::Csv(e.to_string()))?;
            Self::from_csv_reader(reader)
        }

        /// Read an edge list from any CSV source with `From,To,Cost` headers
        pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
            Self::from_csv_reader(csv::Reader::from_reader(rdr))
        }

        fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
            let mut graph = Graph::new();
            for result in reader.deserialize() {
                let record: EdgeRecord = result.map_err(|e| PaymentError::Csv(e.to_string()))?;
                graph.add_edge(record.start, record.end, record.cost)?;
            }
            Ok(graph)
        }
    }
}
