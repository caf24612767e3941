//! VCG path payment computation library
//!
//! This library selects the cheapest path between two nodes of a directed,
//! weighted graph and pays every edge on it its Vickrey-Clarke-Groves
//! (pivot) payment: the cost of the best path without the edge, minus the
//! cost of the rest of the chosen path.

pub mod error;
pub mod payments;
pub mod shortest_path;
pub mod types;
mod utils;
mod validation;

// Re-export main types and functions
pub use error::{PaymentError, Result};
pub use payments::{PathPaymentCalculator, compute_payments};
pub use shortest_path::{Dijkstra, Route, ShortestPath};
pub use types::{EdgePayment, Graph, PaymentReport};
