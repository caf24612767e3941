use thiserror::Error;

/// Error types for the path payment computation
#[derive(Debug, Error, PartialEq)]
pub enum PaymentError {
    /// Source or target is not a node of the graph
    #[error("Node {node} is not present in the graph.")]
    InvalidNode { node: String },

    /// Target cannot be reached from source
    #[error("No path exists from {start} to {end}.")]
    NoPath { start: String, end: String },

    /// Edge weight outside the supported range
    #[error("Edge ({start}, {end}) has weight {weight}; weights must be finite and non-negative.")]
    InvalidWeight {
        start: String,
        end: String,
        weight: f64,
    },

    /// A shortest-path implementation returned a hop that is not a graph edge
    #[error("Route step ({start}, {end}) is not an edge of the graph.")]
    MalformedRoute { start: String, end: String },

    /// Edge list could not be read
    #[error("Failed to read edge list: {0}")]
    Csv(String),

    /// Report could not be encoded for output
    #[error("Failed to encode report: {0}")]
    Encode(String),
}

/// Result type alias for payment operations
pub type Result<T> = std::result::Result<T, PaymentError>;
