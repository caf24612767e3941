use std::fmt::Debug;

/// Render a node identifier for error messages and tables
pub(crate) fn node_label<N: Debug>(node: &N) -> String {
    format!("{node:?}")
}

/// Check that a cost can take part in a non-negative shortest-path search
pub(crate) fn is_valid_cost(cost: f64) -> bool {
    cost.is_finite() && cost >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_label() {
        assert_eq!(node_label(&"SIN"), "\"SIN\"");
        assert_eq!(node_label(&42u32), "42");
    }

    #[test]
    fn test_is_valid_cost() {
        assert!(is_valid_cost(0.0));
        assert!(is_valid_cost(12.5));
        assert!(!is_valid_cost(-0.1));
        assert!(!is_valid_cost(f64::NAN));
        assert!(!is_valid_cost(f64::INFINITY));
    }
}
