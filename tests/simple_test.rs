use vcg_path_payments::{Graph, PathPaymentCalculator, compute_payments};

fn reference_graph() -> Graph<&'static str> {
    Graph::from_edges([("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)])
        .expect("reference graph has valid weights")
}

#[test]
fn test_reference_example_output() {
    // Expected output:
    //   Path chosen: ["A", "B", "C"]
    //   Total cost: 3
    //   Payment for edge ("A", "B"): 3.0
    //   Payment for edge ("B", "C"): 4.0
    let graph = reference_graph();
    let report = compute_payments(&graph, &"A", &"C").expect("Failed to compute payments");

    assert_eq!(report.path, vec!["A", "B", "C"]);
    assert_eq!(report.total_cost, 3.0);
    assert_eq!(report.payment(&"A", &"B"), Some(3.0));
    assert_eq!(report.payment(&"B", &"C"), Some(4.0));
    assert_eq!(
        report.to_string(),
        "Path chosen: [\"A\", \"B\", \"C\"]\n\
         Total cost: 3\n\
         Payment for edge (\"A\", \"B\"): 3.0\n\
         Payment for edge (\"B\", \"C\"): 4.0"
    );
}

#[test]
fn test_payments_in_path_order() {
    let graph = Graph::from_edges([
        ("S", "X", 2.0),
        ("X", "Y", 2.0),
        ("Y", "T", 2.0),
        ("S", "Y", 5.0),
        ("X", "T", 5.0),
    ])
    .unwrap();
    let report = compute_payments(&graph, &"S", &"T").unwrap();

    assert_eq!(report.path, vec!["S", "X", "Y", "T"]);
    let edges: Vec<(&str, &str)> = report.payments.iter().map(|p| (p.start, p.end)).collect();
    assert_eq!(edges, vec![("S", "X"), ("X", "Y"), ("Y", "T")]);

    // S->X: best without is S->Y->T = 7, rest of path = 4
    assert_eq!(report.payments[0].payment, 3.0);
    // X->Y: best without is S->X->T = 7, rest of path = 4
    assert_eq!(report.payments[1].payment, 3.0);
    // Y->T: best without is S->X->T = 7, rest of path = 4
    assert_eq!(report.payments[2].payment, 3.0);
}

#[test]
fn test_single_route_is_critical() {
    let graph = Graph::from_edges([("A", "B", 4.0)]).unwrap();
    let report = compute_payments(&graph, &"A", &"B").unwrap();

    assert_eq!(report.path, vec!["A", "B"]);
    assert_eq!(report.total_cost, 4.0);
    assert_eq!(report.payments.len(), 1);
    assert!(report.payments[0].is_critical());
    assert!(report.payments[0].payment.is_infinite());
    assert!(report.payments[0].payment > 0.0);
    assert!(report.to_string().ends_with("Payment for edge (\"A\", \"B\"): inf"));
}

#[test]
fn test_source_equals_target_has_no_payments() {
    let graph = reference_graph();
    let report = compute_payments(&graph, &"A", &"A").unwrap();

    assert_eq!(report.path, vec!["A"]);
    assert_eq!(report.total_cost, 0.0);
    assert!(report.payments.is_empty());
    assert_eq!(report.total_payment(), 0.0);
}

#[test]
fn test_repeated_calls_are_identical() {
    let graph = reference_graph();
    let calculator = PathPaymentCalculator::default();

    let first = calculator.compute(&graph, &"A", &"C").unwrap();
    let second = calculator.compute(&graph, &"A", &"C").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_graph_untouched_by_computation() {
    let graph = reference_graph();
    let _ = compute_payments(&graph, &"A", &"C").unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.cost(&"A", &"B"), Some(1.0));
    assert_eq!(graph.cost(&"B", &"C"), Some(2.0));
    assert_eq!(graph.cost(&"A", &"C"), Some(5.0));
}

#[test]
fn test_zero_cost_alternative() {
    // Alternative route ties the chosen one; removing either edge costs nothing extra
    let graph = Graph::from_edges([
        ("A", "B", 0.0),
        ("B", "C", 0.0),
        ("A", "D", 0.0),
        ("D", "C", 0.0),
    ])
    .unwrap();
    let report = compute_payments(&graph, &"A", &"C").unwrap();

    assert_eq!(report.total_cost, 0.0);
    assert_eq!(report.payments.len(), 2);
    for p in &report.payments {
        assert_eq!(p.payment, 0.0);
    }
}
