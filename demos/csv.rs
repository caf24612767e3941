use vcg_path_payments::{Graph, compute_payments};

fn main() {
    let graph = Graph::from_csv("tests/fixtures/edges.csv").expect("Failed to read edge list");

    let report = compute_payments(&graph, &"SIN".to_string(), &"NYC".to_string())
        .expect("Failed to compute payments");

    println!("{report}");
    println!("{}", report.to_table());
}
