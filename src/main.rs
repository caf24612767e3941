use vcg_path_payments::{Graph, compute_payments};

fn main() {
    let graph = match Graph::from_edges([("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)]) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error building graph: {}", e);
            return;
        }
    };

    match compute_payments(&graph, &"A", &"C") {
        Err(e) => {
            eprintln!("Error computing payments: {}", e);
        }
        Ok(report) => {
            println!("{report}");
        }
    }
}
