use vcg_path_payments::{Graph, PathPaymentCalculator, Result};

fn build_sample_graph() -> Result<Graph<&'static str>> {
    // Two carriers compete between SIN and NYC; only one ferry reaches HNL
    Graph::from_edges([
        ("SIN", "FRA", 50.0),
        ("FRA", "NYC", 40.0),
        ("SIN", "NYC", 120.0),
        ("SIN", "LAX", 80.0),
        ("LAX", "NYC", 45.0),
        ("NYC", "HNL", 30.0),
    ])
}

fn main() -> Result<()> {
    let graph = build_sample_graph()?;
    let report = PathPaymentCalculator::default().compute(&graph, &"SIN", &"HNL")?;

    println!("Path chosen: {}", report.path.join(" -> "));
    println!("Total cost: {}", report.total_cost);
    println!("{:>5}  {:>5}  {:>7}  {:>9}", "Start", "End", "Cost", "Payment");
    for p in &report.payments {
        println!(
            "{:>5}  {:>5}  {:>7.2}  {:>9.2}",
            p.start, p.end, p.cost, p.payment
        );
    }

    Ok(())
}
