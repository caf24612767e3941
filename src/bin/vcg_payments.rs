use clap::{Parser, ValueEnum};
use std::{path::PathBuf, process::ExitCode};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vcg_path_payments::{Graph, PathPaymentCalculator, PaymentError, PaymentReport, Result};

/// Compute VCG payments for the edges of the cheapest path between two nodes
#[derive(Debug, Parser)]
#[command(name = "vcg-payments", version, about)]
struct Cli {
    /// CSV edge list with `From,To,Cost` headers
    #[arg(short, long)]
    edges: PathBuf,

    /// Node the path starts at
    #[arg(short, long)]
    source: String,

    /// Node the path ends at
    #[arg(short, long)]
    target: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Price edges one at a time on the main thread
    #[arg(long)]
    sequential: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Table,
    Json,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let graph = Graph::from_csv(&cli.edges)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        path = %cli.edges.display(),
        "loaded graph"
    );

    let report = PathPaymentCalculator::default()
        .parallel(!cli.sequential)
        .compute(&graph, &cli.source, &cli.target)?;

    render(&report, cli.format)
}

fn render(report: &PaymentReport<String>, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(report.to_string()),
        Format::Table => Ok(format!(
            "Path chosen: {}\nTotal cost: {}\n{}",
            report.path.join(" -> "),
            report.total_cost,
            report.to_table()
        )),
        Format::Json => {
            serde_json::to_string_pretty(report).map_err(|e| PaymentError::Encode(e.to_string()))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
