use anyhow::Result;
use clap::Parser;
use gir_core::loader::{self, LoadOptions};
use gir_core::{shortest_path, GraphView, ShortestPath, ViewEdge, ViewNode};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// GIR - Graph Interaction Resolver
#[derive(Parser, Debug)]
#[command(name = "gir")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(about = "Find the shortest weighted path between two nodes of an interaction graph", long_about = None)]
struct Cli {
    /// Tab-delimited edge list: node1, node2, weight
    filename: PathBuf,

    /// Node the path starts from
    start_node: String,

    /// Node the path ends at
    end_node: String,

    /// Fail on malformed lines instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Print the result as JSON, including renderable nodes and edges
    #[arg(long)]
    json: bool,

    /// Log loading and query progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Machine-readable query outcome
#[derive(Serialize)]
struct Report<'a> {
    start: &'a str,
    end: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a ShortestPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    nodes: Vec<ViewNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    edges: Vec<ViewEdge>,
}

fn main() -> Result<()> {
    // Usage errors exit with 1; --help and --version exit with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);

    let options = LoadOptions { strict: cli.strict };
    let report = loader::load_graph_from_file(&cli.filename, &options)?;
    if report.skipped > 0 {
        info!(
            skipped = report.skipped,
            file = %cli.filename.display(),
            "Ignored malformed lines"
        );
    }
    let graph = report.graph;

    let outcome = shortest_path(&graph, &cli.start_node, &cli.end_node);

    if cli.json {
        let view = outcome
            .as_ref()
            .ok()
            .map(|found| GraphView::new(&graph, Some(found)));
        let json = Report {
            start: &cli.start_node,
            end: &cli.end_node,
            result: outcome.as_ref().ok(),
            error: outcome.as_ref().err().map(|err| err.to_string()),
            nodes: view.iter().flat_map(|v| v.nodes().cloned()).collect(),
            edges: view.map(|v| v.edges()).unwrap_or_default(),
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    // Modeled failures are plain messages, not process errors
    match outcome {
        Ok(found) => {
            println!(
                "Shortest path between {} and {}: {}",
                cli.start_node,
                cli.end_node,
                found.nodes().join(" -> ")
            );
            println!("Total weight: {}", found.total_weight());
        }
        Err(err) => println!("{}", err),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
