//! Loads a saved sketch and prints a summary: counts, connectivity,
//! completeness and a depth-first traversal.
//!
//! Usage:
//!   cargo run --example sketch_summary -- path/to/sketch.txt
//!   cargo run --example sketch_summary -- path/to/sketch.txt --start B --verbose

use std::process;

use clap::Parser;
use incidence_graph::{GraphSketch, prelude::*};
use tracing_subscriber::filter::LevelFilter;

/// Read a saved sketch and print a summary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sketch file to read
    input: String,

    /// Element of the vertex to start the traversal from (default: the first vertex)
    #[arg(long)]
    start: Option<String>,

    /// Log load progress to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let sketch = match GraphSketch::load(&args.input) {
        Ok(sketch) => sketch,
        Err(err) => {
            eprintln!("Failed to read '{}': {err}", args.input);
            process::exit(1);
        }
    };
    let graph = sketch.graph();

    println!("Sketch summary");
    println!("  vertices: {}", graph.num_vertices());
    println!("  edges: {}", graph.num_edges());
    println!("  connected: {}", sketch.is_connected());
    println!("  complete: {}", sketch.is_complete());

    let start = match args.start.as_ref() {
        Some(element) => graph.get_vertex(element),
        None => graph.vertices().first().copied(),
    };
    let Some(start) = start else {
        if let Some(element) = args.start {
            eprintln!("No vertex stores '{element}'");
            process::exit(1);
        }
        return;
    };

    let traversal = match graph.dfs(start) {
        Ok(traversal) => traversal,
        Err(err) => {
            eprintln!("Traversal failed: {err}");
            process::exit(1);
        }
    };
    let label = |vertex| {
        graph
            .vertex_data(vertex)
            .map(String::as_str)
            .unwrap_or("?")
    };
    let order: Vec<_> = traversal.discovery_order.iter().map(|&v| label(v)).collect();
    println!("Depth-first from {}:", label(start));
    println!("  discovery order: {}", order.join(" "));
    println!("  tree edges: {}", traversal.tree_edges.len());
    println!("  back edges: {}", traversal.num_back_edges());
    if let Ok(position) = sketch.position(start) {
        println!("  start position: {position}");
    }
}
