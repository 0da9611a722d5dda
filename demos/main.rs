//! Command-line path search demo.
//!
//! Builds a graph, runs one algorithm between two nodes and prints the lines
//! a renderer would draw. Set `RUST_LOG=debug` (or `trace`) to follow the
//! search.

use clap::{Parser, ValueEnum};
use pathgraph_core::{Graph, NodeId};
use pathgraph_demos::{grid_graph, random_geometric_graph, scenario_graph, scenario_key};
use pathgraph_search::{Algorithm, PathFinder};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum GraphKind {
    /// A,B,C,D in a line plus an isolated E.
    Scenario,
    /// Square lattice of `--nodes` nodes (rounded down to a square).
    Grid,
    /// Random geometric graph.
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "pathgraph-demo", about = "Run a single path query and print the result")]
struct Args {
    #[arg(long, value_enum, default_value_t = GraphKind::Scenario)]
    graph: GraphKind,

    /// Node count for generated graphs.
    #[arg(long, default_value_t = 200)]
    nodes: usize,

    /// Seed for the random graph.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Connection radius for the random graph.
    #[arg(long, default_value_t = 120.0)]
    radius: f64,

    /// Source node key (letter for the scenario graph).
    #[arg(long)]
    src: Option<String>,

    /// Destination node key (letter for the scenario graph).
    #[arg(long)]
    dest: Option<String>,

    /// none, dijkstra, astar or best-first.
    #[arg(long, default_value = "dijkstra")]
    algorithm: Algorithm,

    /// Also print the visited-edge lines.
    #[arg(long)]
    show_visited: bool,
}

fn parse_key(kind: GraphKind, raw: &str) -> Option<u64> {
    match kind {
        GraphKind::Scenario => scenario_key(raw).or_else(|| raw.parse().ok()),
        _ => raw.parse().ok(),
    }
}

fn resolve(g: &Graph, kind: GraphKind, raw: Option<&str>, fallback: u64) -> Option<NodeId> {
    let key = match raw {
        Some(raw) => parse_key(kind, raw)?,
        None => fallback,
    };
    g.node_by_key(key)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut graph = match args.graph {
        GraphKind::Scenario => scenario_graph()?,
        GraphKind::Grid => {
            let side = (args.nodes as f64).sqrt().floor().max(1.0) as usize;
            grid_graph(side, side, 10.0)?
        }
        GraphKind::Random => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            random_geometric_graph(&mut rng, args.nodes.max(1), args.radius)?
        }
    };
    let last_key = graph.node_count().saturating_sub(1) as u64;
    let (default_src, default_dest) = match args.graph {
        GraphKind::Scenario => (1, 4),
        _ => (0, last_key),
    };

    let src = resolve(&graph, args.graph, args.src.as_deref(), default_src)
        .ok_or("unknown source node")?;
    let dest = resolve(&graph, args.graph, args.dest.as_deref(), default_dest)
        .ok_or("unknown destination node")?;

    let mut finder = PathFinder::default();
    finder.set_src(src);
    finder.set_dest(dest);
    finder.exec(&mut graph, args.algorithm);

    if let Some(run) = finder.last_run() {
        println!(
            "{}: {} nodes, {} edges, {} expansions, termination {:?}",
            run.algorithm,
            graph.node_count(),
            graph.edge_count(),
            run.expansions,
            run.termination
        );
    }
    if finder.path().is_empty() {
        println!("no path ({} edges visited)", finder.visited_edges().len());
    } else {
        println!(
            "path: {} segments, length {:.3} ({} edges visited)",
            finder.path().len(),
            finder.path_length(),
            finder.visited_edges().len()
        );
    }

    for line in finder.draw_lines(args.show_visited) {
        println!(
            "  {} -> {}  {} -> {}  len {:.3}  #{:06x} w{:.1}",
            line.from, line.to, line.start, line.end, line.length, line.color.0, line.thickness
        );
    }

    Ok(())
}
