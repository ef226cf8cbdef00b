//! Command-line entry point: plan a network and render the result.
//!
//! With no arguments, plans the built-in demo network. Otherwise the first
//! argument is a JSON adjacency document and the optional second argument
//! is the start node (defaults to the first label).

use std::env;
use std::fs;

use anyhow::{Context, Result};
use tracing::Level;

use netspan::graph::{Cost, Topology, TopologyBuilder};
use netspan::mst::{PrimSolver, TraceObserver};
use netspan::render::{SpringLayout, SvgRenderer};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut args = env::args().skip(1);
    let topology = match args.next() {
        Some(path) => load_topology(&path)?,
        None => demo_topology(),
    };
    let start = match args.next() {
        Some(label) => label,
        None => topology
            .labels()
            .next()
            .map(str::to_string)
            .context("topology has no nodes")?,
    };

    tracing::info!(
        nodes = topology.node_count(),
        links = topology.link_count(),
        start = %start,
        "planning network"
    );

    let positions = SpringLayout::new().positions(&topology);
    let renderer = SvgRenderer::new();

    fs::write("network.svg", renderer.render_overview(&topology, &positions))
        .context("writing network.svg")?;

    let tree = PrimSolver::new().run_observed(&topology, &start, &mut TraceObserver)?;

    tracing::info!(
        total_cost = tree.total_cost,
        links = tree.edge_count(),
        "spanning tree complete"
    );

    fs::write(
        "network_mst.svg",
        renderer.render_solution(&topology, &tree, &positions),
    )
    .context("writing network_mst.svg")?;

    Ok(())
}

/// Decode a topology from a JSON adjacency document on disk.
fn load_topology(path: &str) -> Result<Topology> {
    let document = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let topology =
        Topology::from_json_str(&document).with_context(|| format!("decoding {path}"))?;
    Ok(topology)
}

/// Nine-node demo network used when no topology file is given.
fn demo_topology() -> Topology {
    let cables: [(&str, &str, Cost); 14] = [
        ("srv-a", "srv-b", 4),
        ("srv-a", "srv-h", 8),
        ("srv-b", "srv-c", 8),
        ("srv-b", "srv-h", 11),
        ("srv-c", "srv-d", 7),
        ("srv-c", "srv-f", 4),
        ("srv-c", "srv-i", 2),
        ("srv-d", "srv-e", 9),
        ("srv-d", "srv-f", 14),
        ("srv-e", "srv-f", 10),
        ("srv-f", "srv-g", 2),
        ("srv-g", "srv-h", 1),
        ("srv-g", "srv-i", 6),
        ("srv-h", "srv-i", 7),
    ];

    let mut builder = TopologyBuilder::with_capacity(9);
    for (a, b, cost) in cables {
        builder.link(a, b, cost);
    }
    Topology::from_builder(&builder)
}
