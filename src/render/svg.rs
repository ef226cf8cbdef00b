//! SVG rendering of a topology and its spanning tree
//!
//! Two frames mirroring a before/after pair: the overview draws every
//! possible link dashed gray, the solution highlights the accepted tree
//! over a faint backdrop and titles the frame with the total cost.

use html_escape::encode_text;
use rustc_hash::FxHashSet;

use crate::graph::{Cost, Topology};
use crate::mst::SpanningTree;

const BACKDROP_NODE_FILL: &str = "#d3d3d3";
const TREE_NODE_FILL: &str = "#87ceeb";
const TREE_EDGE_STROKE: &str = "#1e90ff";

/// SVG renderer configuration
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Blank border kept around the drawing
    pub margin: f64,
    /// Node circle radius
    pub node_radius: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            margin: 80.0,
            node_radius: 28.0,
        }
    }
}

impl SvgRenderer {
    /// Create a renderer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Render the problem: every possible link, no solution yet
    ///
    /// `positions` holds one unit-square coordinate per node id, as
    /// produced by [`SpringLayout`](crate::render::SpringLayout).
    pub fn render_overview(&self, topology: &Topology, positions: &[(f64, f64)]) -> String {
        let mut svg = self.open_document("Network topology: all possible links");

        for (a, b, cost) in topology.links() {
            let (x1, y1) = self.place(positions[a as usize]);
            let (x2, y2) = self.place(positions[b as usize]);
            svg.push_str(&format!(
                "  <line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
                 stroke=\"black\" stroke-width=\"1\" stroke-opacity=\"0.5\" \
                 stroke-dasharray=\"6 4\"/>\n",
            ));
            self.push_cost_label(&mut svg, (x1, y1), (x2, y2), cost);
        }

        for (id, _) in positions.iter().enumerate() {
            self.push_node(&mut svg, topology, positions, id, BACKDROP_NODE_FILL);
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Render the solution: the tree highlighted over a faint backdrop
    pub fn render_solution(
        &self,
        topology: &Topology,
        tree: &SpanningTree,
        positions: &[(f64, f64)],
    ) -> String {
        let title = format!("Minimum spanning tree: total cost {}", tree.total_cost);
        let mut svg = self.open_document(&title);

        // Backdrop: everything that could have been built
        for (a, b, _) in topology.links() {
            let (x1, y1) = self.place(positions[a as usize]);
            let (x2, y2) = self.place(positions[b as usize]);
            svg.push_str(&format!(
                "  <line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
                 stroke=\"gray\" stroke-width=\"1\" stroke-opacity=\"0.2\"/>\n",
            ));
        }

        // Accepted links
        for edge in &tree.edges {
            let (Some(a), Some(b)) = (topology.node_id(&edge.source), topology.node_id(&edge.target))
            else {
                continue;
            };
            let (x1, y1) = self.place(positions[a as usize]);
            let (x2, y2) = self.place(positions[b as usize]);
            svg.push_str(&format!(
                "  <line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
                 stroke=\"{TREE_EDGE_STROKE}\" stroke-width=\"4\"/>\n",
            ));
            self.push_cost_label(&mut svg, (x1, y1), (x2, y2), edge.weight);
        }

        let reached: FxHashSet<&str> = tree.nodes().into_iter().collect();
        for (id, _) in positions.iter().enumerate() {
            let fill = if reached.contains(topology.label(id as u32)) {
                TREE_NODE_FILL
            } else {
                BACKDROP_NODE_FILL
            };
            self.push_node(&mut svg, topology, positions, id, fill);
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Document header, background, and title
    fn open_document(&self, title: &str) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" \
             viewBox=\"0 0 {w:.0} {h:.0}\">\n",
            w = self.width,
            h = self.height,
        );
        svg.push_str(&format!(
            "  <rect width=\"{:.0}\" height=\"{:.0}\" fill=\"white\"/>\n",
            self.width, self.height,
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" \
             font-family=\"sans-serif\" font-size=\"20\" font-weight=\"bold\">{}</text>\n",
            self.width / 2.0,
            self.margin / 2.0,
            encode_text(title),
        ));
        svg
    }

    /// Map a unit-square position onto the canvas
    fn place(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            self.margin + x * (self.width - 2.0 * self.margin),
            self.margin + y * (self.height - 2.0 * self.margin),
        )
    }

    fn push_node(
        &self,
        svg: &mut String,
        topology: &Topology,
        positions: &[(f64, f64)],
        id: usize,
        fill: &str,
    ) {
        let (x, y) = self.place(positions[id]);
        svg.push_str(&format!(
            "  <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{r:.1}\" fill=\"{fill}\" \
             stroke=\"black\" stroke-width=\"1\"/>\n",
            r = self.node_radius,
        ));
        svg.push_str(&format!(
            "  <text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
             font-family=\"sans-serif\" font-size=\"11\" font-weight=\"bold\">{}</text>\n",
            encode_text(topology.label(id as u32)),
        ));
    }

    fn push_cost_label(&self, svg: &mut String, a: (f64, f64), b: (f64, f64), cost: Cost) {
        let mx = (a.0 + b.0) / 2.0;
        let my = (a.1 + b.1) / 2.0;
        svg.push_str(&format!(
            "  <text x=\"{mx:.1}\" y=\"{my:.1}\" text-anchor=\"middle\" \
             font-family=\"sans-serif\" font-size=\"11\" fill=\"#444\">{cost}</text>\n",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TopologyBuilder;
    use crate::mst::PrimSolver;
    use crate::render::SpringLayout;

    fn build_topology() -> Topology {
        let mut builder = TopologyBuilder::new();
        builder.link("gateway", "core-switch", 4);
        builder.link("core-switch", "edge-router", 2);
        builder.link("gateway", "edge-router", 7);
        Topology::from_builder(&builder)
    }

    #[test]
    fn test_overview_is_an_svg_document() {
        let topo = build_topology();
        let positions = SpringLayout::new().positions(&topo);

        let svg = SvgRenderer::new().render_overview(&topo, &positions);

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_overview_labels_every_node() {
        let topo = build_topology();
        let positions = SpringLayout::new().positions(&topo);

        let svg = SvgRenderer::new().render_overview(&topo, &positions);

        for label in topo.labels() {
            assert!(svg.contains(label), "missing label {label}");
        }
    }

    #[test]
    fn test_solution_highlights_tree_edges() {
        let topo = build_topology();
        let positions = SpringLayout::new().positions(&topo);
        let tree = PrimSolver::new().run(&topo, "gateway").unwrap();

        let svg = SvgRenderer::new().render_solution(&topo, &tree, &positions);

        let highlighted = svg.matches(TREE_EDGE_STROKE).count();
        assert_eq!(highlighted, tree.edge_count());
        assert!(svg.contains("total cost 6"));
    }

    #[test]
    fn test_unreached_nodes_stay_gray() {
        let mut builder = TopologyBuilder::new();
        builder.link("a", "b", 1);
        builder.link("c", "d", 1); // Separate component
        let topo = Topology::from_builder(&builder);
        let positions = SpringLayout::new().positions(&topo);
        let tree = PrimSolver::new().run(&topo, "a").unwrap();

        let svg = SvgRenderer::new().render_solution(&topo, &tree, &positions);

        assert_eq!(svg.matches(TREE_NODE_FILL).count(), 2);
        assert_eq!(svg.matches(BACKDROP_NODE_FILL).count(), 2);
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut builder = TopologyBuilder::new();
        builder.link("r&d-lab", "office", 1);
        let topo = Topology::from_builder(&builder);
        let positions = SpringLayout::new().positions(&topo);

        let svg = SvgRenderer::new().render_overview(&topo, &positions);

        assert!(svg.contains("r&amp;d-lab"));
        assert!(!svg.contains(">r&d-lab<"));
    }
}
