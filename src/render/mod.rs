//! Rendering collaborator: layout and SVG output
//!
//! Consumes the public [`Topology`](crate::graph::Topology) and
//! [`SpanningTree`](crate::mst::SpanningTree) surfaces to draw the problem
//! and its solution. The solver has no dependency on anything in here.

pub mod layout;
pub mod svg;

pub use layout::SpringLayout;
pub use svg::SvgRenderer;
