//! Seeded force-directed layout
//!
//! A small Fruchterman-Reingold implementation over the unit square. The
//! same seed always produces the same positions, so the overview frame and
//! the solution frame of one topology line up exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Topology;

/// Force-directed layout configuration
#[derive(Debug, Clone)]
pub struct SpringLayout {
    /// Number of relaxation iterations
    pub iterations: usize,
    /// Seed for the initial node placement
    pub seed: u64,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            iterations: 60,
            seed: 10,
        }
    }
}

impl SpringLayout {
    /// Create a layout with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of relaxation iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the placement seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Compute unit-square positions for every node, indexed by node id
    pub fn positions(&self, topology: &Topology) -> Vec<(f64, f64)> {
        let n = topology.node_count();
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return vec![(0.5, 0.5)];
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut pos: Vec<(f64, f64)> =
            (0..n).map(|_| (rng.gen::<f64>(), rng.gen::<f64>())).collect();

        // Ideal pairwise distance for a unit-area canvas.
        let k = (1.0 / n as f64).sqrt();
        let mut temperature = 0.1;
        let cooling = temperature / (self.iterations as f64 + 1.0);

        for _ in 0..self.iterations {
            let mut disp = vec![(0.0_f64, 0.0_f64); n];

            // Repulsion between every pair
            for i in 0..n {
                for j in (i + 1)..n {
                    let dx = pos[i].0 - pos[j].0;
                    let dy = pos[i].1 - pos[j].1;
                    let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                    let force = k * k / dist;
                    let (ux, uy) = (dx / dist, dy / dist);
                    disp[i].0 += ux * force;
                    disp[i].1 += uy * force;
                    disp[j].0 -= ux * force;
                    disp[j].1 -= uy * force;
                }
            }

            // Attraction along links
            for (a, b, _) in topology.links() {
                let (a, b) = (a as usize, b as usize);
                let dx = pos[a].0 - pos[b].0;
                let dy = pos[a].1 - pos[b].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = dist * dist / k;
                let (ux, uy) = (dx / dist, dy / dist);
                disp[a].0 -= ux * force;
                disp[a].1 -= uy * force;
                disp[b].0 += ux * force;
                disp[b].1 += uy * force;
            }

            // Displace, capped by the current temperature
            for (p, &(dx, dy)) in pos.iter_mut().zip(disp.iter()) {
                let len = (dx * dx + dy * dy).sqrt().max(1e-9);
                let step = len.min(temperature);
                p.0 += dx / len * step;
                p.1 += dy / len * step;
            }

            temperature -= cooling;
        }

        normalize(&mut pos);
        pos
    }
}

/// Rescale positions so their bounding box fills the unit square.
fn normalize(pos: &mut [(f64, f64)]) {
    let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
    let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
    for &(x, y) in pos.iter() {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    let span_x = max_x - min_x;
    let span_y = max_y - min_y;
    for p in pos.iter_mut() {
        p.0 = if span_x > 1e-9 {
            (p.0 - min_x) / span_x
        } else {
            0.5
        };
        p.1 = if span_y > 1e-9 {
            (p.1 - min_y) / span_y
        } else {
            0.5
        };
    }
}
