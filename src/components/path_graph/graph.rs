use std::f64::consts::PI;

use log::{info, warn};

use super::types::{Edge, Graph, Node, Point};

/// Labels run `A..=Z`, so larger graphs are capped.
pub const MAX_NODES: usize = 26;

#[derive(Clone, Debug, PartialEq)]
pub struct CircleLayout {
	pub node_count: usize,
	pub center: Point,
	pub radius: f64,
}

impl Default for CircleLayout {
	fn default() -> Self {
		Self::for_canvas(10, 500.0)
	}
}

impl CircleLayout {
	/// Centered in a square canvas of `size`, leaving room for node rings at the rim.
	pub fn for_canvas(node_count: usize, size: f64) -> Self {
		Self {
			node_count,
			center: Point::new(size / 2.0, size / 2.0),
			radius: size * 0.3,
		}
	}
}

/// Lay out nodes evenly on the circle and connect every pair.
pub fn generate(layout: &CircleLayout) -> Graph {
	let n = if layout.node_count > MAX_NODES {
		warn!(
			"node count {} exceeds label range, capping at {}",
			layout.node_count, MAX_NODES
		);
		MAX_NODES
	} else {
		layout.node_count
	};

	let nodes: Vec<Node> = (0..n)
		.map(|i| {
			let angle = (i as f64) * 2.0 * PI / n as f64;
			Node {
				id: i,
				x: layout.center.x + layout.radius * angle.cos(),
				y: layout.center.y + layout.radius * angle.sin(),
				label: (b'A' + i as u8) as char,
			}
		})
		.collect();

	let edges: Vec<Edge> = (0..n)
		.flat_map(|i| (i + 1..n).map(move |j| Edge::new(i, j)))
		.collect();

	info!("generated graph: {} nodes, {} edges", nodes.len(), edges.len());
	Graph { nodes, edges }
}
