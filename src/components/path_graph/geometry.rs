use super::types::{Edge, Node, Point};

/// Pointer-to-node distance for hover and drag-extend.
pub const NODE_HOVER_RADIUS: f64 = 40.0;
/// Pointer-to-edge distance for hover.
pub const EDGE_HOVER_RADIUS: f64 = 20.0;
/// A press only lands on a node inside its drawn ring.
pub const NODE_PRESS_RADIUS: f64 = 22.0;
pub const EDGE_CLICK_RADIUS: f64 = 8.0;

pub fn distance(p: Point, q: Point) -> f64 {
	let (dx, dy) = (p.x - q.x, p.y - q.y);
	(dx * dx + dy * dy).sqrt()
}

/// Distance from `p` to the closest point of segment `a`-`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
	let (abx, aby) = (b.x - a.x, b.y - a.y);
	let len_sq = abx * abx + aby * aby;
	if len_sq == 0.0 {
		return distance(p, a);
	}
	let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
	distance(p, Point::new(a.x + t * abx, a.y + t * aby))
}

/// Closest node strictly within `max_distance`; the first node wins ties.
pub fn nearest_node(point: Point, nodes: &[Node], max_distance: f64) -> Option<&Node> {
	let mut found = None;
	let mut best = max_distance;
	for node in nodes {
		let d = distance(point, node.pos());
		if d < best {
			best = d;
			found = Some(node);
		}
	}
	found
}

/// Closest edge strictly within `max_distance`. Edges with unknown endpoints are skipped.
pub fn nearest_edge<'a>(
	point: Point,
	edges: &'a [Edge],
	nodes: &[Node],
	max_distance: f64,
) -> Option<&'a Edge> {
	let pos = |id| nodes.iter().find(|n| n.id == id).map(Node::pos);
	let mut found = None;
	let mut best = max_distance;
	for edge in edges {
		let (Some(a), Some(b)) = (pos(edge.source), pos(edge.target)) else {
			continue;
		};
		let d = distance_to_segment(point, a, b);
		if d < best {
			best = d;
			found = Some(edge);
		}
	}
	found
}
