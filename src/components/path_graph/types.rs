pub type NodeId = usize;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	pub label: char,
}

impl Node {
	pub fn pos(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub source: NodeId,
	pub target: NodeId,
	pub id: String,
}

impl Edge {
	pub fn new(source: NodeId, target: NodeId) -> Self {
		Self {
			source,
			target,
			id: format!("{}-{}", source, target),
		}
	}

	/// Whether this edge joins `a` and `b`, in either direction.
	pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
		(self.source == a && self.target == b) || (self.source == b && self.target == a)
	}

	pub fn touches(&self, id: NodeId) -> bool {
		self.source == id || self.target == id
	}
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

impl Graph {
	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn edge(&self, id: &str) -> Option<&Edge> {
		self.edges.iter().find(|e| e.id == id)
	}

	pub fn contains(&self, id: NodeId) -> bool {
		self.node(id).is_some()
	}

	pub fn are_connected(&self, a: NodeId, b: NodeId) -> bool {
		self.edges.iter().any(|e| e.joins(a, b))
	}
}
