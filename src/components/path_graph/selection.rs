use std::collections::HashSet;

use log::debug;

use super::types::{Graph, NodeId};

/// The traced path plus the drag flag.
///
/// Consecutive path entries are always joined by a graph edge and no node
/// appears twice: revisiting a node backtracks to it instead of looping.
#[derive(Clone, Debug, Default)]
pub struct Selection {
	path: Vec<NodeId>,
	pub dragging: bool,
}

impl Selection {
	pub fn path(&self) -> &[NodeId] {
		&self.path
	}

	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	pub fn last(&self) -> Option<NodeId> {
		self.path.last().copied()
	}

	pub fn contains(&self, id: NodeId) -> bool {
		self.path.contains(&id)
	}

	fn position(&self, id: NodeId) -> Option<usize> {
		self.path.iter().position(|&p| p == id)
	}

	fn truncate_to(&mut self, index: usize) {
		self.path.truncate(index + 1);
		debug!("backtracked to {:?}", self.path);
	}

	/// Nodes adjacent to the endpoint, minus the node just left.
	pub fn valid_next(&self, graph: &Graph) -> HashSet<NodeId> {
		let Some(&last) = self.path.last() else {
			return HashSet::new();
		};
		let previous = self.path.len().checked_sub(2).map(|i| self.path[i]);
		graph
			.nodes
			.iter()
			.map(|n| n.id)
			.filter(|&id| id != last && Some(id) != previous && graph.are_connected(last, id))
			.collect()
	}

	/// Whether the pair `a`-`b` is walked somewhere along the path.
	pub fn walks(&self, a: NodeId, b: NodeId) -> bool {
		self.path
			.windows(2)
			.any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
	}

	pub fn press_node(&mut self, graph: &Graph, id: NodeId) {
		if !graph.contains(id) {
			return;
		}
		match self.position(id) {
			Some(_) if self.path.len() == 1 => {
				self.path.clear();
				debug!("deselected {}", id);
			}
			Some(index) if index + 1 < self.path.len() => self.truncate_to(index),
			// Pressing the current endpoint of a longer path keeps it.
			Some(_) => {}
			None => {
				self.path = vec![id];
				debug!("started path at {}", id);
			}
		}
		self.dragging = true;
	}

	pub fn click_edge(&mut self, graph: &Graph, edge_id: &str) {
		let Some(edge) = graph.edge(edge_id) else {
			return;
		};
		let (a, b) = (edge.source, edge.target);
		let next = match self.last() {
			Some(last) if last == a => b,
			Some(last) if last == b => a,
			_ => {
				self.path = vec![a, b];
				debug!("selected edge {}", edge.id);
				return;
			}
		};
		match self.position(next) {
			Some(index) => self.truncate_to(index),
			None => {
				self.path.push(next);
				debug!("extended path via edge {} to {:?}", edge.id, self.path);
			}
		}
	}

	/// Extend or backtrack toward `id` while dragging.
	pub fn drag_to(&mut self, graph: &Graph, id: NodeId) {
		if !self.dragging || self.path.is_empty() {
			return;
		}
		if let Some(index) = self.position(id) {
			if index + 1 < self.path.len() {
				self.truncate_to(index);
			}
		} else if self.valid_next(graph).contains(&id) {
			self.path.push(id);
			debug!("dragged path to {:?}", self.path);
		}
	}

	pub fn release(&mut self) {
		self.dragging = false;
	}

	pub fn clear(&mut self) {
		self.path.clear();
		debug!("selection cleared");
	}
}
