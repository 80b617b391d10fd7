use log::info;

use super::code;
use super::geometry::{
	EDGE_CLICK_RADIUS, EDGE_HOVER_RADIUS, NODE_HOVER_RADIUS, NODE_PRESS_RADIUS, nearest_edge,
	nearest_node,
};
use super::graph::{self, CircleLayout};
use super::selection::Selection;
use super::types::{Edge, Graph, NodeId, Point};

pub const NODE_RADIUS: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
	Selected,
	Hovered,
	ValidNext,
	Default,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeRole {
	Selected,
	Hovered,
	/// Leads from the path endpoint to a valid next node.
	Highlighted,
	Default,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<NodeId>,
	pub edge: Option<String>,
}

pub struct PathGraphState {
	pub graph: Graph,
	pub selection: Selection,
	pub hover: HoverState,
	pub pointer: Point,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	/// Whether the last press landed on a node; the click that follows it is not an edge click.
	press_hit_node: bool,
}

impl PathGraphState {
	pub fn new(node_count: usize, width: f64, height: f64) -> Self {
		let layout = CircleLayout::for_canvas(node_count, width.min(height));
		info!("mounting path graph ({}x{})", width, height);
		Self {
			graph: graph::generate(&layout),
			selection: Selection::default(),
			hover: HoverState::default(),
			pointer: Point::default(),
			width,
			height,
			flow_time: 0.0,
			press_hit_node: false,
		}
	}

	/// Press at canvas coordinates. Returns whether a node was under the pointer.
	pub fn press_at(&mut self, point: Point) -> bool {
		self.pointer = point;
		let hit = nearest_node(point, &self.graph.nodes, NODE_PRESS_RADIUS).map(|n| n.id);
		if let Some(id) = hit {
			self.press_node(id);
		}
		self.press_hit_node = hit.is_some();
		self.press_hit_node
	}

	pub fn press_node(&mut self, id: NodeId) {
		self.selection.press_node(&self.graph, id);
	}

	/// Click at canvas coordinates; only edges not covered by a node react.
	pub fn click_at(&mut self, point: Point) {
		if std::mem::take(&mut self.press_hit_node)
			|| nearest_node(point, &self.graph.nodes, NODE_PRESS_RADIUS).is_some()
		{
			return;
		}
		let edge_id = nearest_edge(point, &self.graph.edges, &self.graph.nodes, EDGE_CLICK_RADIUS)
			.map(|e| e.id.clone());
		if let Some(edge_id) = edge_id {
			self.click_edge(&edge_id);
		}
	}

	pub fn click_edge(&mut self, edge_id: &str) {
		self.selection.click_edge(&self.graph, edge_id);
	}

	pub fn pointer_move(&mut self, point: Point) {
		self.pointer = point;
		let node = nearest_node(point, &self.graph.nodes, NODE_HOVER_RADIUS).map(|n| n.id);
		self.hover.node = node;
		self.hover.edge = nearest_edge(point, &self.graph.edges, &self.graph.nodes, EDGE_HOVER_RADIUS)
			.map(|e| e.id.clone());

		if let Some(id) = node {
			self.selection.drag_to(&self.graph, id);
		}
	}

	pub fn pointer_up(&mut self) {
		self.selection.release();
	}

	pub fn pointer_leave(&mut self) {
		self.selection.release();
		self.hover = HoverState::default();
	}

	pub fn clear(&mut self) {
		self.selection.clear();
	}

	pub fn node_role(&self, id: NodeId) -> NodeRole {
		if self.selection.contains(id) {
			NodeRole::Selected
		} else if self.hover.node == Some(id) {
			NodeRole::Hovered
		} else if self.selection.is_empty() || self.selection.valid_next(&self.graph).contains(&id)
		{
			// Any node may start an empty path.
			NodeRole::ValidNext
		} else {
			NodeRole::Default
		}
	}

	pub fn edge_role(&self, edge: &Edge) -> EdgeRole {
		if self.selection.walks(edge.source, edge.target) {
			return EdgeRole::Selected;
		}
		if self.hover.edge.as_deref() == Some(edge.id.as_str()) {
			return EdgeRole::Hovered;
		}
		match self.selection.last() {
			Some(last) if edge.touches(last) => {
				let other = if edge.source == last { edge.target } else { edge.source };
				if self.selection.valid_next(&self.graph).contains(&other) {
					EdgeRole::Highlighted
				} else {
					EdgeRole::Default
				}
			}
			_ => EdgeRole::Default,
		}
	}

	pub fn is_endpoint(&self, id: NodeId) -> bool {
		self.selection.last() == Some(id)
	}

	/// Line from the path endpoint to the pointer while dragging.
	pub fn drag_line(&self) -> Option<(Point, Point)> {
		if !self.selection.dragging {
			return None;
		}
		let last = self.selection.last()?;
		self.graph.node(last).map(|n| (n.pos(), self.pointer))
	}

	pub fn path_labels(&self) -> Vec<(NodeId, char)> {
		self.selection
			.path()
			.iter()
			.filter_map(|&id| self.graph.node(id).map(|n| (id, n.label)))
			.collect()
	}

	pub fn code(&self) -> String {
		code::code(self.selection.path(), &self.graph.nodes)
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state() -> PathGraphState {
		PathGraphState::new(10, 500.0, 500.0)
	}

	fn pos(state: &PathGraphState, id: NodeId) -> Point {
		state.graph.nodes[id].pos()
	}

	fn ids(state: &PathGraphState) -> Vec<NodeId> {
		state.selection.path().to_vec()
	}

	#[test]
	fn press_and_drag_traces_path() {
		let mut s = state();
		assert!(s.press_at(pos(&s, 0)));
		s.pointer_move(pos(&s, 2));
		s.pointer_move(pos(&s, 5));
		s.pointer_up();
		assert_eq!(ids(&s), vec![0, 2, 5]);
		let labels: String = s.path_labels().iter().map(|(_, l)| l).collect();
		assert_eq!(labels, "ACF");
		assert!(s.is_endpoint(5));
	}

	#[test]
	fn a_then_c_yields_fixed_code() {
		let mut s = state();
		s.press_node(0);
		s.pointer_move(pos(&s, 2));
		assert_eq!(ids(&s), vec![0, 2]);
		assert_eq!(s.code(), "emerald-arrow-infinity");
	}

	#[test]
	fn moving_back_backtracks() {
		let mut s = state();
		s.press_node(0);
		for id in [1, 2, 3] {
			s.pointer_move(pos(&s, id));
		}
		s.pointer_move(pos(&s, 1));
		assert_eq!(ids(&s), vec![0, 1]);
	}

	#[test]
	fn moves_without_press_do_not_select() {
		let mut s = state();
		s.pointer_move(pos(&s, 3));
		assert_eq!(s.hover.node, Some(3));
		assert!(s.selection.is_empty());
		assert_eq!(s.code(), "");
	}

	#[test]
	fn far_pointer_clears_hover_and_keeps_path() {
		let mut s = state();
		s.press_node(0);
		s.pointer_move(pos(&s, 4));
		s.pointer_move(Point::new(1000.0, 1000.0));
		assert_eq!(s.hover.node, None);
		assert_eq!(s.hover.edge, None);
		assert_eq!(ids(&s), vec![0, 4]);
	}

	#[test]
	fn press_on_empty_canvas_misses() {
		let mut s = state();
		assert!(!s.press_at(Point::new(5.0, 5.0)));
		assert!(!s.selection.dragging);
		assert!(s.selection.is_empty());
	}

	#[test]
	fn click_on_edge_midpoint_selects_edge() {
		let mut s = state();
		let (a, b) = (pos(&s, 0), pos(&s, 1));
		s.click_at(Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0));
		assert_eq!(ids(&s), vec![0, 1]);
	}

	#[test]
	fn click_ending_a_drag_does_not_pick_edge() {
		let mut s = state();
		let (a, b) = (pos(&s, 0), pos(&s, 1));
		let midpoint = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
		assert!(s.press_at(pos(&s, 3)));
		s.pointer_move(pos(&s, 4));
		s.pointer_move(midpoint);
		s.pointer_up();
		s.click_at(midpoint);
		assert_eq!(ids(&s), vec![3, 4]);
	}

	#[test]
	fn click_on_node_does_not_pick_edge() {
		let mut s = state();
		s.click_at(pos(&s, 3));
		assert!(s.selection.is_empty());
	}

	#[test]
	fn leave_releases_and_clears_hover() {
		let mut s = state();
		s.press_node(0);
		s.pointer_move(pos(&s, 1));
		s.pointer_leave();
		assert!(!s.selection.dragging);
		assert_eq!(s.hover.node, None);
		assert_eq!(ids(&s), vec![0, 1]);
		assert!(s.drag_line().is_none());
	}

	#[test]
	fn node_roles() {
		let mut s = state();
		assert!(s.graph.nodes.iter().all(|n| s.node_role(n.id) == NodeRole::ValidNext));

		s.press_node(0);
		s.pointer_move(pos(&s, 1));
		s.pointer_up();
		s.hover.node = Some(5);
		assert_eq!(s.node_role(0), NodeRole::Selected);
		assert_eq!(s.node_role(1), NodeRole::Selected);
		assert_eq!(s.node_role(5), NodeRole::Hovered);
		assert_eq!(s.node_role(6), NodeRole::ValidNext);
	}

	#[test]
	fn edge_roles() {
		let mut s = state();
		s.press_node(0);
		s.pointer_move(pos(&s, 1));
		s.pointer_move(pos(&s, 2));
		s.hover.edge = Some("4-7".into());

		let role = |s: &PathGraphState, id: &str| {
			let edge = s.graph.edge(id).cloned();
			edge.map(|e| s.edge_role(&e))
		};
		assert_eq!(role(&s, "0-1"), Some(EdgeRole::Selected));
		assert_eq!(role(&s, "1-2"), Some(EdgeRole::Selected));
		assert_eq!(role(&s, "4-7"), Some(EdgeRole::Hovered));
		assert_eq!(role(&s, "2-6"), Some(EdgeRole::Highlighted));
		assert_eq!(role(&s, "0-2"), Some(EdgeRole::Highlighted));
		assert_eq!(role(&s, "3-5"), Some(EdgeRole::Default));
	}

	#[test]
	fn drag_line_follows_pointer() {
		let mut s = state();
		assert!(s.drag_line().is_none());
		s.press_node(0);
		let pointer = Point::new(260.0, 240.0);
		s.pointer_move(pointer);
		assert_eq!(s.drag_line(), Some((pos(&s, 0), pointer)));
		s.pointer_up();
		assert!(s.drag_line().is_none());
	}

	#[test]
	fn clear_resets_code() {
		let mut s = state();
		s.click_edge("2-7");
		assert!(!s.code().is_empty());
		s.clear();
		assert_eq!(s.code(), "");
	}
}
