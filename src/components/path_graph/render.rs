use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{EdgeRole, NODE_RADIUS, NodeRole, PathGraphState};

pub fn render(state: &PathGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_drag_line(state, ctx);
	draw_nodes(state, ctx);
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2, y2);
	ctx.stroke();
}

fn draw_edges(state: &PathGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_cap("round");
	for edge in &state.graph.edges {
		let (Some(a), Some(b)) = (state.graph.node(edge.source), state.graph.node(edge.target))
		else {
			continue;
		};
		let role = state.edge_role(edge);

		if role == EdgeRole::Highlighted {
			ctx.set_stroke_style_str("rgba(74, 222, 128, 0.4)");
			ctx.set_line_width(8.0);
			line(ctx, a.x, a.y, b.x, b.y);
		}

		let (color, width) = match role {
			EdgeRole::Selected => ("#2563eb", 4.0),
			EdgeRole::Hovered => ("#93c5fd", 3.0),
			EdgeRole::Highlighted => ("#4ade80", 2.0),
			EdgeRole::Default => ("#d1d5db", 1.0),
		};
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(width);
		line(ctx, a.x, a.y, b.x, b.y);
	}
}

fn draw_drag_line(state: &PathGraphState, ctx: &CanvasRenderingContext2d) {
	let Some((from, to)) = state.drag_line() else {
		return;
	};
	let (dash, gap) = (5.0, 5.0);
	ctx.set_stroke_style_str("rgba(59, 130, 246, 0.6)");
	ctx.set_line_width(3.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(gap),
	));
	ctx.set_line_dash_offset(-(state.flow_time * 20.0) % (dash + gap));
	line(ctx, from.x, from.y, to.x, to.y);
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &PathGraphState, ctx: &CanvasRenderingContext2d) {
	for node in &state.graph.nodes {
		let (x, y) = (node.x, node.y);
		let role = state.node_role(node.id);

		if role == NodeRole::ValidNext {
			ctx.begin_path();
			let _ = ctx.arc(x, y, NODE_RADIUS + 6.0, 0.0, 2.0 * PI);
			ctx.set_fill_style_str("rgba(74, 222, 128, 0.3)");
			ctx.fill();

			ctx.begin_path();
			let _ = ctx.arc(x, y, NODE_RADIUS + 2.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("#4ade80");
			ctx.set_line_width(2.0);
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(3.0),
				&JsValue::from_f64(3.0),
			));
			ctx.stroke();
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}

		let (fill, stroke) = match role {
			NodeRole::Selected if state.is_endpoint(node.id) => ("#1d4ed8", "#1e40af"),
			NodeRole::Selected => ("#3b82f6", "#2563eb"),
			NodeRole::Hovered => ("#dbeafe", "#93c5fd"),
			NodeRole::ValidNext => ("#ecfdf5", "#4ade80"),
			NodeRole::Default => ("#f3f4f6", "#d1d5db"),
		};
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(fill);
		ctx.fill();
		ctx.set_stroke_style_str(stroke);
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str(if role == NodeRole::Selected { "white" } else { "black" });
		ctx.set_font("bold 16px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.label.to_string(), x, y);
	}
}
