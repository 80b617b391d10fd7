use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::code::PLACEHOLDER;
use super::render;
use super::state::PathGraphState;
use super::types::Point;

type SharedState = Rc<RefCell<Option<PathGraphState>>>;

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Push the derived path and code into the panel signals when they change.
fn publish(state: &PathGraphState, path: RwSignal<Vec<(char, bool)>>, code: RwSignal<String>) {
	let labels: Vec<(char, bool)> = state
		.path_labels()
		.into_iter()
		.map(|(id, label)| (label, state.is_endpoint(id)))
		.collect();
	if path.with_untracked(|current| *current != labels) {
		path.set(labels);
	}
	let next = state.code();
	if code.with_untracked(|current| *current != next) {
		code.set(next);
	}
}

#[component]
pub fn PathGraphCanvas(
	#[prop(default = 10)] node_count: usize,
	#[prop(default = 500.0)] size: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());
	let path = RwSignal::new(Vec::<(char, bool)>::new());
	let code = RwSignal::new(String::new());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("no window available, path graph not mounted");
			return;
		};
		canvas.set_width(size as u32);
		canvas.set_height(size as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("canvas context is not 2d");
					return;
				}
			},
			_ => {
				error!("canvas has no 2d context");
				return;
			}
		};
		*state_init.borrow_mut() = Some(PathGraphState::new(node_count, size, size));

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(point) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if s.press_at(point) {
				ev.prevent_default();
			}
			publish(s, path, code);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(point) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(point);
			publish(s, path, code);
		}
	};

	let state_ck = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(point) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_ck.borrow_mut() {
			s.click_at(point);
			publish(s, path, code);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
	};

	let state_cl = state.clone();
	let on_clear = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_cl.borrow_mut() {
			s.clear();
			publish(s, path, code);
		}
	};

	view! {
		<div class="path-graph">
			<canvas
				node_ref=canvas_ref
				class="path-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:click=on_click
				style="display: block; cursor: pointer; user-select: none;"
			/>
			<div class="path-panel">
				<div class="path-panel-header">
					<h3>"Selected Path:"</h3>
					<button on:click=on_clear>"Clear"</button>
				</div>
				<div class="path-chips">
					{move || {
						let labels = path.get();
						if labels.is_empty() {
							view! { <p class="placeholder">"No nodes selected"</p> }.into_any()
						} else {
							labels
								.into_iter()
								.map(|(label, endpoint)| {
									let class = if endpoint { "path-chip endpoint" } else { "path-chip" };
									view! { <span class=class>{label.to_string()}</span> }
								})
								.collect_view()
								.into_any()
						}
					}}
				</div>
				<h3>"Unique String for Selection:"</h3>
				<p class="path-code">
					{move || {
						let value = code.get();
						if value.is_empty() { PLACEHOLDER.to_string() } else { value }
					}}
				</p>
			</div>
		</div>
	}
}
