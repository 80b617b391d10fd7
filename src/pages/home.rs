use leptos::prelude::*;

use crate::components::path_graph::PathGraphCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="network">
				<h2>"Interactive Network Selection"</h2>
				<p class="subtitle">"Click a node and drag along connected nodes to create a path"</p>
				<PathGraphCanvas node_count=10 size=500.0 />
				<div class="tips">
					<p>"Tips:"</p>
					<ul>
						<li>"Click on any node to start a path"</li>
						<li>"Drag through highlighted edges and nodes to extend your path"</li>
						<li>"Click directly on edges to select both connected nodes"</li>
						<li>"Move back to a previous node to backtrack along your path"</li>
						<li>"Each unique selection creates a different code"</li>
					</ul>
				</div>
			</div>
		</ErrorBoundary>
	}
}
