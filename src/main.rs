use leptos::prelude::*;
use path_code_canvas::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
