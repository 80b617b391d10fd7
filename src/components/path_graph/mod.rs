mod code;
mod component;
mod geometry;
mod graph;
mod render;
mod selection;
mod state;
mod types;

pub use component::PathGraphCanvas;
