pub mod path_graph;
