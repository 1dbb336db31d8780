mod regular_dijkstra;
mod state;
mod traced_dijkstra;

pub(crate) use regular_dijkstra::dijkstra_path_weights;
pub(crate) use traced_dijkstra::dijkstra_path;
