pub mod bfs;
pub mod domain;
pub mod frontier;
pub mod path;
pub mod stats;
