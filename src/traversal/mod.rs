//! Hop-count traversals: breadth-first levels, pseudo-peripheral vertices and
//! connected components. None of these read edge weights.

pub mod bfs;
pub mod components;

pub use bfs::{breadth_first_search, pseudo_peripheral_node};
pub use components::connected_components;
