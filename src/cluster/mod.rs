//! Graph clustering for aggregation.
//!
//! Clusters are grown from a set of center vertices by multi-source
//! Bellman-Ford over non-negative edge weights: every vertex ends up in the
//! cluster of its nearest center. Lloyd passes then move each center toward
//! the middle of its cluster, either heuristically (farthest from the
//! cluster boundary) or exactly (minimum eccentricity, via Floyd–Warshall on
//! the cluster's own subgraph).
//!
//! Distances use [`Weight::infinity`](crate::core::traits::Weight::infinity)
//! for unreached vertices and cluster labels use
//! [`Index::UNASSIGNED`](crate::core::traits::Index::UNASSIGNED).
//!
//! See N. Bell, *Algebraic Multigrid for Discrete Differential Forms*, PhD
//! thesis, UIUC 2008, for the balanced variant and the exact center step.

pub mod bellman_ford;
pub mod center;
pub mod incidence;
pub mod lloyd;

pub use bellman_ford::{bellman_ford, bellman_ford_balanced, bellman_ford_fixed_point};
pub use center::cluster_center;
pub use incidence::{ClusterIncidence, cluster_node_incidence};
pub use lloyd::{lloyd_cluster, lloyd_cluster_exact};
