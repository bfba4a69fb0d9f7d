//! amg-graph: graph kernels for algebraic multigrid setup
//!
//! This crate provides the graph algorithms an aggregation-based AMG setup phase is built on:
//! maximal independent sets (serial, Luby-style parallel and distance-k), vertex colorings,
//! Bellman-Ford clustering with Lloyd re-centering, and breadth-first/component traversals.
//! All kernels operate on a borrowed CSR view and write into caller-owned buffers; the
//! round-synchronous kernels run on a pluggable executor (rayon by default).

pub mod parallel;

pub mod cluster;
pub mod coloring;
pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod graph;
pub mod independent;
pub mod traversal;
pub mod utils;

// Re-exports for convenience
pub use cluster::*;
pub use coloring::*;
pub use config::*;
pub use context::*;
pub use crate::core::*;
pub use error::*;
pub use graph::*;
pub use independent::*;
pub use parallel::{RoundExecutor, SerialExecutor, UniverseExecutor};
pub use traversal::*;
pub use utils::{RoundLimit, RoundStats};
