//! Context types for choosing and driving the graph algorithms.
//!
//! Contexts pair an algorithm kind with its limits and hide buffer setup:
//! - [`mis_context`]: `MisContext` for independent set selection.
//! - [`coloring_context`]: `ColoringContext` for vertex coloring.
//! - [`lloyd_context`]: `LloydContext` for iterating Lloyd clustering to a fixed set of centers.
//!
//! # Example
//! ```rust
//! use amg_graph::context::{ColoringContext, ColoringKind};
//! use amg_graph::graph::CsrAdjacency;
//! use amg_graph::parallel::SerialExecutor;
//!
//! let adj = CsrAdjacency::<i32>::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
//! let ctx = ColoringContext::new(ColoringKind::Mis);
//! let (colors, stats) = ctx.color(&SerialExecutor, &adj.view(), &[0.0f64; 3]).unwrap();
//! assert_eq!(stats.num_colors, 3);
//! assert_eq!(colors, vec![0, 1, 2]);
//! ```

pub mod coloring_context;
pub mod lloyd_context;
pub mod mis_context;

pub use coloring_context::{ColoringContext, ColoringKind};
pub use lloyd_context::{LloydContext, LloydKind};
pub use mis_context::{MisContext, MisKind};
