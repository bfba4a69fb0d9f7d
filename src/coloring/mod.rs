//! Coloring Engine.
//!
//! Vertex colorings built from independent sets. Colors are stored in the
//! graph's index type with `-1` meaning "not yet colored".
//!
//! - [`vertex_coloring_mis`]: peel one serial MIS per color.
//! - [`vertex_coloring_jones_plassmann`]: one Luby round per color with
//!   priority `degree + random`, followed by first-fit compaction.
//! - [`vertex_coloring_ldf`]: like Jones–Plassmann but the priority uses the
//!   degree in the still-uncolored subgraph, recomputed every iteration.
//! - [`vertex_coloring_first_fit`]: recolor one color class with the smallest
//!   color free among its neighbors.
//!
//! # References
//! - M. T. Jones, P. E. Plassmann, A parallel graph coloring heuristic,
//!   SIAM J. Sci. Comput. 14 (1993) 654–669.
//! - J. R. Allwright et al., A comparison of parallel graph coloring
//!   algorithms, SCCS-666.

use crate::core::traits::{Index, Priority};
use crate::error::GraphError;
use num_traits::NumCast;

pub mod first_fit;
pub mod jones_plassmann;
pub mod ldf;
pub mod mis;

pub use first_fit::vertex_coloring_first_fit;
pub use jones_plassmann::vertex_coloring_jones_plassmann;
pub use ldf::vertex_coloring_ldf;
pub use mis::vertex_coloring_mis;

/// Result of a coloring call. Colors lie in `[0, num_colors)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColoringStats {
    pub num_colors: usize,
    /// Outer iterations (independent sets extracted).
    pub iterations: usize,
}

impl ColoringStats {
    /// Largest color in use, `None` for an empty graph.
    pub fn max_color(&self) -> Option<usize> {
        self.num_colors.checked_sub(1)
    }

    pub(crate) fn from_colors<I: Index>(colors: &[I], iterations: usize) -> Self {
        let num_colors = colors
            .iter()
            .filter(|c| c.is_assigned())
            .map(|c| c.to_index() + 1)
            .max()
            .unwrap_or(0);
        Self { num_colors, iterations }
    }
}

/// Tag used for vertices excluded in the current round (`-2`).
pub(crate) fn excluded_tag<I: Index>() -> I {
    -(I::one() + I::one())
}

/// `count` as a priority value.
pub(crate) fn count_as<R: Priority>(count: usize) -> Result<R, GraphError> {
    <R as NumCast>::from(count).ok_or(GraphError::NumericOverflow(count))
}

/// `random + count`; integer priorities that overflow are an error.
pub(crate) fn offset_priority<R: Priority>(random: R, count: usize) -> Result<R, GraphError> {
    count_as::<R>(count)?.checked_sum(random).ok_or(GraphError::NumericOverflow(count))
}

/// Restore round-excluded vertices to uncolored.
pub(crate) fn reset_excluded<I: Index>(colors: &mut [I]) {
    let excluded = excluded_tag::<I>();
    for c in colors.iter_mut().filter(|c| **c == excluded) {
        *c = I::UNASSIGNED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_from_colors() {
        let s = ColoringStats::from_colors(&[0i32, 3, 1], 4);
        assert_eq!(s.num_colors, 4);
        assert_eq!(s.max_color(), Some(3));
        assert_eq!(ColoringStats::from_colors::<i32>(&[], 0).max_color(), None);
    }

    #[test]
    fn degree_conversion_overflows_small_types() {
        assert_eq!(count_as::<f64>(3), Ok(3.0));
        assert_eq!(count_as::<u8>(300), Err(GraphError::NumericOverflow(300)));
    }
}
