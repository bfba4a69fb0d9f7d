//! Independent Set Engine.
//!
//! Maximal independent sets over the vertices marked `active`, either with a
//! single greedy sweep in index order ([`maximal_independent_set_serial`]) or
//! with Luby-style synchronous rounds driven by caller-supplied priorities
//! ([`maximal_independent_set_parallel`]). Distance-k sets
//! ([`maximal_independent_set_k_parallel`]) flood local maxima `k` hops with
//! [`propagate_max`] before each decision.
//!
//! # References
//! - M. Luby, A simple parallel algorithm for the maximal independent set
//!   problem, SIAM J. Comput. 15 (1986).
//! - N. Bell, S. Dalton, L. Olson, Exposing fine-grained parallelism in
//!   algebraic multigrid methods, SIAM J. Sci. Comput. 34 (2012).

use crate::core::traits::{Label, Priority};
use crate::error::GraphError;

pub mod distance_k;
pub mod luby;
pub mod propagate;
pub mod serial;

pub use distance_k::maximal_independent_set_k_parallel;
pub use luby::maximal_independent_set_parallel;
pub use propagate::propagate_max;
pub use serial::maximal_independent_set_serial;

/// The three state values an MIS call distinguishes.
///
/// Entries of the state array equal to none of them are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTags<S> {
    /// Vertices still competing for the set (input).
    pub active: S,
    /// Vertices placed in the independent set (output).
    pub in_set: S,
    /// Vertices excluded because a neighbor is in the set (output).
    pub excluded: S,
}

impl<S: Label> StateTags<S> {
    pub fn new(active: S, in_set: S, excluded: S) -> Self {
        Self { active, in_set, excluded }
    }

    pub(crate) fn validate(&self) -> Result<(), GraphError> {
        if self.active == self.in_set || self.active == self.excluded || self.in_set == self.excluded {
            Err(GraphError::InvalidStateTags)
        } else {
            Ok(())
        }
    }
}

impl Default for StateTags<i32> {
    /// `active = -1`, `in_set = 1`, `excluded = 0`.
    fn default() -> Self {
        Self { active: -1, in_set: 1, excluded: 0 }
    }
}

/// Outcome of a round-based independent set computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MisStats {
    /// Vertices placed in the set by this call.
    pub selected: usize,
    /// Rounds executed.
    pub rounds: usize,
    /// `false` if the round limit stopped the call with vertices still active.
    pub converged: bool,
}

/// Length and NaN check for a priority array.
pub(crate) fn check_priorities<R: Priority>(priority: &[R], n: usize) -> Result<(), GraphError> {
    GraphError::check_len("priority", n, priority.len())?;
    match priority.iter().position(|p| !p.is_ordered()) {
        Some(vertex) => Err(GraphError::InvalidPriority { vertex }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_must_be_distinct() {
        assert!(StateTags::default().validate().is_ok());
        assert_eq!(StateTags::new(0u8, 0, 1).validate(), Err(GraphError::InvalidStateTags));
    }

    #[test]
    fn nan_priority_rejected() {
        let p = [0.5, f64::NAN, 0.1];
        assert_eq!(check_priorities(&p, 3), Err(GraphError::InvalidPriority { vertex: 1 }));
        assert!(matches!(check_priorities(&p, 4), Err(GraphError::DimensionMismatch { .. })));
    }
}
