//! Factory for independent set selection.
//!
//! `MisContext` picks one of the independent set solvers by kind and returns
//! the selection as a membership mask, hiding the state-tag bookkeeping of
//! the underlying kernels.
//!
//! # Example
//! ```rust
//! use amg_graph::context::{MisContext, MisKind};
//! use amg_graph::graph::CsrAdjacency;
//! use amg_graph::parallel::SerialExecutor;
//!
//! let adj = CsrAdjacency::<i32>::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
//! let ctx = MisContext::new(MisKind::Parallel);
//! let (mask, stats) = ctx.select(&SerialExecutor, &adj.view(), &[0.4, 0.1, 0.3, 0.2]).unwrap();
//! assert_eq!(mask, vec![true, false, true, false]);
//! assert!(stats.converged);
//! ```

use crate::config::IterationOptions;
use crate::core::traits::{Index, Priority, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::independent::{
    MisStats, StateTags, maximal_independent_set_k_parallel, maximal_independent_set_parallel,
    maximal_independent_set_serial,
};
use crate::parallel::RoundExecutor;

/// Available independent set solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MisKind {
    /// Greedy sweep in vertex order (priorities ignored)
    Serial,
    /// Luby-style rounds with random priorities
    Parallel,
    /// Selected vertices at least `k + 1` hops apart
    DistanceK(usize),
}

/// Independent set solver selection plus round limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MisContext {
    pub kind: MisKind,
    pub options: IterationOptions,
}

impl MisContext {
    pub fn new(kind: MisKind) -> Self {
        Self { kind, options: IterationOptions::default() }
    }

    pub fn with_options(mut self, options: IterationOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the selected solver over all vertices.
    ///
    /// Returns `mask[i] == true` for members of the set. If a round limit
    /// stops a parallel solver early the mask is independent but may not be
    /// maximal, and `stats.converged` is `false`.
    pub fn select<E, I, T, R>(
        &self,
        exec: &E,
        graph: &CsrGraph<'_, I, T>,
        priority: &[R],
    ) -> Result<(Vec<bool>, MisStats), GraphError>
    where
        E: RoundExecutor,
        I: Index,
        T: Weight,
        R: Priority,
    {
        let n = graph.num_vertices();
        let tags = StateTags::default();
        match self.kind {
            MisKind::Serial => {
                let mut state = vec![tags.active; n];
                let selected = maximal_independent_set_serial(graph, tags, &mut state)?;
                let mask = state.iter().map(|&s| s == tags.in_set).collect();
                Ok((mask, MisStats { selected, rounds: 1, converged: true }))
            }
            MisKind::Parallel => {
                let mut state = vec![tags.active; n];
                let stats =
                    maximal_independent_set_parallel(exec, graph, tags, &mut state, priority, self.options.max_rounds)?;
                let mask = state.iter().map(|&s| s == tags.in_set).collect();
                Ok((mask, stats))
            }
            MisKind::DistanceK(k) => {
                let mut mask = vec![false; n];
                let stats =
                    maximal_independent_set_k_parallel(exec, graph, k, &mut mask, priority, self.options.max_rounds)?;
                Ok((mask, stats))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CsrAdjacency;
    use crate::parallel::SerialExecutor;
    use crate::utils::{is_maximal_independent_set, min_separation_ok};

    #[test]
    fn every_kind_gives_an_independent_set() {
        let edges: Vec<(usize, usize)> = (0..9).map(|i| (i, i + 1)).collect();
        let adj = CsrAdjacency::<i32>::from_edges(10, &edges).unwrap();
        let priority: Vec<f64> = (0..10).map(|i| ((i * 7) % 10) as f64).collect();
        for kind in [MisKind::Serial, MisKind::Parallel, MisKind::DistanceK(1)] {
            let (mask, stats) = MisContext::new(kind).select(&SerialExecutor, &adj.view(), &priority).unwrap();
            assert!(stats.converged, "{kind:?}");
            assert!(is_maximal_independent_set(&adj.view(), &mask, &[true; 10]), "{kind:?}");
            assert_eq!(stats.selected, mask.iter().filter(|&&m| m).count());
        }
        let (mask, _) = MisContext::new(MisKind::DistanceK(2)).select(&SerialExecutor, &adj.view(), &priority).unwrap();
        assert!(min_separation_ok(&adj.view(), &mask, 2));
    }

    #[test]
    fn serial_ignores_priorities() {
        let adj = CsrAdjacency::<i32>::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let (mask, stats) = MisContext::new(MisKind::Serial).select(&SerialExecutor, &adj.view(), &[0.0f64; 3]).unwrap();
        assert_eq!(mask, vec![true, false, true]);
        assert_eq!(stats.selected, 2);
    }
}
