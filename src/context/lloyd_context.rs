//! Driver for Lloyd clustering.
//!
//! `LloydContext` repeats single Lloyd passes until the centers stop moving
//! or `options.max_iters` passes have run.

use crate::cluster::{lloyd_cluster, lloyd_cluster_exact};
use crate::config::IterationOptions;
use crate::core::traits::{Index, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::parallel::RoundExecutor;
use crate::utils::RoundStats;
use tracing::{debug, warn};

/// Center update rule of a Lloyd pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LloydKind {
    /// Member farthest from the cluster boundary
    Heuristic,
    /// Minimum-eccentricity member with balanced assignment
    Exact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LloydContext {
    pub kind: LloydKind,
    pub options: IterationOptions,
}

impl LloydContext {
    pub fn new(kind: LloydKind) -> Self {
        Self { kind, options: IterationOptions::default() }
    }

    pub fn with_options(mut self, options: IterationOptions) -> Self {
        self.options = options;
        self
    }

    /// Iterate Lloyd passes starting from `centers`.
    ///
    /// `centers` is updated in place; `distance` and `cluster_of` hold the
    /// state of the last pass. `rounds` counts passes and `converged` is set
    /// once a pass leaves every center where it was.
    pub fn run<E, I, T>(
        &self,
        exec: &E,
        graph: &CsrGraph<'_, I, T>,
        centers: &mut [I],
        distance: &mut [T],
        cluster_of: &mut [I],
    ) -> Result<RoundStats, GraphError>
    where
        E: RoundExecutor,
        I: Index,
        T: Weight,
    {
        for pass in 1..=self.options.max_iters {
            let moved = match self.kind {
                LloydKind::Heuristic => lloyd_cluster(exec, graph, centers, distance, cluster_of)?,
                LloydKind::Exact => lloyd_cluster_exact(exec, graph, centers, distance, cluster_of)?,
            };
            if !moved {
                debug!(kind = ?self.kind, passes = pass, num_clusters = centers.len(), "lloyd clustering converged");
                return Ok(RoundStats { rounds: pass, converged: true });
            }
        }
        warn!(kind = ?self.kind, max_iters = self.options.max_iters, "lloyd clustering stopped before centers settled");
        Ok(RoundStats { rounds: self.options.max_iters, converged: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CsrAdjacency;
    use crate::parallel::SerialExecutor;

    fn unit_path(n: usize) -> CsrAdjacency<i32, f64> {
        let edges: Vec<(usize, usize, f64)> = (0..n - 1).map(|i| (i, i + 1, 1.0)).collect();
        CsrAdjacency::from_weighted_edges(n, &edges).unwrap()
    }

    #[test]
    fn exact_settles_on_path() {
        let adj = unit_path(10);
        let mut centers = vec![0i32, 9];
        let mut d = vec![0.0; 10];
        let mut cm = vec![0i32; 10];
        let stats = LloydContext::new(LloydKind::Exact)
            .run(&SerialExecutor, &adj.view(), &mut centers, &mut d, &mut cm)
            .unwrap();
        assert_eq!(stats, RoundStats { rounds: 2, converged: true });
        assert_eq!(centers, vec![2, 7]);
        assert_eq!(cm, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn pass_limit_is_reported() {
        let adj = unit_path(10);
        let mut centers = vec![0i32, 9];
        let mut d = vec![0.0; 10];
        let mut cm = vec![0i32; 10];
        let ctx = LloydContext::new(LloydKind::Exact).with_options(IterationOptions::default().with_max_iters(1));
        let stats = ctx.run(&SerialExecutor, &adj.view(), &mut centers, &mut d, &mut cm).unwrap();
        assert_eq!(stats, RoundStats { rounds: 1, converged: false });
    }

    #[test]
    fn zero_passes_leave_centers_alone() {
        let adj = unit_path(4);
        let mut centers = vec![1i32];
        let mut d = vec![0.0; 4];
        let mut cm = vec![0i32; 4];
        let ctx = LloydContext::new(LloydKind::Heuristic).with_options(IterationOptions::default().with_max_iters(0));
        let stats = ctx.run(&SerialExecutor, &adj.view(), &mut centers, &mut d, &mut cm).unwrap();
        assert_eq!(stats, RoundStats { rounds: 0, converged: false });
        assert_eq!(centers, vec![1]);
    }
}
