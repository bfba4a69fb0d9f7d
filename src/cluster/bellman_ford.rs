// Bellman-Ford relaxation for multi-source cluster distances

use crate::core::traits::{Index, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::parallel::RoundExecutor;
use crate::utils::convergence::{RoundStats, cubic_sweep_bound};
use tracing::{debug, trace, warn};

/// One synchronous relaxation sweep.
///
/// Every vertex looks at the round-start `distance`/`cluster_of` of its
/// neighbors and takes `w(i,j) + d[j]` when it is strictly smaller than its
/// own distance, along with `j`'s cluster. When `predecessor` is given the
/// winning neighbor is recorded for every vertex that moved. Returns `true`
/// if anything changed.
pub fn bellman_ford<E, I, T>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    distance: &mut [T],
    cluster_of: &mut [I],
    mut predecessor: Option<&mut [I]>,
) -> Result<bool, GraphError>
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
{
    let n = graph.num_vertices();
    graph.require_distance_weights()?;
    GraphError::check_len("distance", n, distance.len())?;
    GraphError::check_len("cluster_of", n, cluster_of.len())?;
    if let Some(pred) = predecessor.as_deref() {
        GraphError::check_len("predecessor", n, pred.len())?;
    }

    let moved = relax_sweep(exec, graph, distance, cluster_of);
    let mut changed = false;
    for (i, update) in moved.into_iter().enumerate() {
        if let Some((d, c, j)) = update {
            distance[i] = d;
            cluster_of[i] = c;
            if let Some(pred) = predecessor.as_deref_mut() {
                pred[i] = I::from_index(j);
            }
            changed = true;
        }
    }
    Ok(changed)
}

/// Repeat [`bellman_ford`] until no distance changes.
///
/// With non-negative weights this takes at most `n` productive sweeps; more
/// than `n + 1` means the input was inconsistent and is reported as
/// `IterationLimitExceeded`.
pub fn bellman_ford_fixed_point<E, I, T>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    distance: &mut [T],
    cluster_of: &mut [I],
    predecessor: Option<&mut [I]>,
) -> Result<RoundStats, GraphError>
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
{
    fixed_point_sweeps(exec, graph, distance, cluster_of, predecessor, graph.num_vertices() + 1)
}

pub(crate) fn fixed_point_sweeps<E, I, T>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    distance: &mut [T],
    cluster_of: &mut [I],
    mut predecessor: Option<&mut [I]>,
    bound: usize,
) -> Result<RoundStats, GraphError>
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
{
    let mut sweeps = 0;
    loop {
        let changed = bellman_ford(exec, graph, distance, cluster_of, predecessor.as_deref_mut())?;
        sweeps += 1;
        if !changed {
            trace!(sweeps, "bellman-ford fixed point");
            return Ok(RoundStats { rounds: sweeps, converged: true });
        }
        if sweeps >= bound {
            warn!(sweeps, "bellman-ford did not settle");
            return Err(GraphError::IterationLimitExceeded { iterations: sweeps });
        }
    }
}

/// Per-vertex result of a sweep: `Some((distance, cluster, via))` on a strict
/// improvement.
fn relax_sweep<E, I, T>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    distance: &[T],
    cluster_of: &[I],
) -> Vec<Option<(T, I, usize)>>
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
{
    exec.map_vertices(graph.num_vertices(), |i| {
        let mut best: Option<(T, I, usize)> = None;
        let mut best_d = distance[i];
        for (j, w) in graph.row(i) {
            let via = w.saturating_sum(distance[j]);
            if via < best_d {
                best_d = via;
                best = Some((via, cluster_of[j], j));
            }
        }
        best
    })
}

/// Bellman-Ford with cluster-size balancing, swept in place until stable.
///
/// Strict improvements are taken as in [`bellman_ford`]. On an exact tie a
/// vertex switches from cluster `a` to the neighbor's cluster `b` only when
/// `size(b) + 1 < size(a)` and no other vertex currently routes through it,
/// so sizes strictly even out and the sweep terminates. Neighbors without a
/// cluster are never used as a source.
///
/// Vertices labeled on input are seeds and never switch on a tie, so a
/// zero-weight edge between two centers cannot empty a cluster.
///
/// Labels must be unassigned or in `[0, num_clusters)`. If the sweep count
/// exceeds `n³` the buffers hold the last state and `IterationLimitExceeded`
/// is returned.
pub fn bellman_ford_balanced<I, T>(
    graph: &CsrGraph<'_, I, T>,
    num_clusters: usize,
    distance: &mut [T],
    cluster_of: &mut [I],
) -> Result<RoundStats, GraphError>
where
    I: Index,
    T: Weight,
{
    balanced_sweeps(graph, num_clusters, distance, cluster_of, cubic_sweep_bound(graph.num_vertices()))
}

pub(crate) fn balanced_sweeps<I, T>(
    graph: &CsrGraph<'_, I, T>,
    num_clusters: usize,
    distance: &mut [T],
    cluster_of: &mut [I],
    bound: usize,
) -> Result<RoundStats, GraphError>
where
    I: Index,
    T: Weight,
{
    let n = graph.num_vertices();
    graph.require_distance_weights()?;
    GraphError::check_len("distance", n, distance.len())?;
    GraphError::check_len("cluster_of", n, cluster_of.len())?;

    let mut size = vec![0usize; num_clusters];
    for (i, &c) in cluster_of.iter().enumerate() {
        if !c.is_assigned() {
            continue;
        }
        if c.to_index() >= num_clusters {
            return Err(GraphError::InvalidClusterConfig(format!(
                "vertex {i} has cluster label {c}, expected [0, {num_clusters})"
            )));
        }
        size[c.to_index()] += 1;
    }
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut pred_count = vec![0usize; n];

    let mut sweeps = 0;
    loop {
        let mut changed = false;
        for i in 0..n {
            for (j, w) in graph.row(i) {
                let cj = cluster_of[j];
                if j == i || !cj.is_assigned() {
                    continue;
                }
                let via = w.saturating_sum(distance[j]);
                let ci = cluster_of[i];
                let improves = via < distance[i];
                let rebalances = !improves
                    && via == distance[i]
                    && predecessor[i].is_some()
                    && pred_count[i] == 0
                    && size[cj.to_index()] + 1 < size[ci.to_index()];
                if !(improves || rebalances) {
                    continue;
                }

                if ci.is_assigned() {
                    size[ci.to_index()] -= 1;
                }
                size[cj.to_index()] += 1;
                if let Some(p) = predecessor[i] {
                    pred_count[p] -= 1;
                }
                predecessor[i] = Some(j);
                pred_count[j] += 1;
                distance[i] = via;
                cluster_of[i] = cj;
                changed = true;
            }
        }
        sweeps += 1;
        if !changed {
            debug!(num_vertices = n, num_clusters, sweeps, "balanced bellman-ford converged");
            return Ok(RoundStats { rounds: sweeps, converged: true });
        }
        if sweeps >= bound {
            warn!(sweeps, bound, "balanced bellman-ford hit the sweep bound");
            return Err(GraphError::IterationLimitExceeded { iterations: sweeps });
        }
    }
}
