// Distance-k maximal independent set (MIS-k)

use crate::core::traits::{Index, Priority, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::independent::propagate::propagate_max_round;
use crate::independent::{MisStats, check_priorities};
use crate::parallel::RoundExecutor;
use crate::utils::convergence::RoundLimit;
use tracing::{debug, trace};

/// Parallel MIS-k: selected vertices are pairwise more than `k` edges apart
/// and no other vertex can be added without breaking that.
///
/// Every round floods `(vertex, priority)` pairs `k` hops with
/// [`propagate_max`](crate::independent::propagate_max); an active vertex
/// that still reports itself as the maximum joins the set. A boolean "claimed"
/// flag is then flooded `k` hops from all set members, and every claimed
/// vertex is deactivated: its value becomes `None`, which loses against any
/// priority, so it never competes again. `MIS-1` is an ordinary MIS.
///
/// `selected` is overwritten. Stops when every vertex is claimed or after
/// `max_rounds` rounds.
pub fn maximal_independent_set_k_parallel<E, I, T, R>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    k: usize,
    selected: &mut [bool],
    priority: &[R],
    max_rounds: Option<usize>,
) -> Result<MisStats, GraphError>
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
    R: Priority,
{
    let n = graph.num_vertices();
    GraphError::check_len("selected", n, selected.len())?;
    check_priorities(priority, n)?;

    selected.fill(false);
    let identity: Vec<I> = (0..n).map(I::from_index).collect();
    let mut active = vec![true; n];
    let mut keys = identity.clone();
    let mut vals: Vec<Option<R>> = priority.iter().copied().map(Some).collect();

    let limit = RoundLimit::new(max_rounds);
    let mut rounds = 0;
    let mut work_left = n > 0;
    while work_left && !limit.exhausted(rounds) {
        rounds += 1;

        for _ in 0..k {
            (keys, vals) = propagate_max_round(exec, graph, &keys, &vals);
        }
        let mut joined = 0;
        for i in 0..n {
            if active[i] && keys[i].to_index() == i {
                selected[i] = true;
                joined += 1;
            }
        }

        let mut claim_keys = identity.clone();
        let mut claimed = selected.to_vec();
        for _ in 0..k {
            (claim_keys, claimed) = propagate_max_round(exec, graph, &claim_keys, &claimed);
        }

        work_left = false;
        for i in 0..n {
            if claimed[i] {
                active[i] = false;
                vals[i] = None;
            } else {
                vals[i] = Some(priority[i]);
                work_left = true;
            }
        }
        keys.copy_from_slice(&identity);
        trace!(round = rounds, joined, work_left, "MIS-k round");
    }

    let stats = MisStats {
        selected: selected.iter().filter(|&&s| s).count(),
        rounds,
        converged: !work_left,
    };
    debug!(num_vertices = n, k, selected = stats.selected, rounds, converged = stats.converged, "MIS-k");
    Ok(stats)
}
