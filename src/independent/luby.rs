// Luby-style parallel maximal independent set

use crate::core::traits::{Index, Label, Priority, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::independent::{MisStats, StateTags, check_priorities};
use crate::parallel::RoundExecutor;
use crate::utils::convergence::RoundLimit;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    /// Not active, or outranked by an active neighbor.
    Defer,
    /// Local maximum among active neighbors: joins the set.
    Join,
    /// A neighbor was already in the set at round start.
    Leave,
}

/// Luby's MIS with caller-supplied priorities.
///
/// Each round reads only the round-start state. An active vertex joins the
/// set when no active neighbor outranks it, where `j` outranks `i` if
/// `priority[j] > priority[i]`, or the priorities are equal and `j > i`.
/// Active neighbors of joiners become `excluded` at the end of the round;
/// an active vertex that already has an `in_set` neighbor is excluded too.
///
/// Runs until no vertex is active or `max_rounds` rounds have run (`None`
/// means no limit). With a limit, vertices may remain `active`; the stats
/// report `converged = false` in that case.
pub fn maximal_independent_set_parallel<E, I, T, S, R>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    tags: StateTags<S>,
    state: &mut [S],
    priority: &[R],
    max_rounds: Option<usize>,
) -> Result<MisStats, GraphError>
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
    S: Label,
    R: Priority,
{
    let n = graph.num_vertices();
    GraphError::check_len("state", n, state.len())?;
    check_priorities(priority, n)?;
    tags.validate()?;

    let limit = RoundLimit::new(max_rounds);
    let mut selected = 0;
    let mut rounds = 0;
    let mut work_left = state.iter().any(|&s| s == tags.active);
    while work_left && !limit.exhausted(rounds) {
        let (joined, left) = luby_round(exec, graph, tags, state, priority);
        rounds += 1;
        selected += joined;
        work_left = left;
        trace!(round = rounds, joined, work_left, "luby round");
    }
    let stats = MisStats { selected, rounds, converged: !work_left };
    debug!(num_vertices = n, selected, rounds, converged = stats.converged, "parallel MIS");
    Ok(stats)
}

/// One synchronous round. Returns `(vertices joined, any vertex still active)`.
///
/// Inputs are assumed validated by the caller.
pub(crate) fn luby_round<E, I, T, S, R>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    tags: StateTags<S>,
    state: &mut [S],
    priority: &[R],
) -> (usize, bool)
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
    S: Label,
    R: Priority,
{
    let n = graph.num_vertices();
    let snapshot: &[S] = state;

    let decisions = exec.map_vertices(n, |i| {
        if snapshot[i] != tags.active {
            return Decision::Defer;
        }
        let yi = priority[i];
        let mut outranked = false;
        for j in graph.neighbors(i) {
            if j == i {
                continue;
            }
            let sj = snapshot[j];
            if sj == tags.in_set {
                return Decision::Leave;
            }
            if sj == tags.active {
                let yj = priority[j];
                if yj > yi || (yj == yi && j > i) {
                    outranked = true;
                }
            }
        }
        if outranked { Decision::Defer } else { Decision::Join }
    });

    let next = exec.map_vertices(n, |i| {
        let si = snapshot[i];
        if si != tags.active {
            return si;
        }
        match decisions[i] {
            Decision::Join => tags.in_set,
            Decision::Leave => tags.excluded,
            Decision::Defer => {
                if graph.neighbors(i).any(|j| j != i && decisions[j] == Decision::Join) {
                    tags.excluded
                } else {
                    tags.active
                }
            }
        }
    });

    let joined = exec.count_vertices(n, |i| decisions[i] == Decision::Join);
    let still_active = exec.count_vertices(n, |i| next[i] == tags.active);
    state.copy_from_slice(&next);
    (joined, still_active > 0)
}
