// Largest-Degree-First parallel coloring

use crate::coloring::first_fit::first_fit_class;
use crate::coloring::{ColoringStats, count_as, excluded_tag, offset_priority, reset_excluded};
use crate::core::traits::{Index, Priority, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::independent::luby::luby_round;
use crate::independent::{StateTags, check_priorities};
use crate::parallel::RoundExecutor;
use tracing::{debug, trace};

/// Largest-Degree-First coloring.
///
/// Same loop as Jones–Plassmann, but before every iteration the priority of
/// each uncolored vertex is recomputed as `random[i]` plus its number of
/// uncolored neighbors, so the degree shrinks as the graph gets colored.
pub fn vertex_coloring_ldf<E, I, T, R>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    colors: &mut [I],
    random: &[R],
) -> Result<ColoringStats, GraphError>
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
    R: Priority,
{
    let n = graph.num_vertices();
    GraphError::check_len("colors", n, colors.len())?;
    check_priorities(random, n)?;
    // the largest possible induced degree must be representable
    let max_degree = (0..n).map(|i| graph.degree(i)).max().unwrap_or(0);
    count_as::<R>(max_degree)?;

    colors.fill(I::UNASSIGNED);
    let mut colored = 0;
    let mut k = 0;
    while colored < n {
        let snapshot: &[I] = colors;
        let weights = exec
            .map_vertices(n, |i| {
                if snapshot[i] != I::UNASSIGNED {
                    return Ok(random[i]);
                }
                let uncolored = graph.neighbors(i).filter(|&j| j != i && snapshot[j] == I::UNASSIGNED).count();
                offset_priority(random[i], uncolored)
            })
            .into_iter()
            .collect::<Result<Vec<R>, GraphError>>()?;

        let kk = I::from_index(k);
        let tags = StateTags::new(I::UNASSIGNED, kk, excluded_tag::<I>());
        let (joined, _) = luby_round(exec, graph, tags, colors, &weights);
        colored += joined;
        reset_excluded(colors);
        first_fit_class(graph, colors, kk);
        trace!(iteration = k, joined, colored, "LDF iteration");
        k += 1;
    }

    let stats = ColoringStats::from_colors(colors, k);
    debug!(num_vertices = n, num_colors = stats.num_colors, iterations = k, "LDF coloring");
    Ok(stats)
}
