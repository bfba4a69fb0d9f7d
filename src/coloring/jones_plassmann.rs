// Jones–Plassmann parallel coloring

use crate::coloring::first_fit::first_fit_class;
use crate::coloring::{ColoringStats, excluded_tag, offset_priority, reset_excluded};
use crate::core::traits::{Index, Priority, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::independent::luby::luby_round;
use crate::independent::{StateTags, check_priorities};
use crate::parallel::RoundExecutor;
use tracing::{debug, trace};

/// Jones–Plassmann coloring with priority `degree(i) + random[i]`.
///
/// Iteration `K` runs a single Luby round over the uncolored vertices; the
/// winners get color `K`, and first-fit then pulls each of them down to the
/// smallest color free among its neighbors. `random` is not modified.
pub fn vertex_coloring_jones_plassmann<E, I, T, R>(
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

    let weights = (0..n)
        .map(|i| offset_priority(random[i], graph.degree(i)))
        .collect::<Result<Vec<R>, GraphError>>()?;
    check_priorities(&weights, n)?;

    colors.fill(I::UNASSIGNED);
    let mut colored = 0;
    let mut k = 0;
    while colored < n {
        let kk = I::from_index(k);
        let tags = StateTags::new(I::UNASSIGNED, kk, excluded_tag::<I>());
        let (joined, _) = luby_round(exec, graph, tags, colors, &weights);
        colored += joined;
        reset_excluded(colors);
        first_fit_class(graph, colors, kk);
        trace!(iteration = k, joined, colored, "jones-plassmann iteration");
        k += 1;
    }

    let stats = ColoringStats::from_colors(colors, k);
    debug!(num_vertices = n, num_colors = stats.num_colors, iterations = k, "Jones-Plassmann coloring");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CsrAdjacency;
    use crate::parallel::{SerialExecutor, UniverseExecutor};
    use crate::utils::is_valid_coloring;

    #[test]
    fn star_gets_two_colors() {
        let adj = CsrAdjacency::<i32>::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let mut colors = vec![0i32; 5];
        let random = [0.1, 0.5, 0.4, 0.3, 0.2];
        let stats = vertex_coloring_jones_plassmann(&SerialExecutor, &adj.view(), &mut colors, &random).unwrap();
        // hub has the highest degree and goes first
        assert_eq!(colors, vec![0, 1, 1, 1, 1]);
        assert_eq!(stats.num_colors, 2);
        assert_eq!(stats.max_color(), Some(1));
    }

    #[test]
    fn valid_on_wheel_and_executors_agree() {
        // hub 0 joined to the 7-cycle 1..=7
        let mut edges: Vec<(usize, usize)> = (1..=7).map(|i| (0, i)).collect();
        edges.extend((1..=7).map(|i| (i, i % 7 + 1)));
        let adj = CsrAdjacency::<i32>::from_edges(8, &edges).unwrap();
        let random: Vec<f64> = (0..8).map(|i| (i as f64 * 0.37).fract()).collect();
        let mut a = vec![0i32; 8];
        let mut b = vec![0i32; 8];
        let sa = vertex_coloring_jones_plassmann(&SerialExecutor, &adj.view(), &mut a, &random).unwrap();
        let sb = vertex_coloring_jones_plassmann(&UniverseExecutor::default(), &adj.view(), &mut b, &random).unwrap();
        assert_eq!(a, b);
        assert_eq!(sa, sb);
        assert!(is_valid_coloring(&adj.view(), &a, sa.num_colors));
        // odd wheel needs four colors
        assert!(sa.num_colors >= 4);
    }

    #[test]
    fn integer_priority_overflow_is_an_error() {
        let adj = CsrAdjacency::<i32>::from_edges(2, &[(0, 1)]).unwrap();
        let mut colors = vec![0i32; 2];
        assert_eq!(
            vertex_coloring_jones_plassmann(&SerialExecutor, &adj.view(), &mut colors, &[i32::MAX, 0]),
            Err(GraphError::NumericOverflow(1))
        );
        let stats = vertex_coloring_jones_plassmann(&SerialExecutor, &adj.view(), &mut colors, &[i32::MAX - 1, 0]).unwrap();
        assert_eq!(stats.num_colors, 2);
    }
}
