// Greedy coloring by repeated serial MIS extraction

use crate::coloring::ColoringStats;
use crate::core::traits::{Index, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::independent::{StateTags, maximal_independent_set_serial};
use tracing::debug;

/// Color `K` is a maximal independent set of the vertices left uncolored by
/// colors `0..K`. Every vertex is overwritten; the color count equals the
/// number of sets extracted.
pub fn vertex_coloring_mis<I, T>(graph: &CsrGraph<'_, I, T>, colors: &mut [I]) -> Result<ColoringStats, GraphError>
where
    I: Index,
    T: Weight,
{
    let n = graph.num_vertices();
    GraphError::check_len("colors", n, colors.len())?;
    colors.fill(I::UNASSIGNED);

    // Uncolored vertices carry -1-K while color K is built; the vertices
    // excluded from color K become the active set (-2-K) of color K+1.
    let mut colored = 0;
    let mut k = 0;
    while colored < n {
        let kk = I::from_index(k);
        let tags = StateTags::new(I::UNASSIGNED - kk, kk, I::UNASSIGNED - I::one() - kk);
        colored += maximal_independent_set_serial(graph, tags, colors)?;
        k += 1;
    }
    debug!(num_vertices = n, num_colors = k, "MIS coloring");
    Ok(ColoringStats { num_colors: k, iterations: k })
}
