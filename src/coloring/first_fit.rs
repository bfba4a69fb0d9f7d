// First-fit recoloring of one color class

use crate::core::traits::{Index, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;

/// Give every vertex of color `k` the smallest non-negative color not used
/// by its colored neighbors (self-loops and uncolored neighbors ignored).
///
/// Vertices are visited in index order and see earlier reassignments. On a
/// valid coloring no vertex moves above `k`, so the color count never grows.
pub fn vertex_coloring_first_fit<I, T>(graph: &CsrGraph<'_, I, T>, colors: &mut [I], k: usize) -> Result<(), GraphError>
where
    I: Index,
    T: Weight,
{
    GraphError::check_len("colors", graph.num_vertices(), colors.len())?;
    if <I as num_traits::NumCast>::from(k).is_none() {
        return Err(GraphError::NumericOverflow(k));
    }
    first_fit_class(graph, colors, I::from_index(k));
    Ok(())
}

pub(crate) fn first_fit_class<I, T>(graph: &CsrGraph<'_, I, T>, colors: &mut [I], k: I)
where
    I: Index,
    T: Weight,
{
    let mut mask: Vec<bool> = Vec::new();
    for i in 0..graph.num_vertices() {
        if colors[i] != k {
            continue;
        }
        // deg + 1 slots always hold a free color
        let deg = graph.degree(i);
        mask.clear();
        mask.resize(deg + 1, false);
        for j in graph.neighbors(i) {
            if j == i || !colors[j].is_assigned() {
                continue;
            }
            let c = colors[j].to_index();
            if c <= deg {
                mask[c] = true;
            }
        }
        let first = mask.iter().position(|&used| !used).unwrap_or(deg);
        colors[i] = I::from_index(first);
    }
}
