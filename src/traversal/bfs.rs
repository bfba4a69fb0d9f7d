// Level-synchronous breadth-first search

use crate::core::traits::{Index, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use tracing::trace;

/// Breadth-first search from `seed`.
///
/// `level` must be pre-set to `-1` for every vertex that may be visited;
/// vertices with any other level are treated as already seen. On return the
/// first `count` entries of `order` list the reached vertices in discovery
/// order and `level[i]` is the hop distance from `seed`. Returns `count`.
pub fn breadth_first_search<I, T>(
    graph: &CsrGraph<'_, I, T>,
    seed: usize,
    order: &mut [I],
    level: &mut [I],
) -> Result<usize, GraphError>
where
    I: Index,
    T: Weight,
{
    let n = graph.num_vertices();
    GraphError::check_len("order", n, order.len())?;
    GraphError::check_len("level", n, level.len())?;
    graph.check_vertex(seed)?;

    order[0] = I::from_index(seed);
    level[seed] = I::zero();
    let mut found = 1;
    let mut begin = 0;
    let mut end = found;
    let mut depth = I::one();
    while begin < end {
        for ii in begin..end {
            let i = order[ii].to_index();
            for j in graph.neighbors(i) {
                if level[j] == I::UNASSIGNED {
                    order[found] = I::from_index(j);
                    level[j] = depth;
                    found += 1;
                }
            }
        }
        begin = end;
        end = found;
        depth = depth + I::one();
    }
    Ok(found)
}

/// Find a vertex of (approximately) maximal eccentricity.
///
/// Starting from vertex 0, repeatedly searches from the lowest-degree vertex
/// of the deepest level until the depth stops growing. Returns the vertex and
/// the number of levels of its search tree. Only the component of vertex 0
/// is considered.
pub fn pseudo_peripheral_node<I, T>(graph: &CsrGraph<'_, I, T>) -> Result<(usize, usize), GraphError>
where
    I: Index,
    T: Weight,
{
    let n = graph.num_vertices();
    graph.check_vertex(0)?;
    let mut order = vec![I::zero(); n];
    let mut level = vec![I::UNASSIGNED; n];

    let mut x = 0;
    let mut depth = 0;
    let mut searches = 0;
    loop {
        level.fill(I::UNASSIGNED);
        let found = breadth_first_search(graph, x, &mut order, &mut level)?;
        searches += 1;
        let reached = &order[..found];
        let deepest = reached.iter().map(|&v| level[v.to_index()]).max().unwrap_or(I::zero());
        let candidate = reached
            .iter()
            .map(|&v| v.to_index())
            .filter(|&v| level[v] == deepest)
            .min_by_key(|&v| graph.degree(v))
            .unwrap_or(x);
        let eccentricity = deepest.to_index();
        if eccentricity <= depth {
            trace!(vertex = x, levels = depth + 1, searches, "pseudo-peripheral node");
            return Ok((x, depth + 1));
        }
        x = candidate;
        depth = eccentricity;
    }
}
