// One-hop (key, value) maximum propagation

use crate::core::traits::{Index, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::parallel::RoundExecutor;

/// Each vertex adopts the largest `(key, value)` pair among itself and its
/// neighbors: larger value wins, equal values go to the larger key, and a
/// neighbor already carrying the same key is skipped.
///
/// Reads `keys_in`/`vals_in` only and writes `keys_out`/`vals_out`, so a
/// round is safe to evaluate concurrently.
pub fn propagate_max<E, I, T, V>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    keys_in: &[I],
    keys_out: &mut [I],
    vals_in: &[V],
    vals_out: &mut [V],
) -> Result<(), GraphError>
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
    V: Copy + PartialOrd + Send + Sync,
{
    let n = graph.num_vertices();
    GraphError::check_len("keys_in", n, keys_in.len())?;
    GraphError::check_len("keys_out", n, keys_out.len())?;
    GraphError::check_len("vals_in", n, vals_in.len())?;
    GraphError::check_len("vals_out", n, vals_out.len())?;

    let (keys, vals) = propagate_max_round(exec, graph, keys_in, vals_in);
    keys_out.copy_from_slice(&keys);
    vals_out.copy_from_slice(&vals);
    Ok(())
}

/// Allocating form used by the distance-k driver; lengths are trusted.
pub(crate) fn propagate_max_round<E, I, T, V>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    keys: &[I],
    vals: &[V],
) -> (Vec<I>, Vec<V>)
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
    V: Copy + PartialOrd + Send + Sync,
{
    let pairs = exec.map_vertices(graph.num_vertices(), |i| {
        let mut k_max = keys[i];
        let mut v_max = vals[i];
        for j in graph.neighbors(i) {
            let (k_j, v_j) = (keys[j], vals[j]);
            if k_j == k_max || v_j < v_max {
                continue;
            }
            if v_j > v_max || k_j > k_max {
                k_max = k_j;
                v_max = v_j;
            }
        }
        (k_max, v_max)
    });
    pairs.into_iter().unzip()
}
