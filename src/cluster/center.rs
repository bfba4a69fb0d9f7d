// Exact cluster center by all-pairs shortest paths

use crate::cluster::incidence::ClusterIncidence;
use crate::core::traits::{Index, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use tracing::trace;

/// Member of cluster `a` with the smallest eccentricity inside the cluster.
///
/// Runs Floyd–Warshall on the subgraph induced by the members of `a`, using
/// only edges whose endpoints both belong to `a`; parallel edges keep the
/// smaller weight. The lowest local index wins a tie. A cluster that is not
/// connected through its own edges yields `DisconnectedCluster`.
pub fn cluster_center<I, T>(
    a: usize,
    graph: &CsrGraph<'_, I, T>,
    cluster_of: &[I],
    incidence: &ClusterIncidence<I>,
) -> Result<I, GraphError>
where
    I: Index,
    T: Weight,
{
    let n = graph.num_vertices();
    graph.require_distance_weights()?;
    GraphError::check_len("cluster_of", n, cluster_of.len())?;
    GraphError::check_len("incidence", n, incidence.num_vertices())?;
    if a >= incidence.num_clusters() {
        return Err(GraphError::InvalidClusterConfig(format!(
            "cluster {a} does not exist, {} clusters",
            incidence.num_clusters()
        )));
    }
    center_of(a, graph, cluster_of, incidence)
}

/// [`cluster_center`] without the input checks.
pub(crate) fn center_of<I, T>(
    a: usize,
    graph: &CsrGraph<'_, I, T>,
    cluster_of: &[I],
    incidence: &ClusterIncidence<I>,
) -> Result<I, GraphError>
where
    I: Index,
    T: Weight,
{
    let members = incidence.members(a);
    let size = members.len();
    let label = I::from_index(a);

    let mut dist = vec![T::infinity(); size * size];
    for (m, &gi) in members.iter().enumerate() {
        for (j, w) in graph.row(gi.to_index()) {
            if cluster_of[j] != label {
                continue;
            }
            let slot = &mut dist[m * size + incidence.local_index(j)];
            if w < *slot {
                *slot = w;
            }
        }
        dist[m * size + m] = T::zero();
    }

    for l in 0..size {
        for m in 0..size {
            let to_l = dist[m * size + l];
            if to_l == T::infinity() {
                continue;
            }
            for k in 0..size {
                let via = to_l.saturating_sum(dist[l * size + k]);
                if via < dist[m * size + k] {
                    dist[m * size + k] = via;
                }
            }
        }
    }

    let mut best: Option<(usize, T)> = None;
    for m in 0..size {
        let row = &dist[m * size..(m + 1) * size];
        let mut ecc = T::zero();
        for &d in row {
            if d == T::infinity() {
                return Err(GraphError::DisconnectedCluster { cluster: a });
            }
            if d > ecc {
                ecc = d;
            }
        }
        match best {
            Some((_, e)) if ecc >= e => {}
            _ => best = Some((m, ecc)),
        }
    }

    let (m, ecc) = best.ok_or_else(|| GraphError::InvalidClusterConfig(format!("cluster {a} is empty")))?;
    trace!(cluster = a, size, center = members[m].to_index(), eccentricity = ?ecc, "cluster center");
    Ok(members[m])
}
