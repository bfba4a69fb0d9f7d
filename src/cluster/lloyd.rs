// One pass of graph Lloyd clustering, heuristic and exact

use crate::cluster::bellman_ford::{bellman_ford_balanced, bellman_ford_fixed_point};
use crate::cluster::center::center_of;
use crate::cluster::incidence::ClusterIncidence;
use crate::core::traits::{Index, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::parallel::RoundExecutor;
use tracing::debug;

/// Heuristic Lloyd pass.
///
/// Clusters are grown from `centers` to a Bellman-Ford fixed point. Then the
/// distances are recomputed from the cluster boundaries (vertices with a
/// neighbor in another cluster) inward, and every cluster takes as its new
/// center a member farthest from its boundary. Returns `true` if any center
/// moved.
///
/// On return `cluster_of` holds the assignment grown from the old centers and
/// `distance` the distance to the nearest boundary.
pub fn lloyd_cluster<E, I, T>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    centers: &mut [I],
    distance: &mut [T],
    cluster_of: &mut [I],
) -> Result<bool, GraphError>
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
{
    check_buffers(graph, distance, cluster_of)?;
    seed_from_centers(graph.num_vertices(), centers, distance, cluster_of)?;

    let grow = bellman_ford_fixed_point(exec, graph, distance, cluster_of, None)?;

    let boundary = {
        let cm: &[I] = cluster_of;
        exec.map_vertices(graph.num_vertices(), |i| graph.neighbors(i).any(|j| cm[j] != cm[i]))
    };
    for (d, on_boundary) in distance.iter_mut().zip(boundary) {
        *d = if on_boundary { T::zero() } else { T::infinity() };
    }
    let shrink = bellman_ford_fixed_point(exec, graph, distance, cluster_of, None)?;

    let mut changed = false;
    for i in 0..graph.num_vertices() {
        let a = cluster_of[i];
        if !a.is_assigned() {
            continue;
        }
        let a = a.to_index();
        if distance[centers[a].to_index()] < distance[i] {
            centers[a] = I::from_index(i);
            changed = true;
        }
    }
    debug!(
        num_clusters = centers.len(),
        grow_sweeps = grow.rounds,
        shrink_sweeps = shrink.rounds,
        changed,
        "lloyd pass"
    );
    Ok(changed)
}

/// Exact Lloyd pass.
///
/// Clusters are grown from `centers` with [`bellman_ford_balanced`], and the
/// new center of every cluster is its exact graph center
/// (see [`cluster_center`](crate::cluster::cluster_center)). Every vertex
/// must be reachable from some center. Returns `true` if any center moved.
pub fn lloyd_cluster_exact<E, I, T>(
    exec: &E,
    graph: &CsrGraph<'_, I, T>,
    centers: &mut [I],
    distance: &mut [T],
    cluster_of: &mut [I],
) -> Result<bool, GraphError>
where
    E: RoundExecutor,
    I: Index,
    T: Weight,
{
    check_buffers(graph, distance, cluster_of)?;
    let num_clusters = centers.len();
    seed_from_centers(graph.num_vertices(), centers, distance, cluster_of)?;

    let grow = bellman_ford_balanced(graph, num_clusters, distance, cluster_of)?;
    let incidence = ClusterIncidence::new(num_clusters, cluster_of)?;

    let assignment: &[I] = cluster_of;
    let new_centers = exec
        .map_vertices(num_clusters, |a| center_of(a, graph, assignment, &incidence))
        .into_iter()
        .collect::<Result<Vec<I>, GraphError>>()?;

    let changed = new_centers.as_slice() != &*centers;
    centers.copy_from_slice(&new_centers);
    debug!(num_clusters, grow_sweeps = grow.rounds, changed, "exact lloyd pass");
    Ok(changed)
}

fn check_buffers<I, T>(graph: &CsrGraph<'_, I, T>, distance: &[T], cluster_of: &[I]) -> Result<(), GraphError>
where
    I: Index,
    T: Weight,
{
    let n = graph.num_vertices();
    graph.require_distance_weights()?;
    GraphError::check_len("distance", n, distance.len())?;
    GraphError::check_len("cluster_of", n, cluster_of.len())
}

/// Reset `distance`/`cluster_of` so that only the centers are reached.
///
/// Centers must be distinct vertices of the graph.
pub(crate) fn seed_from_centers<I, T>(
    n: usize,
    centers: &[I],
    distance: &mut [T],
    cluster_of: &mut [I],
) -> Result<(), GraphError>
where
    I: Index,
    T: Weight,
{
    let mut seen = vec![false; n];
    for (a, &c) in centers.iter().enumerate() {
        if !c.is_assigned() || c.to_index() >= n {
            return Err(GraphError::InvalidClusterConfig(format!(
                "center {a} is vertex {c}, graph has {n} vertices"
            )));
        }
        let c = c.to_index();
        if std::mem::replace(&mut seen[c], true) {
            return Err(GraphError::InvalidClusterConfig(format!("vertex {c} is the center of two clusters")));
        }
    }

    distance.fill(T::infinity());
    cluster_of.fill(I::UNASSIGNED);
    for (a, &c) in centers.iter().enumerate() {
        distance[c.to_index()] = T::zero();
        cluster_of[c.to_index()] = I::from_index(a);
    }
    Ok(())
}
