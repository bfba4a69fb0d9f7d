// Node/cluster incidence mapping

use crate::core::traits::Index;
use crate::error::GraphError;
use num_traits::NumCast;

/// Node–cluster incidence in column (CSC) form plus the local index map.
///
/// With `a = cluster_of[i]` and `m = local[i]`, member `m` of cluster `a` is
/// `col_index[col_ptr[a] + m] == i`. Members of a cluster are stored in
/// increasing vertex order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterIncidence<I> {
    col_ptr: Vec<I>,
    col_index: Vec<I>,
    local: Vec<I>,
}

impl<I: Index> ClusterIncidence<I> {
    /// Build the mapping for `num_clusters` clusters.
    ///
    /// Every label must lie in `[0, num_clusters)` and every cluster must
    /// have at least one member.
    pub fn new(num_clusters: usize, cluster_of: &[I]) -> Result<Self, GraphError> {
        let n = cluster_of.len();
        let mut col_ptr = vec![I::zero(); num_clusters + 1];
        let mut col_index = vec![I::zero(); n];
        let mut local = vec![I::zero(); n];
        cluster_node_incidence(num_clusters, cluster_of, &mut col_ptr, &mut col_index, &mut local)?;
        Ok(Self { col_ptr, col_index, local })
    }

    pub fn num_clusters(&self) -> usize {
        self.col_ptr.len() - 1
    }

    pub fn num_vertices(&self) -> usize {
        self.col_index.len()
    }

    /// Global ids of the members of cluster `a`, ascending.
    pub fn members(&self, a: usize) -> &[I] {
        &self.col_index[self.col_ptr[a].to_index()..self.col_ptr[a + 1].to_index()]
    }

    pub fn cluster_size(&self, a: usize) -> usize {
        (self.col_ptr[a + 1] - self.col_ptr[a]).to_index()
    }

    /// Position of vertex `i` inside its cluster.
    #[inline]
    pub fn local_index(&self, i: usize) -> usize {
        self.local[i].to_index()
    }

    /// Global id of member `m` of cluster `a`.
    #[inline]
    pub fn global_index(&self, a: usize, m: usize) -> usize {
        self.col_index[self.col_ptr[a].to_index() + m].to_index()
    }

    /// Raw `(col_ptr, col_index, local)` arrays.
    pub fn components(&self) -> (&[I], &[I], &[I]) {
        (&self.col_ptr, &self.col_index, &self.local)
    }
}

/// Fill caller buffers with the incidence mapping of `cluster_of`.
///
/// `col_ptr` has `num_clusters + 1` entries, `col_index` and `local` one per
/// vertex. Labels are validated before any buffer is written.
pub fn cluster_node_incidence<I: Index>(
    num_clusters: usize,
    cluster_of: &[I],
    col_ptr: &mut [I],
    col_index: &mut [I],
    local: &mut [I],
) -> Result<(), GraphError> {
    let n = cluster_of.len();
    GraphError::check_len("col_ptr", num_clusters + 1, col_ptr.len())?;
    GraphError::check_len("col_index", n, col_index.len())?;
    GraphError::check_len("local", n, local.len())?;
    if <I as NumCast>::from(num_clusters.max(n)).is_none() {
        return Err(GraphError::NumericOverflow(num_clusters.max(n)));
    }

    let mut sizes = vec![0usize; num_clusters];
    for (i, &a) in cluster_of.iter().enumerate() {
        if !a.is_assigned() || a.to_index() >= num_clusters {
            return Err(GraphError::InvalidClusterConfig(format!(
                "vertex {i} has cluster label {a}, expected [0, {num_clusters})"
            )));
        }
        sizes[a.to_index()] += 1;
    }
    if let Some(a) = sizes.iter().position(|&s| s == 0) {
        return Err(GraphError::InvalidClusterConfig(format!("cluster {a} is empty")));
    }

    // counting sort: by cluster, then by vertex id
    let mut offset = 0;
    let mut next = Vec::with_capacity(num_clusters);
    for (a, &size) in sizes.iter().enumerate() {
        col_ptr[a] = I::from_index(offset);
        next.push(offset);
        offset += size;
    }
    col_ptr[num_clusters] = I::from_index(offset);
    for (i, &a) in cluster_of.iter().enumerate() {
        let a = a.to_index();
        let pos = next[a];
        next[a] += 1;
        col_index[pos] = I::from_index(i);
        local[i] = I::from_index(pos - col_ptr[a].to_index());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_cluster_then_vertex() {
        let cm = [1i32, 0, 1, 2, 0];
        let inc = ClusterIncidence::new(3, &cm).unwrap();
        let (ptr, idx, local) = inc.components();
        assert_eq!(ptr, &[0, 2, 4, 5]);
        assert_eq!(idx, &[1, 4, 0, 2, 3]);
        assert_eq!(local, &[0, 0, 1, 0, 1]);
        assert_eq!(inc.members(1), &[0, 2]);
        assert_eq!(inc.global_index(0, 1), 4);
        assert_eq!(inc.local_index(4), 1);
        assert_eq!(inc.cluster_size(2), 1);
    }

    #[test]
    fn empty_cluster_is_rejected() {
        let cm = [0i32, 0, 2];
        let err = ClusterIncidence::new(3, &cm).unwrap_err();
        assert_eq!(err, GraphError::InvalidClusterConfig("cluster 1 is empty".into()));
    }

    #[test]
    fn label_out_of_range_is_rejected() {
        let cm = [0i32, -1];
        assert!(matches!(ClusterIncidence::new(1, &cm), Err(GraphError::InvalidClusterConfig(_))));
        let cm = [0i32, 3];
        assert!(matches!(ClusterIncidence::new(2, &cm), Err(GraphError::InvalidClusterConfig(_))));
    }

    #[test]
    fn buffers_untouched_on_error() {
        let cm = [0i32, 5];
        let mut ptr = [9i32; 3];
        let mut idx = [9i32; 2];
        let mut local = [9i32; 2];
        assert!(cluster_node_incidence(2, &cm, &mut ptr, &mut idx, &mut local).is_err());
        assert_eq!(ptr, [9; 3]);
        assert_eq!(idx, [9; 2]);
    }
}
