// CSR graph view (borrowed) and CSR adjacency (owned)

use crate::core::traits::{Index, Weight};
use crate::error::GraphError;
use num_traits::NumCast;
use std::ops::Range;

/// A read-only adjacency structure in compressed-sparse-row form.
///
/// Row `i` lists the neighbors of vertex `i` in
/// `column_index[row_offset[i]..row_offset[i + 1]]`. Edge weights, when
/// present, run parallel to `column_index`.
#[derive(Debug, Clone, Copy)]
pub struct CsrGraph<'a, I, T = f64> {
    num_vertices: usize,
    row_offset: &'a [I],
    column_index: &'a [I],
    edge_weight: Option<&'a [T]>,
}

impl<'a, I: Index, T: Weight> CsrGraph<'a, I, T> {
    /// Build a view over raw row-offset and column-index arrays.
    ///
    /// Checks that offsets are non-negative and monotone, that the last
    /// offset equals `column_index.len()`, that every column index lies in
    /// `[0, num_vertices)`, and that `num_vertices` is representable in `I`.
    pub fn new(num_vertices: usize, row_offset: &'a [I], column_index: &'a [I]) -> Result<Self, GraphError> {
        GraphError::check_len("row_offset", num_vertices + 1, row_offset.len())?;
        if <I as NumCast>::from(num_vertices).is_none() {
            return Err(GraphError::MalformedGraph(format!(
                "{num_vertices} vertices do not fit in the index type"
            )));
        }
        if row_offset[0] != I::zero() {
            return Err(GraphError::MalformedGraph(format!("row_offset[0] = {} must be 0", row_offset[0])));
        }
        let mut prev = I::zero();
        for (i, &off) in row_offset.iter().enumerate() {
            if off < prev {
                return Err(GraphError::MalformedGraph(format!(
                    "row_offset[{i}] = {off} breaks monotonicity"
                )));
            }
            prev = off;
        }
        let nnz = prev.to_index();
        if nnz != column_index.len() {
            return Err(GraphError::MalformedGraph(format!(
                "row_offset ends at {nnz} but column_index has {} entries",
                column_index.len()
            )));
        }
        for (jj, &j) in column_index.iter().enumerate() {
            if !j.is_assigned() || j.to_index() >= num_vertices {
                return Err(GraphError::MalformedGraph(format!(
                    "column_index[{jj}] = {j} out of range [0, {num_vertices})"
                )));
            }
        }
        Ok(Self::from_parts(num_vertices, row_offset, column_index, None))
    }

    /// Attach edge weights (one per stored entry).
    pub fn with_weights(mut self, edge_weight: &'a [T]) -> Result<Self, GraphError> {
        GraphError::check_len("edge_weight", self.column_index.len(), edge_weight.len())?;
        self.edge_weight = Some(edge_weight);
        Ok(self)
    }

    pub(crate) fn from_parts(
        num_vertices: usize,
        row_offset: &'a [I],
        column_index: &'a [I],
        edge_weight: Option<&'a [T]>,
    ) -> Self {
        Self { num_vertices, row_offset, column_index, edge_weight }
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of stored (directed) entries.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.column_index.len()
    }

    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.edge_weight.is_some()
    }

    /// Positions of row `i` inside `column_index`.
    #[inline]
    pub fn row_range(&self, i: usize) -> Range<usize> {
        self.row_offset[i].to_index()..self.row_offset[i + 1].to_index()
    }

    /// Number of stored entries in row `i` (self-loops included).
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.row_range(i).len()
    }

    /// Neighbors of vertex `i` as `usize` positions.
    #[inline]
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + 'a {
        let range = self.row_range(i);
        self.column_index[range].iter().map(|&j| j.to_index())
    }

    /// Edge weights, or `MissingEdgeWeights` for an unweighted view.
    pub fn edge_weights(&self) -> Result<&'a [T], GraphError> {
        self.edge_weight.ok_or(GraphError::MissingEdgeWeights)
    }

    /// Row `i` as `(neighbor, weight)` pairs. Unweighted views yield nothing,
    /// so weighted algorithms call [`Self::require_distance_weights`] first.
    #[inline]
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, T)> + 'a {
        let range = self.row_range(i);
        let weights = self.edge_weight.map(|w| &w[range.clone()]).unwrap_or(&[]);
        self.column_index[range].iter().zip(weights).map(|(&j, &w)| (j.to_index(), w))
    }

    /// Weights must exist, be comparable and be non-negative for shortest paths.
    pub fn require_distance_weights(&self) -> Result<&'a [T], GraphError> {
        let weights = self.edge_weights()?;
        for (jj, &w) in weights.iter().enumerate() {
            if !w.is_comparable() || w < T::zero() {
                return Err(GraphError::MalformedGraph(format!(
                    "edge weight {jj} ({w:?}) must be a non-negative number"
                )));
            }
        }
        Ok(weights)
    }

    /// Check a caller vertex id.
    pub fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.num_vertices {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { vertex, num_vertices: self.num_vertices })
        }
    }
}

/// Owned CSR adjacency, mostly used to build views from edge lists.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrAdjacency<I, T = f64> {
    num_vertices: usize,
    row_offset: Vec<I>,
    column_index: Vec<I>,
    edge_weight: Option<Vec<T>>,
}

impl<I: Index, T: Weight> CsrAdjacency<I, T> {
    /// Symmetric, unweighted adjacency from undirected edges `(u, v)`.
    pub fn from_edges(num_vertices: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let rows = Self::collect_rows(num_vertices, edges.iter().map(|&(u, v)| (u, v, T::zero())))?;
        Ok(Self::assemble(num_vertices, rows, false))
    }

    /// Symmetric, weighted adjacency from undirected edges `(u, v, w)`.
    pub fn from_weighted_edges(num_vertices: usize, edges: &[(usize, usize, T)]) -> Result<Self, GraphError> {
        let rows = Self::collect_rows(num_vertices, edges.iter().copied())?;
        Ok(Self::assemble(num_vertices, rows, true))
    }

    fn collect_rows(
        num_vertices: usize,
        edges: impl Iterator<Item = (usize, usize, T)>,
    ) -> Result<Vec<Vec<(usize, T)>>, GraphError> {
        if <I as NumCast>::from(num_vertices).is_none() {
            return Err(GraphError::MalformedGraph(format!(
                "{num_vertices} vertices do not fit in the index type"
            )));
        }
        let mut rows: Vec<Vec<(usize, T)>> = vec![Vec::new(); num_vertices];
        for (u, v, w) in edges {
            for vertex in [u, v] {
                if vertex >= num_vertices {
                    return Err(GraphError::VertexOutOfRange { vertex, num_vertices });
                }
            }
            rows[u].push((v, w));
            if u != v {
                rows[v].push((u, w));
            }
        }
        for row in &mut rows {
            row.sort_by_key(|&(j, _)| j);
        }
        Ok(rows)
    }

    fn assemble(num_vertices: usize, rows: Vec<Vec<(usize, T)>>, weighted: bool) -> Self {
        let nnz: usize = rows.iter().map(Vec::len).sum();
        let mut row_offset = Vec::with_capacity(num_vertices + 1);
        let mut column_index = Vec::with_capacity(nnz);
        let mut edge_weight = Vec::with_capacity(if weighted { nnz } else { 0 });
        row_offset.push(I::zero());
        for row in rows {
            for (j, w) in row {
                column_index.push(I::from_index(j));
                if weighted {
                    edge_weight.push(w);
                }
            }
            row_offset.push(I::from_index(column_index.len()));
        }
        Self {
            num_vertices,
            row_offset,
            column_index,
            edge_weight: weighted.then_some(edge_weight),
        }
    }

    /// Borrow as a [`CsrGraph`]; the arrays were validated on construction.
    pub fn view(&self) -> CsrGraph<'_, I, T> {
        CsrGraph::from_parts(
            self.num_vertices,
            &self.row_offset,
            &self.column_index,
            self.edge_weight.as_deref(),
        )
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Raw `(row_offset, column_index)` arrays.
    pub fn csr_components(&self) -> (&[I], &[I]) {
        (&self.row_offset, &self.column_index)
    }
}
