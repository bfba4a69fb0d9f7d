//! Factory for vertex coloring.

use crate::coloring::{
    ColoringStats, vertex_coloring_jones_plassmann, vertex_coloring_ldf, vertex_coloring_mis,
};
use crate::core::traits::{Index, Priority, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::parallel::RoundExecutor;

/// Available coloring methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColoringKind {
    /// Repeated serial MIS extraction (random values ignored)
    Mis,
    /// Jones–Plassmann with degree-weighted priorities
    JonesPlassmann,
    /// Largest-Degree-First
    LargestDegreeFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoringContext {
    pub kind: ColoringKind,
}

impl ColoringContext {
    pub fn new(kind: ColoringKind) -> Self {
        Self { kind }
    }

    /// Color every vertex; `random` supplies the tie-breaking values of the
    /// parallel methods.
    pub fn color<E, I, T, R>(
        &self,
        exec: &E,
        graph: &CsrGraph<'_, I, T>,
        random: &[R],
    ) -> Result<(Vec<I>, ColoringStats), GraphError>
    where
        E: RoundExecutor,
        I: Index,
        T: Weight,
        R: Priority,
    {
        let mut colors = vec![I::UNASSIGNED; graph.num_vertices()];
        let stats = match self.kind {
            ColoringKind::Mis => vertex_coloring_mis(graph, &mut colors)?,
            ColoringKind::JonesPlassmann => vertex_coloring_jones_plassmann(exec, graph, &mut colors, random)?,
            ColoringKind::LargestDegreeFirst => vertex_coloring_ldf(exec, graph, &mut colors, random)?,
        };
        Ok((colors, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CsrAdjacency;
    use crate::parallel::UniverseExecutor;
    use crate::utils::is_valid_coloring;

    #[test]
    fn all_methods_color_a_grid() {
        // 4x4 grid, bipartite
        let mut edges = Vec::new();
        for r in 0..4 {
            for c in 0..4 {
                let v = r * 4 + c;
                if c + 1 < 4 {
                    edges.push((v, v + 1));
                }
                if r + 1 < 4 {
                    edges.push((v, v + 4));
                }
            }
        }
        let adj = CsrAdjacency::<i32>::from_edges(16, &edges).unwrap();
        let random: Vec<f64> = (0..16).map(|i| ((i * 5) % 16) as f64 / 16.0).collect();
        let exec = UniverseExecutor::default();
        for kind in [ColoringKind::Mis, ColoringKind::JonesPlassmann, ColoringKind::LargestDegreeFirst] {
            let (colors, stats) = ColoringContext::new(kind).color(&exec, &adj.view(), &random).unwrap();
            assert!(is_valid_coloring(&adj.view(), &colors, stats.num_colors), "{kind:?}");
            assert!(stats.num_colors >= 2, "{kind:?}");
        }
    }
}
