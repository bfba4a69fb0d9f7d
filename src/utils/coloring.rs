//! Checks and helpers for vertex labelings (independent sets, colorings).
//!
//! These are linear-time validators used by the test-suite and handy for
//! callers that want debug assertions on coarse structures.

use crate::core::traits::{Index, Weight};
use crate::graph::CsrGraph;

/// No two members are adjacent (self-loops ignored).
pub fn is_independent_set<I: Index, T: Weight>(graph: &CsrGraph<'_, I, T>, member: &[bool]) -> bool {
    (0..graph.num_vertices())
        .filter(|&i| member[i])
        .all(|i| graph.neighbors(i).all(|j| j == i || !member[j]))
}

/// Independent, and every non-member among `eligible` has a member neighbor.
pub fn is_maximal_independent_set<I: Index, T: Weight>(
    graph: &CsrGraph<'_, I, T>,
    member: &[bool],
    eligible: &[bool],
) -> bool {
    is_independent_set(graph, member)
        && (0..graph.num_vertices())
            .filter(|&i| eligible[i] && !member[i])
            .all(|i| graph.neighbors(i).any(|j| j != i && member[j]))
}

/// Every vertex colored in `[0, num_colors)` and no edge joins equal colors.
pub fn is_valid_coloring<I: Index, T: Weight>(graph: &CsrGraph<'_, I, T>, colors: &[I], num_colors: usize) -> bool {
    (0..graph.num_vertices()).all(|i| {
        let c = colors[i];
        c.is_assigned()
            && c.to_index() < num_colors
            && graph.neighbors(i).all(|j| j == i || colors[j] != c)
    })
}

/// Number of distinct non-negative colors present.
pub fn count_colors<I: Index>(colors: &[I]) -> usize {
    let mut seen: Vec<bool> = Vec::new();
    for &c in colors.iter().filter(|c| c.is_assigned()) {
        let c = c.to_index();
        if c >= seen.len() {
            seen.resize(c + 1, false);
        }
        seen[c] = true;
    }
    seen.into_iter().filter(|&b| b).count()
}

/// Build color classes: classes[c] = vertices with color c (uncolored skipped).
pub fn build_color_classes<I: Index>(colors: &[I]) -> Vec<Vec<usize>> {
    let num_colors = colors
        .iter()
        .filter(|c| c.is_assigned())
        .map(|c| c.to_index() + 1)
        .max()
        .unwrap_or(0);
    let mut classes = vec![Vec::new(); num_colors];
    for (i, &c) in colors.iter().enumerate() {
        if c.is_assigned() {
            classes[c.to_index()].push(i);
        }
    }
    classes
}

/// All selected vertices are pairwise more than `k` hops apart.
///
/// Runs a depth-limited BFS from every selected vertex.
pub fn min_separation_ok<I: Index, T: Weight>(graph: &CsrGraph<'_, I, T>, selected: &[bool], k: usize) -> bool {
    let n = graph.num_vertices();
    let mut hop = vec![usize::MAX; n];
    let mut frontier = Vec::new();
    let mut touched = Vec::new();
    for s in (0..n).filter(|&s| selected[s]) {
        hop[s] = 0;
        touched.push(s);
        frontier.push(s);
        let mut depth = 0;
        while !frontier.is_empty() && depth < k {
            depth += 1;
            let mut next = Vec::new();
            for &u in &frontier {
                for v in graph.neighbors(u) {
                    if hop[v] == usize::MAX {
                        if selected[v] {
                            return false;
                        }
                        hop[v] = depth;
                        touched.push(v);
                        next.push(v);
                    }
                }
            }
            frontier = next;
        }
        frontier.clear();
        for &t in &touched {
            hop[t] = usize::MAX;
        }
        touched.clear();
    }
    true
}
