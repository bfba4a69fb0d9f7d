// Greedy serial maximal independent set

use crate::core::traits::{Index, Label, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use crate::independent::StateTags;
use tracing::debug;

/// Greedy MIS in vertex order.
///
/// Each vertex still `active` when visited joins the set and turns its
/// active neighbors `excluded`. Vertices not `active` on entry are ignored.
/// Returns the number of vertices placed in the set.
pub fn maximal_independent_set_serial<I, T, S>(
    graph: &CsrGraph<'_, I, T>,
    tags: StateTags<S>,
    state: &mut [S],
) -> Result<usize, GraphError>
where
    I: Index,
    T: Weight,
    S: Label,
{
    let n = graph.num_vertices();
    GraphError::check_len("state", n, state.len())?;
    tags.validate()?;

    let mut selected = 0;
    for i in 0..n {
        if state[i] != tags.active {
            continue;
        }
        state[i] = tags.in_set;
        selected += 1;
        for j in graph.neighbors(i) {
            if state[j] == tags.active {
                state[j] = tags.excluded;
            }
        }
    }
    debug!(num_vertices = n, selected, "serial MIS");
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CsrAdjacency;
    use crate::utils::is_maximal_independent_set;

    fn cycle4() -> CsrAdjacency<i32> {
        CsrAdjacency::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
    }

    #[test]
    fn four_cycle_picks_even_vertices() {
        let adj = cycle4();
        let mut state = vec![-1i32; 4];
        let n = maximal_independent_set_serial(&adj.view(), StateTags::default(), &mut state).unwrap();
        assert_eq!(n, 2);
        assert_eq!(state, vec![1, 0, 1, 0]);
    }

    #[test]
    fn inactive_vertices_are_ignored() {
        let adj = cycle4();
        // vertex 0 is frozen with an unrelated tag
        let mut state = vec![7i32, -1, -1, -1];
        let n = maximal_independent_set_serial(&adj.view(), StateTags::default(), &mut state).unwrap();
        assert_eq!(n, 2);
        assert_eq!(state, vec![7, 1, 0, 1]);
        let member: Vec<bool> = state.iter().map(|&s| s == 1).collect();
        let eligible = [false, true, true, true];
        assert!(is_maximal_independent_set(&adj.view(), &member, &eligible));
    }

    #[test]
    fn wrong_state_length() {
        let adj = cycle4();
        let mut state = vec![-1i32; 3];
        let err = maximal_independent_set_serial(&adj.view(), StateTags::default(), &mut state).unwrap_err();
        assert!(matches!(err, GraphError::DimensionMismatch { name: "state", .. }));
    }
}
