// Connected-component labeling

use crate::core::traits::{Index, Weight};
use crate::error::GraphError;
use crate::graph::CsrGraph;
use tracing::debug;

/// Label every vertex with a component id in `[0, K)` and return `K`.
///
/// Components are numbered in order of their lowest vertex. The search uses
/// an explicit stack, so deep graphs do not grow the call stack.
pub fn connected_components<I, T>(graph: &CsrGraph<'_, I, T>, components: &mut [I]) -> Result<usize, GraphError>
where
    I: Index,
    T: Weight,
{
    let n = graph.num_vertices();
    GraphError::check_len("components", n, components.len())?;
    components.fill(I::UNASSIGNED);

    let mut stack: Vec<usize> = Vec::new();
    let mut count = 0;
    for root in 0..n {
        if components[root].is_assigned() {
            continue;
        }
        let label = I::from_index(count);
        components[root] = label;
        stack.push(root);
        while let Some(i) = stack.pop() {
            for j in graph.neighbors(i) {
                if !components[j].is_assigned() {
                    components[j] = label;
                    stack.push(j);
                }
            }
        }
        count += 1;
    }
    debug!(num_vertices = n, num_components = count, "connected components");
    Ok(count)
}
