//! End-to-end scenarios for amg-graph
//!
//! Small hand-checked graphs run through the public API, from raw CSR arrays
//! to the dispatch contexts.

use amg_graph::coloring::{vertex_coloring_first_fit, vertex_coloring_mis};
use amg_graph::context::{ColoringContext, ColoringKind, MisContext, MisKind};
use amg_graph::error::GraphError;
use amg_graph::graph::{CsrAdjacency, CsrGraph};
use amg_graph::independent::{StateTags, maximal_independent_set_serial, propagate_max};
use amg_graph::parallel::{SerialExecutor, UniverseExecutor};
use amg_graph::traversal::{breadth_first_search, connected_components};
use amg_graph::utils::{build_color_classes, count_colors};

/// 2-D five-point grid of `nx * ny` vertices.
fn grid(nx: usize, ny: usize) -> CsrAdjacency<i32> {
    let mut edges = Vec::new();
    for y in 0..ny {
        for x in 0..nx {
            let v = y * nx + x;
            if x + 1 < nx {
                edges.push((v, v + 1));
            }
            if y + 1 < ny {
                edges.push((v, v + nx));
            }
        }
    }
    CsrAdjacency::from_edges(nx * ny, &edges).unwrap()
}

#[test]
fn four_cycle_serial_mis_from_raw_csr() {
    let row_offset = [0i32, 2, 4, 6, 8];
    let column_index = [1i32, 3, 0, 2, 1, 3, 0, 2];
    let graph: CsrGraph<'_, i32> = CsrGraph::new(4, &row_offset, &column_index).unwrap();
    let mut state = vec![-1i32; 4];
    let selected = maximal_independent_set_serial(&graph, StateTags::default(), &mut state).unwrap();
    assert_eq!(selected, 2);
    assert_eq!(state, vec![1, 0, 1, 0]);
}

#[test]
fn path_components_and_levels() {
    let adj = CsrAdjacency::<i32>::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    let mut comp = vec![0i32; 5];
    assert_eq!(connected_components(&adj.view(), &mut comp).unwrap(), 1);
    let mut order = vec![0i32; 5];
    let mut level = vec![-1i32; 5];
    breadth_first_search(&adj.view(), 0, &mut order, &mut level).unwrap();
    assert_eq!(level, vec![0, 1, 2, 3, 4]);
}

#[test]
fn triangle_and_isolated_vertex() {
    let adj = CsrAdjacency::<i32>::from_edges(4, &[(0, 1), (1, 2), (0, 2)]).unwrap();
    let mut comp = vec![0i32; 4];
    assert_eq!(connected_components(&adj.view(), &mut comp).unwrap(), 2);
    assert_eq!(comp[0], comp[1]);
    assert_eq!(comp[1], comp[2]);
    assert_ne!(comp[2], comp[3]);
}

#[test]
fn star_coloring_survives_first_fit() {
    let adj = CsrAdjacency::<i32>::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
    let mut colors = vec![0i32; 5];
    let stats = vertex_coloring_mis(&adj.view(), &mut colors).unwrap();
    assert_eq!(stats.num_colors, 2);
    for k in 0..stats.num_colors {
        vertex_coloring_first_fit(&adj.view(), &mut colors, k).unwrap();
    }
    assert_eq!(count_colors(&colors), 2);
    assert_eq!(build_color_classes(&colors), vec![vec![0], vec![1, 2, 3, 4]]);
}

#[test]
fn grid_mis_contexts_agree_across_executors() {
    let adj = grid(12, 10);
    let priority: Vec<f64> = (0..120).map(|i| ((i * 37) % 120) as f64).collect();
    for kind in [MisKind::Parallel, MisKind::DistanceK(2)] {
        let ctx = MisContext::new(kind);
        let (a, sa) = ctx.select(&SerialExecutor, &adj.view(), &priority).unwrap();
        let (b, sb) = ctx.select(&UniverseExecutor::default(), &adj.view(), &priority).unwrap();
        assert_eq!(a, b, "{kind:?}");
        assert_eq!(sa, sb, "{kind:?}");
    }
}

#[test]
fn grid_is_two_colored_by_mis_coloring() {
    let adj = grid(6, 6);
    let (colors, stats) = ColoringContext::new(ColoringKind::Mis)
        .color(&SerialExecutor, &adj.view(), &[0.0f64; 36])
        .unwrap();
    assert_eq!(stats.num_colors, 2);
    // checkerboard anchored at vertex 0
    for y in 0..6 {
        for x in 0..6 {
            assert_eq!(colors[y * 6 + x], ((x + y) % 2) as i32);
        }
    }
}

#[test]
fn propagate_max_carries_keys() {
    let adj = CsrAdjacency::<i32>::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    let keys = [0i32, 1, 2];
    let vals = [0.9, 0.2, 0.5];
    let mut keys_out = [0i32; 3];
    let mut vals_out = [0.0; 3];
    propagate_max(&SerialExecutor, &adj.view(), &keys, &mut keys_out, &vals, &mut vals_out).unwrap();
    assert_eq!(keys_out, [0, 0, 2]);
    assert_eq!(vals_out, [0.9, 0.9, 0.5]);
}

#[test]
fn malformed_csr_is_rejected_up_front() {
    let row_offset = [0i32, 2, 1];
    let column_index = [1i32, 0];
    assert!(matches!(
        CsrGraph::<i32>::new(2, &row_offset, &column_index),
        Err(GraphError::MalformedGraph(_))
    ));
    let adj = grid(2, 2);
    let mut short = vec![0i32; 3];
    assert_eq!(
        connected_components(&adj.view(), &mut short),
        Err(GraphError::DimensionMismatch { name: "components", expected: 4, actual: 3 })
    );
}
