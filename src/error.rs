use thiserror::Error;

// Unified error type for amg-graph

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("malformed graph: {0}")]
    MalformedGraph(String),
    #[error("buffer `{name}` has length {actual}, expected {expected}")]
    DimensionMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("vertex {vertex} out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },
    #[error("edge weights are required by this algorithm")]
    MissingEdgeWeights,
    #[error("priority of vertex {vertex} is not comparable (NaN)")]
    InvalidPriority { vertex: usize },
    #[error("state tags `active`, `in_set` and `excluded` must be pairwise distinct")]
    InvalidStateTags,
    #[error("value {0} does not fit in the target numeric type")]
    NumericOverflow(usize),
    #[error("invalid cluster configuration: {0}")]
    InvalidClusterConfig(String),
    #[error("cluster {cluster} is not connected")]
    DisconnectedCluster { cluster: usize },
    #[error("no fixed point reached after {iterations} iterations")]
    IterationLimitExceeded { iterations: usize },
}

impl GraphError {
    /// Length check shared by every entry point that takes caller buffers.
    pub(crate) fn check_len(name: &'static str, expected: usize, actual: usize) -> Result<(), GraphError> {
        if expected == actual {
            Ok(())
        } else {
            Err(GraphError::DimensionMismatch { name, expected, actual })
        }
    }
}
