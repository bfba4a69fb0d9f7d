//! Iteration limits shared by the round-based algorithms and the contexts.
//!
//! `IterationOptions` carries the two limits a caller can set: an optional
//! cap on synchronous rounds for the Luby-style independent set solvers, and
//! a cap on outer Lloyd passes for clustering.

/// Round and iteration caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationOptions {
    /// Round cap for parallel independent set solvers (`None` = run to completion)
    pub max_rounds: Option<usize>,

    /// Maximum number of outer Lloyd passes
    pub max_iters: usize,
}

impl Default for IterationOptions {
    fn default() -> Self {
        Self { max_rounds: None, max_iters: 10 }
    }
}

impl IterationOptions {
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }
}
