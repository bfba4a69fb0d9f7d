//! Round-synchronous execution of per-vertex work.
//!
//! Every data-parallel kernel in this crate evaluates a pure function of a
//! round-start snapshot for each vertex and collects the results into a
//! fresh round-end buffer. A `RoundExecutor` decides how that map runs;
//! returning from `map_vertices` is the barrier between rounds.

pub trait RoundExecutor: Sync {
    /// Number of workers evaluating a round.
    fn size(&self) -> usize;

    /// Evaluate `f(i)` for every `i` in `0..n`, in vertex order in the output.
    fn map_vertices<U, F>(&self, n: usize, f: F) -> Vec<U>
    where
        U: Send,
        F: Fn(usize) -> U + Sync + Send;

    /// Number of vertices for which `pred` holds.
    fn count_vertices<F>(&self, n: usize, pred: F) -> usize
    where
        F: Fn(usize) -> bool + Sync + Send,
    {
        self.map_vertices(n, pred).into_iter().filter(|&b| b).count()
    }
}

/// Evaluates rounds on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialExecutor;

impl RoundExecutor for SerialExecutor {
    fn size(&self) -> usize {
        1
    }

    fn map_vertices<U, F>(&self, n: usize, f: F) -> Vec<U>
    where
        U: Send,
        F: Fn(usize) -> U + Sync + Send,
    {
        (0..n).map(f).collect()
    }
}

#[cfg(feature = "rayon")]
pub mod rayon_exec;
#[cfg(feature = "rayon")]
pub use rayon_exec::RayonExecutor;

/// The executor selected by the enabled features.
#[derive(Debug, Clone, Copy)]
pub enum UniverseExecutor {
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
    Serial(SerialExecutor),
}

impl Default for UniverseExecutor {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            UniverseExecutor::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            UniverseExecutor::Serial(SerialExecutor)
        }
    }
}

impl RoundExecutor for UniverseExecutor {
    fn size(&self) -> usize {
        match self {
            #[cfg(feature = "rayon")]
            UniverseExecutor::Rayon(exec) => exec.size(),
            UniverseExecutor::Serial(exec) => exec.size(),
        }
    }

    fn map_vertices<U, F>(&self, n: usize, f: F) -> Vec<U>
    where
        U: Send,
        F: Fn(usize) -> U + Sync + Send,
    {
        match self {
            #[cfg(feature = "rayon")]
            UniverseExecutor::Rayon(exec) => exec.map_vertices(n, f),
            UniverseExecutor::Serial(exec) => exec.map_vertices(n, f),
        }
    }

    fn count_vertices<F>(&self, n: usize, pred: F) -> usize
    where
        F: Fn(usize) -> bool + Sync + Send,
    {
        match self {
            #[cfg(feature = "rayon")]
            UniverseExecutor::Rayon(exec) => exec.count_vertices(n, pred),
            UniverseExecutor::Serial(exec) => exec.count_vertices(n, pred),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_and_default_agree() {
        let serial = SerialExecutor.map_vertices(100, |i| i * i);
        let default = UniverseExecutor::default().map_vertices(100, |i| i * i);
        assert_eq!(serial, default);
        assert_eq!(UniverseExecutor::default().count_vertices(10, |i| i % 3 == 0), 4);
    }
}
