// rayon-based round execution

use rayon::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct RayonExecutor;

impl RayonExecutor {
    /// Use whatever global pool rayon already has.
    pub fn new() -> Self {
        RayonExecutor
    }

    /// Size the global pool once; later calls keep the existing pool.
    /// `None` uses one thread per logical CPU.
    pub fn with_threads(threads: Option<usize>) -> Self {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads.unwrap_or_else(num_cpus::get))
            .build_global()
            .ok();
        RayonExecutor
    }
}

impl super::RoundExecutor for RayonExecutor {
    fn size(&self) -> usize {
        rayon::current_num_threads()
    }

    fn map_vertices<U, F>(&self, n: usize, f: F) -> Vec<U>
    where
        U: Send,
        F: Fn(usize) -> U + Sync + Send,
    {
        (0..n).into_par_iter().map(f).collect()
    }

    fn count_vertices<F>(&self, n: usize, pred: F) -> usize
    where
        F: Fn(usize) -> bool + Sync + Send,
    {
        (0..n).into_par_iter().filter(|&i| pred(i)).count()
    }
}
