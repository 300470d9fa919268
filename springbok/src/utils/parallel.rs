#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

/// Represents a thread pool wrapper.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool`.
    pub fn new(num_threads: usize) -> Self {
        Self { inner: ThreadPoolBuilder::new().num_threads(num_threads).build().expect("cannot build a thread pool") }
    }

    /// Executes given operation on thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Maps collection and collects results into vector in parallel.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Performs map reduce operations in parallel.
pub fn map_reduce<'a, T, S, FM, FR, FD, R>(source: &'a S, map_op: FM, default_op: FD, reduce_op: FR) -> R
where
    T: Send + Sync,
    S: IntoParallelRefIterator<'a, Item = T> + ?Sized,
    FM: Fn(T) -> R + Sync + Send,
    FR: Fn(R, R) -> R + Sync + Send,
    FD: Fn() -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).reduce(default_op, reduce_op)
}
