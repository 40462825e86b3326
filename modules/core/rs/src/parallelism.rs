use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::{Result, WrapErr};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Maps the requested number of threads onto `[1, max]`.
/// Negative values count back from the maximum, e.g. -1 means "all threads", -2 "all but one".
fn clamp_threads(requested: isize, max: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (max + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(max) as usize,
    }
}

/// Number of worker threads to use for the requested value.
pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()?.get() as isize;
    Ok(clamp_threads(requested, max))
}

/// Builds a dedicated thread pool sized by [`available`].
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = available(requested)?;
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .wrap_err_with(|| format!("Failed to build a thread pool with {threads} threads"))
}
