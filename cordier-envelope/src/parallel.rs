//! Parallel processing helpers
//!
//! The circumradius pass is a pure function per cell with no shared state, so
//! it parallelizes trivially; everything downstream of it stays sequential.

use rayon::prelude::*;

/// Inputs shorter than this are processed sequentially; the per-cell work
/// only amortizes the scheduling overhead on larger batches.
pub const PARALLEL_MIN_LEN: usize = 1024;

/// Map over a slice, in parallel when the input is large enough
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    if data.len() < PARALLEL_MIN_LEN {
        data.iter().map(f).collect()
    } else {
        data.par_iter().map(f).collect()
    }
}
