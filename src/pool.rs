//! Pool sampling of indices (Goodman & Hedetniemi).
//!
//! Keeps the not-yet-chosen indices in a pool; each step picks a uniform
//! live position, emits it, and moves the last live element into the hole.
//! `k` bounded draws, but `O(n)` time and memory to build the pool.
//!
//! ## References
//!
//! - Goodman & Hedetniemi (1977): *Introduction to the Design and Analysis
//!   of Algorithms*.

use rand::Rng;

use crate::bounded::index;
use crate::error::{check_sample_size, Result};

/// Uniform `k`-subset of `[0, n)` via the pool algorithm, in draw order.
///
/// # Errors
/// [`RandError::InvalidSampleSize`](crate::RandError::InvalidSampleSize) if
/// `k > n`.
pub fn sample_pool<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
    check_sample_size(n, k)?;
    let mut out = vec![0; k];
    fill(n, &mut out, rng);
    Ok(out)
}

/// Pool sampling into a caller buffer; `k` is `out.len()`.
pub fn sample_pool_into<'a, R: Rng + ?Sized>(
    n: usize,
    out: &'a mut [usize],
    rng: &mut R,
) -> Result<&'a mut [usize]> {
    check_sample_size(n, out.len())?;
    fill(n, out, rng);
    Ok(out)
}

/// Requires `out.len() <= n`.
pub(crate) fn fill<R: Rng + ?Sized>(n: usize, out: &mut [usize], rng: &mut R) {
    if out.is_empty() {
        return;
    }
    let mut pool: Vec<usize> = (0..n).collect();
    let mut live = n;
    for slot in out.iter_mut() {
        let j = index(live, rng);
        *slot = pool[j];
        live -= 1;
        pool[j] = pool[live];
    }
}
