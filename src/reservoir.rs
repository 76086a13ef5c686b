//! Reservoir sampling of indices.
//!
//! Draws a uniform `k`-subset of `[0, n)` with **Algorithm R** (Vitter,
//! 1985): the reservoir starts as `0..k`, then index `i` replaces slot `j`
//! whenever `j = uniform(0..=i)` falls inside the reservoir, i.e. with
//! probability `k / (i + 1)`.
//!
//! Cost is `n - k` bounded draws and `O(k)` memory, so this is the cheapest
//! of the three algorithms when `k` is a large fraction of `n`.
//!
//! ## References
//!
//! - Vitter (1985): *Random sampling with a reservoir*, ACM TOMS 11(1).

use rand::Rng;

use crate::bounded::index;
use crate::error::{check_sample_size, Result};

/// Uniform `k`-subset of `[0, n)` via Algorithm R.
///
/// # Errors
/// [`RandError::InvalidSampleSize`](crate::RandError::InvalidSampleSize) if
/// `k > n`.
pub fn sample_reservoir<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
    check_sample_size(n, k)?;
    let mut out = vec![0; k];
    fill(n, &mut out, rng);
    Ok(out)
}

/// Algorithm R into a caller buffer; `k` is `out.len()`.
///
/// Returns the same slice it was given.
pub fn sample_reservoir_into<'a, R: Rng + ?Sized>(
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
    let k = out.len();
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = i;
    }
    if k == 0 {
        return;
    }
    for i in k..n {
        let j = index(i + 1, rng);
        if j < k {
            out[j] = i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RandError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn reservoir_keeps_k_distinct_items() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut s = sample_reservoir(100, 5, &mut rng).unwrap();
        assert_eq!(s.len(), 5);
        s.sort_unstable();
        s.dedup();
        assert_eq!(s.len(), 5);
        assert!(s.iter().all(|&x| x < 100));
    }

    #[test]
    fn reservoir_distribution_uniform() {
        // Deterministic chi-squared smoke test for “looks roughly uniform”.
        //
        // Catches a biased replacement index or an off-by-one in the
        // replacement probability without being flaky.
        let n = 100;
        let k = 10;
        let trials = 10_000;
        let mut counts = vec![0; n];

        for t in 0..trials {
            let mut rng = ChaCha8Rng::seed_from_u64(t as u64);
            for item in sample_reservoir(n, k, &mut rng).unwrap() {
                counts[item] += 1;
            }
        }

        let expected = trials as f64 * (k as f64 / n as f64); // E[count_i]
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                (diff * diff) / expected
            })
            .sum();

        // df = n-1 = 99; E[chi2] ~ df, Var ~ 2*df.
        // Use a conservative cutoff to avoid false positives.
        assert!(
            chi2 < 250.0,
            "chi2 too large (chi2={chi2:.2}, expected~{}). counts={counts:?}",
            n - 1
        );
    }

    #[test]
    fn edge_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(sample_reservoir(10, 0, &mut rng).unwrap().is_empty());
        assert!(sample_reservoir(0, 0, &mut rng).unwrap().is_empty());
        let mut all = sample_reservoir(10, 10, &mut rng).unwrap();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn into_returns_the_callers_buffer() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut buf = [usize::MAX; 4];
        let ptr = buf.as_ptr();
        let out = sample_reservoir_into(20, &mut buf, &mut rng).unwrap();
        assert_eq!(out.as_ptr(), ptr);
        assert!(out.iter().all(|&x| x < 20));
    }

    #[test]
    fn oversized_request_leaves_buffer_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut buf = [7usize; 4];
        assert_eq!(
            sample_reservoir_into(3, &mut buf, &mut rng),
            Err(RandError::InvalidSampleSize { n: 3, k: 4 })
        );
        assert_eq!(buf, [7; 4]);
    }
}
