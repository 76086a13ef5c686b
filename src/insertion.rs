//! Insertion sampling of indices (Cicirello).
//!
//! Step `i` draws `v` uniformly from the `n - i` values not chosen yet by
//! position: walking the sorted partial result upward, `v` is bumped past
//! every chosen value `<= v`, so it lands on the `v`-th unchosen index
//! without any rejection. The partial result is kept sorted at the back of
//! the output, which makes the walk and the insertion one loop.
//!
//! `k` bounded draws and `O(k²)` expected shifts, no extra memory. Best when
//! `k` is much smaller than `n`. Output is sorted ascending.

use rand::Rng;

use crate::bounded::index;
use crate::error::{check_sample_size, Result};

/// Uniform `k`-subset of `[0, n)` via insertion sampling, sorted ascending.
///
/// # Errors
/// [`RandError::InvalidSampleSize`](crate::RandError::InvalidSampleSize) if
/// `k > n`.
pub fn sample_insertion<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
    check_sample_size(n, k)?;
    let mut out = vec![0; k];
    fill(n, &mut out, rng);
    Ok(out)
}

/// Insertion sampling into a caller buffer; `k` is `out.len()`.
pub fn sample_insertion_into<'a, R: Rng + ?Sized>(
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
    for i in 0..k {
        let mut v = index(n - i, rng);
        // out[k - i..] holds the i values chosen so far, ascending.
        let mut j = k - i;
        while j < k && v >= out[j] {
            out[j - 1] = out[j];
            v += 1;
            j += 1;
        }
        out[j - 1] = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn output_is_sorted_and_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(20);
        for _ in 0..500 {
            let s = sample_insertion(30, 7, &mut rng).unwrap();
            assert!(s.windows(2).all(|w| w[0] < w[1]), "{s:?}");
            assert!(s.iter().all(|&x| x < 30));
        }
    }

    #[test]
    fn full_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        assert_eq!(
            sample_insertion(6, 6, &mut rng).unwrap(),
            vec![0, 1, 2, 3, 4, 5]
        );
        assert!(sample_insertion(6, 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn every_two_subset_of_four_appears_evenly() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let trials = 12_000;
        let mut counts = std::collections::HashMap::new();
        for _ in 0..trials {
            let s = sample_insertion(4, 2, &mut rng).unwrap();
            *counts.entry((s[0], s[1])).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), 6);
        let expected = trials as f64 / 6.0;
        for (pair, &c) in &counts {
            assert!(
                (c as f64 - expected).abs() < 5.0 * (expected * 5.0 / 6.0).sqrt(),
                "{pair:?} drawn {c} times"
            );
        }
    }

    #[test]
    fn into_returns_the_callers_buffer() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut buf = [0usize; 3];
        let ptr = buf.as_ptr();
        let out = sample_insertion_into(1_000_000, &mut buf, &mut rng).unwrap();
        assert_eq!(out.as_ptr(), ptr);
    }
}
