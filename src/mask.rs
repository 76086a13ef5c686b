//! Random boolean masks over `0..n`.

use rand::Rng;

use crate::binomial::next_binomial;
use crate::error::{check_sample_size, Result};
use crate::sampling::sample_into;

/// `n` fair coin flips, 32 per `next_u32`.
pub fn mask<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<bool> {
    let mut out = vec![false; n];
    mask_into(&mut out, rng);
    out
}

/// Fills `out` with fair coin flips.
pub fn mask_into<'a, R: Rng + ?Sized>(out: &'a mut [bool], rng: &mut R) -> &'a mut [bool] {
    for chunk in out.chunks_mut(32) {
        let bits = rng.next_u32();
        for (i, slot) in chunk.iter_mut().enumerate() {
            *slot = (bits >> i) & 1 == 1;
        }
    }
    out
}

/// Exactly `k` trues at a uniformly random `k`-subset of positions.
///
/// # Errors
/// [`RandError::InvalidSampleSize`](crate::RandError::InvalidSampleSize) if
/// `k > n`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let m = sainome::mask_with_count(20, 6, &mut rng).unwrap();
/// assert_eq!(m.iter().filter(|&&b| b).count(), 6);
/// ```
pub fn mask_with_count<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<Vec<bool>> {
    check_sample_size(n, k)?;
    let mut out = vec![false; n];
    mask_with_count_into(k, &mut out, rng)?;
    Ok(out)
}

/// Overwrites `out` with exactly `k` trues; `n` is `out.len()`.
pub fn mask_with_count_into<'a, R: Rng + ?Sized>(
    k: usize,
    out: &'a mut [bool],
    rng: &mut R,
) -> Result<&'a mut [bool]> {
    let n = out.len();
    check_sample_size(n, k)?;
    // Sample whichever side is smaller.
    let (marked, value) = if k <= n / 2 { (k, true) } else { (n - k, false) };
    out.fill(!value);
    let mut picks = vec![0usize; marked];
    for &i in sample_into(n, &mut picks, rng)?.iter() {
        out[i] = value;
    }
    Ok(out)
}

/// Each position true independently with probability `p`.
///
/// # Errors
/// [`RandError::InvalidProbability`](crate::RandError::InvalidProbability)
/// if `p` is outside `[0, 1]`.
pub fn mask_with_probability<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    rng: &mut R,
) -> Result<Vec<bool>> {
    let mut out = vec![false; n];
    mask_with_probability_into(p, &mut out, rng)?;
    Ok(out)
}

/// Overwrites `out`, each position true with probability `p`.
pub fn mask_with_probability_into<'a, R: Rng + ?Sized>(
    p: f64,
    out: &'a mut [bool],
    rng: &mut R,
) -> Result<&'a mut [bool]> {
    let k = next_binomial(out.len() as u64, p, rng)? as usize;
    mask_with_count_into(k, out, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RandError;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn trues(m: &[bool]) -> usize {
        m.iter().filter(|&&b| b).count()
    }

    #[test]
    fn fair_mask_is_balanced() {
        let mut rng = ChaCha8Rng::seed_from_u64(40);
        let n = 100_000;
        let m = mask(n, &mut rng);
        assert_eq!(m.len(), n);
        // sd = sqrt(n) / 2 ~ 158
        let t = trues(&m) as f64;
        assert!((t - 50_000.0).abs() < 1_000.0, "trues={t}");
        assert!(mask(0, &mut rng).is_empty());
    }

    #[test]
    fn fair_mask_uses_one_word_per_32_positions() {
        let mut a = ChaCha8Rng::seed_from_u64(41);
        let mut b = a.clone();
        let _ = mask(65, &mut a);
        for _ in 0..3 {
            b.next_u32();
        }
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn count_mask_has_exactly_k_trues() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for k in 0..=17 {
            let m = mask_with_count(17, k, &mut rng).unwrap();
            assert_eq!(m.len(), 17);
            assert_eq!(trues(&m), k);
        }
    }

    #[test]
    fn count_mask_overwrites_stale_buffer() {
        let mut rng = ChaCha8Rng::seed_from_u64(43);
        let mut buf = [true; 10];
        let ptr = buf.as_ptr();
        let out = mask_with_count_into(2, &mut buf, &mut rng).unwrap();
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(trues(out), 2);

        let mut buf = [false; 10];
        assert_eq!(trues(mask_with_count_into(9, &mut buf, &mut rng).unwrap()), 9);
    }

    #[test]
    fn count_mask_positions_are_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(44);
        let (n, k, trials) = (10, 7, 20_000);
        let mut hits = [0usize; 10];
        for _ in 0..trials {
            for (i, b) in mask_with_count(n, k, &mut rng).unwrap().into_iter().enumerate() {
                hits[i] += usize::from(b);
            }
        }
        let expected = trials as f64 * 0.7;
        for (i, &h) in hits.iter().enumerate() {
            assert!((h as f64 - expected).abs() < 400.0, "position {i}: {h}");
        }
    }

    #[test]
    fn probability_mask() {
        let mut rng = ChaCha8Rng::seed_from_u64(45);
        let m = mask_with_probability(10_000, 0.25, &mut rng).unwrap();
        let t = trues(&m) as f64;
        assert!((t - 2_500.0).abs() < 250.0, "trues={t}");
        assert_eq!(trues(&mask_with_probability(50, 1.0, &mut rng).unwrap()), 50);
        assert_eq!(trues(&mask_with_probability(50, 0.0, &mut rng).unwrap()), 0);
    }

    #[test]
    fn invalid_arguments() {
        let mut rng = ChaCha8Rng::seed_from_u64(46);
        assert_eq!(
            mask_with_count(3, 4, &mut rng),
            Err(RandError::InvalidSampleSize { n: 3, k: 4 })
        );
        assert_eq!(
            mask_with_probability(3, -0.5, &mut rng),
            Err(RandError::InvalidProbability { p: -0.5 })
        );
        let mut buf = [true; 3];
        assert!(mask_with_probability_into(f64::NAN, &mut buf, &mut rng).is_err());
        assert_eq!(buf, [true; 3]);
    }
}
