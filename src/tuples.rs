//! Distinct pairs and triples.
//!
//! Each draw is rejection-free: the second value is drawn from one fewer
//! candidates and shifted past the first, the third from two fewer and
//! shifted past both in sorted order. Every unordered combination is equally
//! likely.
//!
//! Windowed variants add `max - min <= window`. A valid combination either
//! has its minimum (the anchor) in `[0, bound - window)`, in which case the
//! other values are any of the `window` values above the anchor, or lies
//! wholly inside the last `window` values. One bounded draw picks the anchor
//! with weight proportional to the completions it admits, so the result is
//! uniform over all valid windowed combinations.

use rand::Rng;

use crate::bounded::{below_u32, below_u64};
use crate::error::{RandError, Result};

#[inline]
fn pair_unchecked<R: Rng + ?Sized>(bound: u32, rng: &mut R) -> [u32; 2] {
    let a = below_u32(bound, rng);
    let mut b = below_u32(bound - 1, rng);
    if b >= a {
        b += 1;
    }
    [a, b]
}

#[inline]
fn triple_unchecked<R: Rng + ?Sized>(bound: u32, rng: &mut R) -> [u32; 3] {
    let [a, b] = pair_unchecked(bound, rng);
    let mut c = below_u32(bound - 2, rng);
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    if c >= lo {
        c += 1;
    }
    if c >= hi {
        c += 1;
    }
    [a, b, c]
}

fn check_size(bound: u32, k: usize) -> Result<()> {
    if (bound as usize) < k {
        return Err(RandError::InvalidBound {
            origin: 0,
            bound: bound.into(),
        });
    }
    Ok(())
}

/// A window of at least `k - 1` inside `[0, bound)` implies `bound >= k`.
fn check_window(bound: u32, window: u32, k: usize) -> Result<()> {
    if (window as usize) < k - 1 || bound <= window {
        return Err(RandError::InvalidWindow { bound, window, k });
    }
    Ok(())
}

/// Two distinct values in `[0, bound)`, in random order.
///
/// # Errors
/// [`RandError::InvalidBound`] if `bound < 2`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let [a, b] = sainome::next_pair(10, &mut rng).unwrap();
/// assert_ne!(a, b);
/// ```
pub fn next_pair<R: Rng + ?Sized>(bound: u32, rng: &mut R) -> Result<[u32; 2]> {
    check_size(bound, 2)?;
    Ok(pair_unchecked(bound, rng))
}

/// Three distinct values in `[0, bound)`, in random order.
///
/// # Errors
/// [`RandError::InvalidBound`] if `bound < 3`.
pub fn next_triple<R: Rng + ?Sized>(bound: u32, rng: &mut R) -> Result<[u32; 3]> {
    check_size(bound, 3)?;
    Ok(triple_unchecked(bound, rng))
}

/// Two distinct values in `[0, bound)` at most `window` apart.
///
/// # Errors
/// [`RandError::InvalidWindow`] if `window < 1` or `bound <= window`.
pub fn next_windowed_pair<R: Rng + ?Sized>(
    bound: u32,
    window: u32,
    rng: &mut R,
) -> Result<[u32; 2]> {
    check_window(bound, window, 2)?;
    if window == bound - 1 {
        return Ok(pair_unchecked(bound, rng));
    }

    let n = u64::from(bound);
    let w = u64::from(window);
    // Each anchor owns two draws (one per output order) of `w` completions
    // each; the tail owns `w - 1` draws of `w / 2` pairs each.
    let lead = 2 * (n - w);
    let r = below_u64(lead + w - 1, rng);
    if r < lead {
        let a = (r >> 1) as u32;
        let b = a + 1 + below_u32(window, rng);
        return Ok(if r & 1 == 0 { [a, b] } else { [b, a] });
    }

    let offset = bound - window;
    let [a, b] = pair_unchecked(window, rng);
    Ok([a + offset, b + offset])
}

/// Three distinct values in `[0, bound)` with `max - min <= window`, in
/// random order.
///
/// # Errors
/// [`RandError::InvalidWindow`] if `window < 2` or `bound <= window`.
pub fn next_windowed_triple<R: Rng + ?Sized>(
    bound: u32,
    window: u32,
    rng: &mut R,
) -> Result<[u32; 3]> {
    check_window(bound, window, 3)?;
    if window == bound - 1 {
        return Ok(triple_unchecked(bound, rng));
    }

    let n = u64::from(bound);
    let w = u64::from(window);
    // Anchored triples: (n - w) * C(w, 2); tail triples: C(w, 3).
    // Their ratio is 3(n - w) : (w - 2). Each anchor owns three draws, one
    // per output position of the anchor.
    let lead = 3 * (n - w);
    let r = below_u64(lead + w - 2, rng);
    if r < lead {
        let a = (r / 3) as u32;
        let [b, c] = pair_unchecked(window, rng);
        let mut t = [a, a + 1 + b, a + 1 + c];
        t.swap(0, (r % 3) as usize);
        return Ok(t);
    }

    let offset = bound - window;
    let [a, b, c] = triple_unchecked(window, rng);
    Ok([a + offset, b + offset, c + offset])
}
