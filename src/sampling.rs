//! k-of-n sampling without replacement.
//!
//! Three interchangeable algorithms produce the same distribution (every
//! `k`-subset of `[0, n)` equally likely) at different costs:
//!
//! | algorithm | bounded draws | extra memory | best when |
//! |---|---|---|---|
//! | [`Insertion`](SampleAlgorithm::Insertion) | `k` | none | `k² ≲ n` |
//! | [`Pool`](SampleAlgorithm::Pool) | `k` | `n` | `k < n / 2` |
//! | [`Reservoir`](SampleAlgorithm::Reservoir) | `n - k` | none | `k ≥ n / 2` |
//!
//! [`sample`] picks one with [`SamplingThresholds::select`]. The thresholds
//! are tuning knobs: changing them changes speed, never the distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use tracing::trace;

use crate::binomial::next_binomial;
use crate::error::{check_sample_size, Result};
use crate::{insertion, pool, reservoir};

/// A k-of-n sampling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SampleAlgorithm {
    /// Vitter's Algorithm R.
    Reservoir,
    /// Goodman–Hedetniemi pool.
    Pool,
    /// Cicirello's insertion sampling.
    Insertion,
    /// Chosen per call by [`SamplingThresholds::select`] with default
    /// thresholds.
    #[default]
    Auto,
}

impl SampleAlgorithm {
    /// Replaces `Auto` with the concrete algorithm for `(n, k)`.
    pub fn resolve(self, n: usize, k: usize) -> Self {
        match self {
            Self::Auto => SamplingThresholds::default().select(n, k),
            concrete => concrete,
        }
    }

    /// Draws a uniform `k`-subset of `[0, n)`.
    ///
    /// # Errors
    /// [`RandError::InvalidSampleSize`](crate::RandError::InvalidSampleSize)
    /// if `k > n`.
    pub fn sample<R: Rng + ?Sized>(self, n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
        check_sample_size(n, k)?;
        let mut out = vec![0; k];
        self.fill(n, &mut out, rng);
        Ok(out)
    }

    /// Draws into `out` (`k` is `out.len()`) and returns it.
    pub fn sample_into<'a, R: Rng + ?Sized>(
        self,
        n: usize,
        out: &'a mut [usize],
        rng: &mut R,
    ) -> Result<&'a mut [usize]> {
        check_sample_size(n, out.len())?;
        self.fill(n, out, rng);
        Ok(out)
    }

    fn fill<R: Rng + ?Sized>(self, n: usize, out: &mut [usize], rng: &mut R) {
        match self.resolve(n, out.len()) {
            Self::Reservoir => reservoir::fill(n, out, rng),
            Self::Pool => pool::fill(n, out, rng),
            Self::Insertion | Self::Auto => insertion::fill(n, out, rng),
        }
    }
}

/// Tunable constants for adaptive algorithm selection.
///
/// The defaults were chosen by benchmarking; they are not correctness
/// invariants.
///
/// # Examples
/// ```
/// use sainome::{SampleAlgorithm, SamplingThresholds};
///
/// let t = SamplingThresholds::default();
/// assert_eq!(t.select(1_000, 5), SampleAlgorithm::Insertion);
/// assert_eq!(t.select(1_000, 200), SampleAlgorithm::Pool);
/// assert_eq!(t.select(1_000, 900), SampleAlgorithm::Reservoir);
///
/// let eager = t.with_insertion_factor(100.0);
/// assert_eq!(eager.select(1_000, 200), SampleAlgorithm::Insertion);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplingThresholds {
    /// Insertion is used while `k² < insertion_factor · n`.
    pub insertion_factor: f64,
    /// Below `pool_fraction · n` the pool (or insertion) is used, at or
    /// above it the reservoir.
    pub pool_fraction: f64,
}

impl Default for SamplingThresholds {
    fn default() -> Self {
        Self {
            insertion_factor: 2.0,
            pool_fraction: 0.5,
        }
    }
}

impl SamplingThresholds {
    pub fn with_insertion_factor(mut self, factor: f64) -> Self {
        self.insertion_factor = factor;
        self
    }

    pub fn with_pool_fraction(mut self, fraction: f64) -> Self {
        self.pool_fraction = fraction;
        self
    }

    /// The cheapest algorithm for `(n, k)`. Never returns `Auto`.
    pub fn select(&self, n: usize, k: usize) -> SampleAlgorithm {
        let (n_f, k_f) = (n as f64, k as f64);
        let algorithm = if k_f >= self.pool_fraction * n_f {
            SampleAlgorithm::Reservoir
        } else if k_f * k_f < self.insertion_factor * n_f {
            SampleAlgorithm::Insertion
        } else {
            SampleAlgorithm::Pool
        };
        trace!(n, k, ?algorithm, "selected sampling algorithm");
        algorithm
    }

    /// Uniform `k`-subset of `[0, n)` with the algorithm these thresholds
    /// select.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
        check_sample_size(n, k)?;
        self.select(n, k).sample(n, k, rng)
    }

    /// As [`sample`](Self::sample), into a caller buffer.
    pub fn sample_into<'a, R: Rng + ?Sized>(
        &self,
        n: usize,
        out: &'a mut [usize],
        rng: &mut R,
    ) -> Result<&'a mut [usize]> {
        check_sample_size(n, out.len())?;
        self.select(n, out.len()).sample_into(n, out, rng)
    }
}

/// Uniform `k`-subset of `[0, n)`, algorithm chosen for speed.
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
/// let mut rng = StdRng::seed_from_u64(42);
/// let picks = sainome::sample(100, 5, &mut rng).unwrap();
/// assert_eq!(picks.len(), 5);
/// ```
pub fn sample<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
    SampleAlgorithm::Auto.sample(n, k, rng)
}

/// As [`sample`], into a caller buffer; `k` is `out.len()`.
///
/// Returns the same slice it was given, so a hot loop can reuse one buffer.
pub fn sample_into<'a, R: Rng + ?Sized>(
    n: usize,
    out: &'a mut [usize],
    rng: &mut R,
) -> Result<&'a mut [usize]> {
    SampleAlgorithm::Auto.sample_into(n, out, rng)
}

/// Includes each of `0..n` independently with probability `p`.
///
/// Draws the sample size from `Binomial(n, p)`, then a uniform subset of that
/// size, which costs `O(np)` instead of `n` Bernoulli trials.
///
/// # Errors
/// [`RandError::InvalidProbability`](crate::RandError::InvalidProbability)
/// if `p` is outside `[0, 1]`.
pub fn sample_with_probability<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let k = next_binomial(n as u64, p, rng)? as usize;
    sample(n, k, rng)
}
