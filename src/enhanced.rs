//! A generator that owns its uniform source and exposes every operation as
//! a method.
//!
//! ```
//! use rand::rngs::StdRng;
//! use sainome::EnhancedRng;
//!
//! let mut rng = EnhancedRng::<StdRng>::seed_from_u64(7);
//! let die = rng.next_int_in(1, 7).unwrap();
//! assert!((1..7).contains(&die));
//!
//! let rolls: Vec<i32> = rng.ints(1, 7).unwrap().take(10).collect();
//! assert_eq!(rolls.len(), 10);
//! ```

use rand::distr::Distribution;
use rand::{RngCore, SeedableRng};

use crate::binomial::{self, Binomial};
use crate::bounded::{self, BiasedInt, BoundedInt};
use crate::error::Result;
use crate::sampling::{self, SampleAlgorithm};
use crate::variates::{self, Cauchy, Exponential, Gaussian};
use crate::{mask, tuples};

/// Wraps a uniform source `R`.
///
/// `EnhancedRng` is itself an [`RngCore`], so it also gets every [`rand::Rng`]
/// method. The inherent [`sample`](Self::sample) (a `k`-of-`n` index draw)
/// shadows `Rng::sample`; call `Rng::sample(&mut rng, dist)` for the latter.
#[derive(Debug, Clone)]
pub struct EnhancedRng<R> {
    inner: R,
}

impl<R: RngCore> EnhancedRng<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    // bounded integers

    pub fn next_int(&mut self, bound: i32) -> Result<i32> {
        bounded::next_int(bound, &mut self.inner)
    }

    pub fn next_int_in(&mut self, origin: i32, bound: i32) -> Result<i32> {
        bounded::next_int_in(origin, bound, &mut self.inner)
    }

    pub fn next_long(&mut self, bound: i64) -> Result<i64> {
        bounded::next_long(bound, &mut self.inner)
    }

    pub fn next_long_in(&mut self, origin: i64, bound: i64) -> Result<i64> {
        bounded::next_long_in(origin, bound, &mut self.inner)
    }

    pub fn next_biased_int(&mut self, bound: i32) -> Result<i32> {
        bounded::next_biased_int(bound, &mut self.inner)
    }

    pub fn next_biased_int_in(&mut self, origin: i32, bound: i32) -> Result<i32> {
        bounded::next_biased_int_in(origin, bound, &mut self.inner)
    }

    pub fn next_biased_long(&mut self, bound: i64) -> Result<i64> {
        bounded::next_biased_long(bound, &mut self.inner)
    }

    pub fn next_biased_long_in(&mut self, origin: i64, bound: i64) -> Result<i64> {
        bounded::next_biased_long_in(origin, bound, &mut self.inner)
    }

    // continuous variates

    pub fn next_gaussian(&mut self) -> f64 {
        variates::next_gaussian(&mut self.inner)
    }

    pub fn next_gaussian_with(&mut self, mean: f64, stdev: f64) -> Result<f64> {
        variates::next_gaussian_with(mean, stdev, &mut self.inner)
    }

    pub fn next_exponential(&mut self) -> f64 {
        variates::next_exponential(&mut self.inner)
    }

    pub fn next_exponential_with_rate(&mut self, rate: f64) -> Result<f64> {
        variates::next_exponential_with_rate(rate, &mut self.inner)
    }

    pub fn next_standard_cauchy(&mut self) -> f64 {
        variates::next_standard_cauchy(&mut self.inner)
    }

    pub fn next_cauchy(&mut self, median: f64, scale: f64) -> Result<f64> {
        variates::next_cauchy(median, scale, &mut self.inner)
    }

    pub fn next_binomial(&mut self, n: u64, p: f64) -> Result<u64> {
        binomial::next_binomial(n, p, &mut self.inner)
    }

    // combinations

    pub fn next_pair(&mut self, bound: u32) -> Result<[u32; 2]> {
        tuples::next_pair(bound, &mut self.inner)
    }

    pub fn next_triple(&mut self, bound: u32) -> Result<[u32; 3]> {
        tuples::next_triple(bound, &mut self.inner)
    }

    pub fn next_windowed_pair(&mut self, bound: u32, window: u32) -> Result<[u32; 2]> {
        tuples::next_windowed_pair(bound, window, &mut self.inner)
    }

    pub fn next_windowed_triple(&mut self, bound: u32, window: u32) -> Result<[u32; 3]> {
        tuples::next_windowed_triple(bound, window, &mut self.inner)
    }

    /// Uniform `k`-subset of `[0, n)`; see [`sampling::sample`].
    pub fn sample(&mut self, n: usize, k: usize) -> Result<Vec<usize>> {
        sampling::sample(n, k, &mut self.inner)
    }

    pub fn sample_into<'a>(&mut self, n: usize, out: &'a mut [usize]) -> Result<&'a mut [usize]> {
        sampling::sample_into(n, out, &mut self.inner)
    }

    pub fn sample_with(
        &mut self,
        algorithm: SampleAlgorithm,
        n: usize,
        k: usize,
    ) -> Result<Vec<usize>> {
        algorithm.sample(n, k, &mut self.inner)
    }

    pub fn sample_with_probability(&mut self, n: usize, p: f64) -> Result<Vec<usize>> {
        sampling::sample_with_probability(n, p, &mut self.inner)
    }

    pub fn mask(&mut self, n: usize) -> Vec<bool> {
        mask::mask(n, &mut self.inner)
    }

    pub fn mask_with_count(&mut self, n: usize, k: usize) -> Result<Vec<bool>> {
        mask::mask_with_count(n, k, &mut self.inner)
    }

    pub fn mask_with_probability(&mut self, n: usize, p: f64) -> Result<Vec<bool>> {
        mask::mask_with_probability(n, p, &mut self.inner)
    }

    // streams

    /// Endless unbiased draws from `[origin, bound)`.
    ///
    /// The bound is validated once, here.
    pub fn ints(&mut self, origin: i32, bound: i32) -> Result<impl Iterator<Item = i32> + '_> {
        Ok(BoundedInt::new(origin, bound)?.sample_iter(&mut self.inner))
    }

    pub fn biased_ints(
        &mut self,
        origin: i32,
        bound: i32,
    ) -> Result<impl Iterator<Item = i32> + '_> {
        Ok(BiasedInt::new(origin, bound)?.sample_iter(&mut self.inner))
    }

    pub fn gaussians(&mut self) -> impl Iterator<Item = f64> + '_ {
        Gaussian::standard().sample_iter(&mut self.inner)
    }

    pub fn exponentials(&mut self) -> impl Iterator<Item = f64> + '_ {
        Exponential::standard().sample_iter(&mut self.inner)
    }

    pub fn cauchys(
        &mut self,
        median: f64,
        scale: f64,
    ) -> Result<impl Iterator<Item = f64> + '_> {
        Ok(Cauchy::new(median, scale)?.sample_iter(&mut self.inner))
    }

    pub fn binomials(&mut self, n: u64, p: f64) -> Result<impl Iterator<Item = u64> + '_> {
        Ok(Binomial::new(n, p)?.sample_iter(&mut self.inner))
    }
}

impl<R: RngCore + SeedableRng> EnhancedRng<R> {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }
}

impl<R: RngCore> From<R> for EnhancedRng<R> {
    fn from(inner: R) -> Self {
        Self::new(inner)
    }
}

impl<R: RngCore> RngCore for EnhancedRng<R> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}
