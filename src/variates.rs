//! Continuous variates: Gaussian, Exponential, Cauchy.
//!
//! Each distribution is a free function over `&mut R` plus a small validated
//! parameter struct implementing [`Distribution`], whose
//! [`sample_iter`](Distribution::sample_iter) is the stream form. Nothing is
//! cached between draws: the polar method's second normal deviate is
//! discarded rather than stashed for the next call.
//!
//! ## References
//!
//! - Marsaglia & Bray (1964): *A convenient method for generating normal
//!   variables* (polar method).
//! - Devroye (1986): *Non-Uniform Random Variate Generation*, §II.2
//!   (inversion for Exponential and Cauchy).

use std::f64::consts::PI;

use rand::distr::Distribution;
use rand::Rng;

use crate::error::{RandError, Result};

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RandError::InvalidParameter { name, value })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(RandError::InvalidParameter { name, value })
    }
}

/// Standard normal deviate (mean 0, stdev 1), Marsaglia polar method.
#[inline]
pub fn next_gaussian<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u = 2.0 * rng.random::<f64>() - 1.0;
        let v = 2.0 * rng.random::<f64>() - 1.0;
        let s = u * u + v * v;
        if s < 1.0 && s > 0.0 {
            return u * (-2.0 * s.ln() / s).sqrt();
        }
    }
}

/// Normal deviate with the given mean and standard deviation.
///
/// `stdev == 0` returns exactly `mean` and consumes no randomness.
///
/// # Errors
/// [`RandError::InvalidParameter`] if `stdev < 0` or either argument is not
/// finite.
pub fn next_gaussian_with<R: Rng + ?Sized>(mean: f64, stdev: f64, rng: &mut R) -> Result<f64> {
    Gaussian::new(mean, stdev).map(|g| g.sample(rng))
}

/// Exponential deviate with rate 1 (mean 1).
///
/// `U` is in `[0, 1)`, so `1 - U` is in `(0, 1]` and the logarithm is
/// always finite.
#[inline]
pub fn next_exponential<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    -(1.0 - rng.random::<f64>()).ln()
}

/// Exponential deviate with the given rate (mean `1 / rate`).
///
/// # Errors
/// [`RandError::InvalidParameter`] unless `rate` is finite and positive.
pub fn next_exponential_with_rate<R: Rng + ?Sized>(rate: f64, rng: &mut R) -> Result<f64> {
    Exponential::new(rate).map(|e| e.sample(rng))
}

/// Cauchy deviate with median 0 and scale 1.
#[inline]
pub fn next_standard_cauchy<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (PI * (rng.random::<f64>() - 0.5)).tan()
}

/// Cauchy deviate: `median + scale * tan(π(U - 0.5))`.
///
/// # Errors
/// [`RandError::InvalidParameter`] unless `scale > 0` and both arguments are
/// finite.
pub fn next_cauchy<R: Rng + ?Sized>(median: f64, scale: f64, rng: &mut R) -> Result<f64> {
    Cauchy::new(median, scale).map(|c| c.sample(rng))
}

/// Normal distribution `N(mean, stdev²)`.
///
/// # Examples
/// ```
/// use rand::distr::Distribution;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sainome::Gaussian;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let biggest = Gaussian::standard()
///     .sample_iter(&mut rng)
///     .take(100)
///     .fold(f64::NEG_INFINITY, f64::max);
/// assert!(biggest.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mean: f64,
    stdev: f64,
}

impl Gaussian {
    /// Validates `stdev >= 0` and finiteness.
    pub fn new(mean: f64, stdev: f64) -> Result<Self> {
        check_finite("mean", mean)?;
        check_finite("stdev", stdev)?;
        if stdev < 0.0 {
            return Err(RandError::InvalidParameter {
                name: "stdev",
                value: stdev,
            });
        }
        Ok(Self { mean, stdev })
    }

    /// `N(0, 1)`.
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            stdev: 1.0,
        }
    }

    /// Mean of the distribution.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation; zero makes every draw equal the mean.
    pub fn stdev(&self) -> f64 {
        self.stdev
    }
}

impl Distribution<f64> for Gaussian {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.stdev == 0.0 {
            return self.mean;
        }
        self.mean + self.stdev * next_gaussian(rng)
    }
}

/// Exponential distribution with rate `λ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Validates `rate > 0`.
    pub fn new(rate: f64) -> Result<Self> {
        check_positive("rate", rate)?;
        Ok(Self { rate })
    }

    /// Rate 1.
    pub fn standard() -> Self {
        Self { rate: 1.0 }
    }

    /// Rate `λ`; the mean is `1 / λ`.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Distribution<f64> for Exponential {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        next_exponential(rng) / self.rate
    }
}

/// Cauchy distribution with a median and a scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cauchy {
    median: f64,
    scale: f64,
}

impl Cauchy {
    /// Validates `scale > 0` and finiteness.
    pub fn new(median: f64, scale: f64) -> Result<Self> {
        check_finite("median", median)?;
        check_positive("scale", scale)?;
        Ok(Self { median, scale })
    }

    /// Location of the distribution, its median.
    pub fn median(&self) -> f64 {
        self.median
    }

    /// Half the interquartile range.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution<f64> for Cauchy {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.median + self.scale * next_standard_cauchy(rng)
    }
}
