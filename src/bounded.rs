//! Bounded integer draws.
//!
//! Maps a uniform `W`-bit word `x` onto `[0, range)` by taking the high half
//! of the `2W`-bit product `x * range` (Lemire's multiply-high reduction).
//!
//! - The **unbiased** draws reject `x` only when the low half of the product
//!   lands in the first `2^W mod range` values. The modulo itself is only
//!   computed when the low half is already below `range`, so almost every
//!   draw costs one multiplication and no division.
//! - The **biased** draws skip rejection. Some outputs then occur one more
//!   time out of `2^W` than others, i.e. a bias of at most `range / 2^W`
//!   per value: negligible for small ranges, noticeable as `range`
//!   approaches `2^W`.
//!
//! ## References
//!
//! - Lemire (2019): *Fast Random Integer Generation in an Interval*.

use rand::distr::Distribution;
use rand::Rng;

use crate::error::{RandError, Result};

#[inline]
fn unbiased_u32<R: Rng + ?Sized>(range: u32, rng: &mut R) -> u32 {
    let mut m = u64::from(rng.next_u32()) * u64::from(range);
    let mut low = m as u32;
    if low < range {
        // 2^32 mod range
        let threshold = range.wrapping_neg() % range;
        while low < threshold {
            m = u64::from(rng.next_u32()) * u64::from(range);
            low = m as u32;
        }
    }
    (m >> 32) as u32
}

#[inline]
fn unbiased_u64<R: Rng + ?Sized>(range: u64, rng: &mut R) -> u64 {
    let mut m = u128::from(rng.next_u64()) * u128::from(range);
    let mut low = m as u64;
    if low < range {
        let threshold = range.wrapping_neg() % range;
        while low < threshold {
            m = u128::from(rng.next_u64()) * u128::from(range);
            low = m as u64;
        }
    }
    (m >> 64) as u64
}

#[inline]
fn biased_u32<R: Rng + ?Sized>(range: u32, rng: &mut R) -> u32 {
    ((u64::from(rng.next_u32()) * u64::from(range)) >> 32) as u32
}

#[inline]
fn biased_u64<R: Rng + ?Sized>(range: u64, rng: &mut R) -> u64 {
    ((u128::from(rng.next_u64()) * u128::from(range)) >> 64) as u64
}

/// Width of `[origin, bound)` as an unsigned count.
#[inline]
fn span_i32(origin: i32, bound: i32) -> Result<u32> {
    if bound <= origin {
        return Err(RandError::InvalidBound {
            origin: origin.into(),
            bound: bound.into(),
        });
    }
    Ok(bound.wrapping_sub(origin) as u32)
}

#[inline]
fn span_i64(origin: i64, bound: i64) -> Result<u64> {
    if bound <= origin {
        return Err(RandError::InvalidBound { origin, bound });
    }
    Ok(bound.wrapping_sub(origin) as u64)
}

/// Uniform `i32` in `[0, bound)`.
///
/// # Errors
/// [`RandError::InvalidBound`] if `bound <= 0`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let x = sainome::next_int(10, &mut rng).unwrap();
/// assert!((0..10).contains(&x));
/// ```
#[inline]
pub fn next_int<R: Rng + ?Sized>(bound: i32, rng: &mut R) -> Result<i32> {
    next_int_in(0, bound, rng)
}

/// Uniform `i32` in `[origin, bound)`.
///
/// Any non-empty range is supported, including `[i32::MIN, i32::MAX)`.
///
/// # Errors
/// [`RandError::InvalidBound`] if `bound <= origin`.
#[inline]
pub fn next_int_in<R: Rng + ?Sized>(origin: i32, bound: i32, rng: &mut R) -> Result<i32> {
    let range = span_i32(origin, bound)?;
    Ok(origin.wrapping_add(unbiased_u32(range, rng) as i32))
}

/// Uniform `i64` in `[0, bound)`.
///
/// # Errors
/// [`RandError::InvalidBound`] if `bound <= 0`.
#[inline]
pub fn next_long<R: Rng + ?Sized>(bound: i64, rng: &mut R) -> Result<i64> {
    next_long_in(0, bound, rng)
}

/// Uniform `i64` in `[origin, bound)`.
///
/// # Errors
/// [`RandError::InvalidBound`] if `bound <= origin`.
#[inline]
pub fn next_long_in<R: Rng + ?Sized>(origin: i64, bound: i64, rng: &mut R) -> Result<i64> {
    let range = span_i64(origin, bound)?;
    Ok(origin.wrapping_add(unbiased_u64(range, rng) as i64))
}

/// Fast, slightly biased `i32` in `[0, bound)`.
///
/// One 32-bit draw, no rejection. See the module docs for the size of the
/// bias.
///
/// # Errors
/// [`RandError::InvalidBound`] if `bound <= 0`.
#[inline]
pub fn next_biased_int<R: Rng + ?Sized>(bound: i32, rng: &mut R) -> Result<i32> {
    next_biased_int_in(0, bound, rng)
}

/// Fast, slightly biased `i32` in `[origin, bound)`.
///
/// # Errors
/// [`RandError::InvalidBound`] if `bound <= origin`.
#[inline]
pub fn next_biased_int_in<R: Rng + ?Sized>(origin: i32, bound: i32, rng: &mut R) -> Result<i32> {
    let range = span_i32(origin, bound)?;
    Ok(origin.wrapping_add(biased_u32(range, rng) as i32))
}

/// Fast, slightly biased `i64` in `[0, bound)`.
///
/// # Errors
/// [`RandError::InvalidBound`] if `bound <= 0`.
#[inline]
pub fn next_biased_long<R: Rng + ?Sized>(bound: i64, rng: &mut R) -> Result<i64> {
    next_biased_long_in(0, bound, rng)
}

/// Fast, slightly biased `i64` in `[origin, bound)`.
///
/// # Errors
/// [`RandError::InvalidBound`] if `bound <= origin`.
#[inline]
pub fn next_biased_long_in<R: Rng + ?Sized>(
    origin: i64,
    bound: i64,
    rng: &mut R,
) -> Result<i64> {
    let range = span_i64(origin, bound)?;
    Ok(origin.wrapping_add(biased_u64(range, rng) as i64))
}

/// Uniform `u32` in `[0, bound)` for a bound already known to be non-zero.
#[inline]
pub(crate) fn below_u32<R: Rng + ?Sized>(bound: u32, rng: &mut R) -> u32 {
    debug_assert!(bound > 0);
    unbiased_u32(bound, rng)
}

/// Uniform `u64` in `[0, bound)` for a bound already known to be non-zero.
#[inline]
pub(crate) fn below_u64<R: Rng + ?Sized>(bound: u64, rng: &mut R) -> u64 {
    debug_assert!(bound > 0);
    unbiased_u64(bound, rng)
}

/// Uniform index in `[0, bound)`; takes the 32-bit path whenever it can.
#[inline]
pub(crate) fn index<R: Rng + ?Sized>(bound: usize, rng: &mut R) -> usize {
    debug_assert!(bound > 0);
    match u32::try_from(bound) {
        Ok(b) => unbiased_u32(b, rng) as usize,
        Err(_) => unbiased_u64(bound as u64, rng) as usize,
    }
}

/// Uniform `i32` in a fixed `[origin, bound)`, as a [`Distribution`].
///
/// Use [`Distribution::sample_iter`] for a stream of draws.
///
/// # Examples
/// ```
/// use rand::distr::Distribution;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sainome::BoundedInt;
///
/// let die = BoundedInt::new(1, 7).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let rolls: Vec<i32> = die.sample_iter(&mut rng).take(100).collect();
/// assert!(rolls.iter().all(|r| (1..7).contains(r)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedInt {
    origin: i32,
    range: u32,
}

impl BoundedInt {
    /// Validates `[origin, bound)`.
    pub fn new(origin: i32, bound: i32) -> Result<Self> {
        Ok(Self {
            origin,
            range: span_i32(origin, bound)?,
        })
    }
}

impl Distribution<i32> for BoundedInt {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        self.origin
            .wrapping_add(unbiased_u32(self.range, rng) as i32)
    }
}

/// Biased-but-fast counterpart of [`BoundedInt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiasedInt {
    origin: i32,
    range: u32,
}

impl BiasedInt {
    /// Validates `[origin, bound)`.
    pub fn new(origin: i32, bound: i32) -> Result<Self> {
        Ok(Self {
            origin,
            range: span_i32(origin, bound)?,
        })
    }
}

impl Distribution<i32> for BiasedInt {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        self.origin.wrapping_add(biased_u32(self.range, rng) as i32)
    }
}
