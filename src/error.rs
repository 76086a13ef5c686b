//! Error types.
//!
//! Every failure in this crate is an argument-validation failure. Checks run
//! before any randomness is consumed and before any caller buffer is written,
//! so an `Err` never leaves partial output behind.

use thiserror::Error;

/// Errors raised for invalid arguments.
///
/// # Examples
/// ```
/// use sainome::RandError;
///
/// let err = RandError::InvalidBound { origin: 5, bound: 5 };
/// assert!(err.to_string().contains("bound"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RandError {
    /// The half-open range `[origin, bound)` is empty.
    #[error("invalid bound: origin ({origin}) must be less than bound ({bound})")]
    InvalidBound {
        /// Inclusive lower end.
        origin: i64,
        /// Exclusive upper end.
        bound: i64,
    },

    /// Cannot draw `k` distinct values out of `n`.
    #[error("invalid sample size: cannot draw {k} distinct values from {n}")]
    InvalidSampleSize {
        /// Population size.
        n: usize,
        /// Requested sample size.
        k: usize,
    },

    /// No combination of `k` values in `[0, bound)` fits the window.
    #[error("invalid window: {k} values in [0, {bound}) within distance {window}")]
    InvalidWindow {
        /// Exclusive upper end of the values.
        bound: u32,
        /// Maximum allowed `max - min`.
        window: u32,
        /// Number of values requested.
        k: usize,
    },

    /// Probability outside `[0, 1]` (or NaN).
    #[error("invalid probability: p = {p} (must be in [0, 1])")]
    InvalidProbability {
        /// The rejected probability.
        p: f64,
    },

    /// A distribution parameter outside its domain.
    #[error("invalid {name}: {value}")]
    InvalidParameter {
        /// Parameter name, e.g. `"stdev"`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandError>;

/// Validates a probability, rejecting NaN.
pub(crate) fn check_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(RandError::InvalidProbability { p })
    }
}

/// Validates drawing `k` distinct values from `[0, n)`.
pub(crate) fn check_sample_size(n: usize, k: usize) -> Result<()> {
    if k > n {
        Err(RandError::InvalidSampleSize { n, k })
    } else {
        Ok(())
    }
}
