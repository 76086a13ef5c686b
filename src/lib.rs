//! `sainome`: random variates and combinatorial sampling over any uniform
//! source.
//!
//! Every operation borrows a [`rand::Rng`] for the duration of one call, so
//! the same functions work with a seeded ChaCha stream in tests and a
//! thread-local generator in production. [`EnhancedRng`] bundles a source
//! with all of them as methods.
//!
//! Exposed modules:
//! - `bounded`: unbiased and fast-biased integers in `[origin, bound)`.
//! - `variates`: Gaussian, exponential and Cauchy variates.
//! - `binomial`: binomial variates (inversion for small means, BTPE above).
//! - `tuples`: distinct pairs/triples, optionally within a window.
//! - `reservoir`, `pool`, `insertion`: k-of-n sampling algorithms.
//! - `sampling`: adaptive selection among them, plus probability sampling.
//! - `mask`: random boolean masks.
//! - `enhanced`: the [`EnhancedRng`] facade.
//!
//! Invalid arguments are reported as [`RandError`] before any randomness is
//! consumed or any caller buffer is written.

#![forbid(unsafe_code)]

pub mod binomial;
pub mod bounded;
pub mod enhanced;
pub mod error;
pub mod insertion;
pub mod mask;
pub mod pool;
pub mod reservoir;
pub mod sampling;
pub mod tuples;
pub mod variates;

pub use binomial::{next_binomial, Binomial};
pub use bounded::{
    next_biased_int, next_biased_int_in, next_biased_long, next_biased_long_in, next_int,
    next_int_in, next_long, next_long_in, BiasedInt, BoundedInt,
};
pub use enhanced::EnhancedRng;
pub use error::{RandError, Result};
pub use insertion::{sample_insertion, sample_insertion_into};
pub use mask::{
    mask, mask_into, mask_with_count, mask_with_count_into, mask_with_probability,
    mask_with_probability_into,
};
pub use pool::{sample_pool, sample_pool_into};
pub use reservoir::{sample_reservoir, sample_reservoir_into};
pub use sampling::{
    sample, sample_into, sample_with_probability, SampleAlgorithm, SamplingThresholds,
};
pub use tuples::{next_pair, next_triple, next_windowed_pair, next_windowed_triple};
pub use variates::{
    next_cauchy, next_exponential, next_exponential_with_rate, next_gaussian,
    next_gaussian_with, next_standard_cauchy, Cauchy, Exponential, Gaussian,
};
