//! Binomial variates.
//!
//! Two exact methods, selected by `n · min(p, 1 - p)`:
//!
//! - **BINV** (inversion) below [`BINV_THRESHOLD`]: walk the PMF from 0 using
//!   the ratio `f(x) / f(x - 1) = a / x - s`. Expected work is `O(np)`, which
//!   is bounded by the threshold.
//! - **BTPE** otherwise: acceptance/rejection against a hat made of a
//!   triangle, two parallelograms and two exponential tails, with a squeeze
//!   and a Stirling-series final test. Expected work is `O(1)` in `n`.
//!
//! Both work with `p ≤ 0.5` and mirror the result (`n - x`) otherwise, so
//! `Binomial(n, p)` and `n - Binomial(n, 1 - p)` share one code path.
//!
//! ## References
//!
//! - Kachitvichyanukul & Schmeiser (1988): *Binomial random variate
//!   generation*. CACM 31(2).
//! - The squeeze/Stirling signs follow the GSL implementation.

use std::cmp::Ordering;

use rand::distr::Distribution;
use rand::Rng;
use tracing::trace;

use crate::error::{check_probability, Result};

/// Below this `n · min(p, 1-p)` inversion is used, BTPE above.
pub const BINV_THRESHOLD: f64 = 10.0;

/// Inversion restarts once the walk passes this value. Only reachable through
/// floating-point round-off in the remaining mass.
const BINV_MAX_X: u64 = 110;

/// BTPE evaluates `f(y)` exactly when `|y - mode|` is at most this.
const SQUEEZE_THRESHOLD: i128 = 20;

/// Binomial deviate: the number of successes in `n` trials with success
/// probability `p`.
///
/// The result is always in `[0, n]`. `n == 0`, `p == 0` and `p == 1` are
/// answered without consuming randomness.
///
/// # Errors
/// [`RandError::InvalidProbability`](crate::RandError::InvalidProbability)
/// if `p` is outside `[0, 1]` or NaN.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let x = sainome::next_binomial(100, 0.2, &mut rng).unwrap();
/// assert!(x <= 100);
/// ```
pub fn next_binomial<R: Rng + ?Sized>(n: u64, p: f64, rng: &mut R) -> Result<u64> {
    Binomial::new(n, p).map(|b| b.sample(rng))
}

/// Binomial distribution `B(n, p)`.
///
/// Construction precomputes nothing beyond validation; the BTPE setup is
/// cheap relative to a draw's expected cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// Validates `p ∈ [0, 1]`.
    pub fn new(n: u64, p: f64) -> Result<Self> {
        check_probability(p)?;
        Ok(Self { n, p })
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability of each trial.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution<u64> for Binomial {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let n = self.n;
        if n == 0 || self.p == 0.0 {
            return 0;
        }
        if self.p == 1.0 {
            return n;
        }

        let flipped = self.p > 0.5;
        let p = if flipped { 1.0 - self.p } else { self.p };

        let x = if (n as f64) * p < BINV_THRESHOLD {
            trace!(n, p, "binomial via inversion");
            binv(n, p, rng)
        } else {
            trace!(n, p, "binomial via BTPE");
            btpe(n, p, rng)
        };

        debug_assert!(x <= n);
        if flipped {
            n - x
        } else {
            x
        }
    }
}

/// Inversion. Requires `0 < p <= 0.5`.
fn binv<R: Rng + ?Sized>(n: u64, p: f64, rng: &mut R) -> u64 {
    let q = 1.0 - p;
    let s = p / q;
    let a = (n as f64 + 1.0) * s;
    let r0 = q.powf(n as f64);

    'restart: loop {
        let mut u: f64 = rng.random();
        let mut r = r0;
        let mut x = 0u64;
        while u > r {
            u -= r;
            x += 1;
            if x > BINV_MAX_X || x > n {
                continue 'restart;
            }
            r *= a / (x as f64) - s;
        }
        return x;
    }
}

/// `floor((n + 1) p)` and the fractional part of `(n + 1) p`, exact for
/// every `u64` `n`.
///
/// Requires `0 < p <= 0.5`, so `p = mantissa / 2^shift` with `shift >= 53`.
fn mode_and_fraction(n: u64, p: f64) -> (i128, f64) {
    let bits = p.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, shift) = if exponent == 0 {
        (fraction, 1074)
    } else {
        (fraction | (1u64 << 52), 1075 - exponent)
    };
    // < 2^65 * 2^53, no overflow.
    let product = (u128::from(n) + 1) * u128::from(mantissa);
    if shift >= 128 {
        return (0, product as f64 * 2f64.powi(-shift));
    }
    let mode = product >> shift;
    let rest = product & ((1u128 << shift) - 1);
    (mode as i128, rest as f64 * 2f64.powi(-shift))
}

/// BTPE. Requires `0 < p <= 0.5` and `n * p >= BINV_THRESHOLD`.
///
/// Positions are kept as `f64` offsets from the integer mode `m`, so draws
/// keep unit resolution even where `n` itself no longer fits an `f64`
/// mantissa.
fn btpe<R: Rng + ?Sized>(n: u64, p: f64, rng: &mut R) -> u64 {
    let q = 1.0 - p;
    let n_i = i128::from(n);
    let np = n as f64 * p;
    let npq = np * q;

    // Step 0: setup. `m` is the mode; `x_m = m + 0.5` is the centre of the
    // triangle, so relative to `m` it sits at 0.5.
    let (m, frac) = mode_and_fraction(n, p);
    let m_f = m as f64;
    let p1 = (2.195 * npq.sqrt() - 4.6 * q).floor() + 0.5;
    let x_l = 0.5 - p1;
    let x_r = 0.5 + p1;
    let c = 0.134 + 20.5 / (15.3 + m_f);
    let p2 = p1 * (1.0 + 2.0 * c);

    fn lambda(a: f64) -> f64 {
        a * (1.0 + 0.5 * a)
    }

    let lambda_l = lambda((frac - x_l) / ((m_f + frac) * q + p * (frac - x_l)));
    let lambda_r = lambda((x_r - frac) / ((m_f + x_r) * q));
    let p3 = p2 + c / lambda_l;
    let p4 = p3 + c / lambda_r;

    loop {
        // Step 1: region selection; the triangle accepts immediately.
        let u = rng.random::<f64>() * p4;
        let mut v: f64 = rng.random();
        let y: i128;

        if u <= p1 {
            return (m + (0.5 - p1 * v + u).floor() as i128) as u64;
        } else if u <= p2 {
            // Step 2: parallelograms.
            let x = x_l + (u - p1) / c;
            v = v * c + 1.0 - (x - 0.5).abs() / p1;
            y = m + x.floor() as i128;
            if v > 1.0 || y < 0 || y > n_i {
                continue;
            }
        } else if u <= p3 {
            // Step 3: left exponential tail.
            y = m + (x_l + v.ln() / lambda_l).floor() as i128;
            if y < 0 {
                continue;
            }
            v *= (u - p2) * lambda_l;
        } else {
            // Step 4: right exponential tail.
            y = m + (x_r - v.ln() / lambda_r).floor() as i128;
            if y > n_i {
                continue;
            }
            v *= (u - p3) * lambda_r;
        }

        // Step 5.0: choose how to evaluate f(y).
        let k = (y - m).abs();
        if k <= SQUEEZE_THRESHOLD || (k as f64) >= npq / 2.0 - 1.0 {
            // Step 5.1: f(y) / f(m) by recursion from the mode, with
            // f(i) / f(i - 1) = 1 + ((n + 1) p - i) / (i q).
            let ratio = |i: i128| 1.0 + ((m - i) as f64 + frac) / (i as f64 * q);
            let mut f = 1.0;
            match m.cmp(&y) {
                Ordering::Less => {
                    for i in (m + 1)..=y {
                        f *= ratio(i);
                    }
                }
                Ordering::Greater => {
                    for i in (y + 1)..=m {
                        f /= ratio(i);
                    }
                }
                Ordering::Equal => {}
            }
            if v <= f {
                return y as u64;
            }
            continue;
        }

        // Step 5.2: squeeze ln(v) between bounds on ln(f(y)).
        let k = k as f64;
        let rho = (k / npq) * ((k * (k / 3.0 + 0.625) + 1.0 / 6.0) / npq + 0.5);
        let t = -0.5 * k * k / npq;
        let alpha = v.ln();
        if alpha < t - rho {
            return y as u64;
        }
        if alpha > t + rho {
            continue;
        }

        // Step 5.3: final test with Stirling corrections. The logarithms of
        // ratios near 1 are taken through their integer differences.
        let x1 = (y + 1) as f64;
        let f1 = (m + 1) as f64;
        let z = (n_i + 1 - m) as f64;
        let w = (n_i - y + 1) as f64;
        let d = (m - y) as f64;

        fn stirling(a: f64) -> f64 {
            let a2 = a * a;
            (13860.0 - (462.0 - (132.0 - (99.0 - 140.0 / a2) / a2) / a2) / a2) / a / 166320.0
        }

        let bound = (m_f + 0.5) * (d / x1).ln_1p()
            + ((n_i - m) as f64 + 0.5) * (-d / w).ln_1p()
            - d * ((d + frac - q) / (x1 * q)).ln_1p()
            + stirling(f1)
            + stirling(z)
            - stirling(x1)
            - stirling(w);
        if alpha <= bound {
            return y as u64;
        }
    }
}
