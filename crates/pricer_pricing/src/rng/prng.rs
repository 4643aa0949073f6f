//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded PRNG wrapper that offers
//! reproducible uniform draws and Box–Muller normal variates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Monte Carlo simulation random number generator.
///
/// Every simulation call and every parallel worker owns its own instance;
/// there is no shared or global generator.
///
/// # Seeding
///
/// - [`PricerRng::new`] treats seed `0` as "unpredictable" and seeds from
///   operating-system entropy
/// - any nonzero seed yields a fully reproducible sequence
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::new(42);
///
/// let u: f64 = rng.gen_uniform();
/// let z: f64 = rng.gen_normal();
/// assert!((0.0..1.0).contains(&u));
/// assert!(z.is_finite());
/// ```
pub struct PricerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, `None` when entropy-seeded.
    seed: Option<u64>,
}

impl PricerRng {
    /// Creates a generator, seeding from entropy when `seed == 0`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        if seed == 0 {
            Self::from_entropy()
        } else {
            Self::from_seed(seed)
        }
    }

    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// Unlike [`PricerRng::new`], seed `0` is used literally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut rng1 = PricerRng::from_seed(12345);
    /// let mut rng2 = PricerRng::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a generator seeded from operating-system entropy.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Returns the seed used for initialisation, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// assert_eq!(PricerRng::new(42).seed(), Some(42));
    /// assert_eq!(PricerRng::new(0).seed(), None);
    /// ```
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate by Box–Muller.
    ///
    /// z = √(−2·ln u₁)·cos(2π·u₂), consuming exactly two uniform draws.
    /// u₁ is taken as `1 − u` so it lies in (0, 1] and the logarithm stays
    /// finite.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        let u1 = 1.0 - self.gen_uniform();
        let u2 = self.gen_uniform();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}
