//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder for
//! single-threaded Monte Carlo pricing.

use super::error::McError;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_samples(10_000)
///     .seed(42)
///     .antithetic(true)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 10_000);
/// assert!(config.antithetic());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of samples (antithetic pairs when `antithetic` is set).
    n_samples: usize,
    /// Seed; zero means entropy-seeded.
    seed: u64,
    /// Whether to pair each draw with its negation.
    antithetic: bool,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the seed (zero means entropy-seeded).
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns whether antithetic variates are used.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Whether repeated runs produce identical results.
    #[inline]
    pub fn is_reproducible(&self) -> bool {
        self.seed != 0
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `McError::InvalidSampleCount` if `n_samples` is 0.
    pub fn validate(&self) -> Result<(), McError> {
        if self.n_samples == 0 {
            return Err(McError::InvalidSampleCount(self.n_samples));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Defaults: 100,000 samples, entropy seed, plain sampling.
#[derive(Clone, Debug)]
pub struct MonteCarloConfigBuilder {
    n_samples: usize,
    seed: u64,
    antithetic: bool,
}

impl Default for MonteCarloConfigBuilder {
    fn default() -> Self {
        Self {
            n_samples: 100_000,
            seed: 0,
            antithetic: false,
        }
    }
}

impl MonteCarloConfigBuilder {
    /// Sets the number of samples.
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    /// Sets the seed; zero selects an entropy-seeded generator.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `McError::InvalidSampleCount` if the sample count is 0.
    pub fn build(self) -> Result<MonteCarloConfig, McError> {
        let config = MonteCarloConfig {
            n_samples: self.n_samples,
            seed: self.seed,
            antithetic: self.antithetic,
        };
        config.validate()?;
        Ok(config)
    }
}
