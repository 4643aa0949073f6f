//! Monte Carlo pricer for European-style payoffs.
//!
//! Terminal prices follow the risk-neutral lognormal law
//!
//! ```text
//! S_T = S·exp((r − q − σ²/2)·T + σ·√T·z)
//! ```
//!
//! with one Box–Muller draw `z` per sample. Payoffs are accumulated into a
//! running [`PayoffSum`] and discounted once at the end; no sample array is
//! kept and no variance estimate is produced.

use pricer_core::types::PricingError;
use pricer_models::instruments::OptionContract;

use super::config::MonteCarloConfig;
use super::error::McError;
use crate::rng::PricerRng;

/// Raw (undiscounted) payoff accumulator.
///
/// Partial sums from independent workers combine with [`PayoffSum::merge`];
/// discounting happens once on the combined total.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PayoffSum {
    /// Sum of payoffs.
    pub sum: f64,
    /// Number of samples accumulated.
    pub count: u64,
}

impl PayoffSum {
    /// Combines two partial sums.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            count: self.count + other.count,
        }
    }

    /// `discount · sum / count`, or NaN when nothing was accumulated.
    #[inline]
    pub fn discounted_mean(&self, discount: f64) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        discount * (self.sum / self.count as f64)
    }
}

/// Maps standard normal draws to terminal prices for one contract.
#[derive(Clone, Copy, Debug)]
struct TerminalLaw {
    spot: f64,
    drift: f64,
    diffusion: f64,
}

impl TerminalLaw {
    fn new(contract: &OptionContract) -> Self {
        let sigma = contract.volatility();
        let t = contract.expiry();
        Self {
            spot: contract.spot(),
            drift: (contract.rate() - contract.dividend_yield() - 0.5 * sigma * sigma) * t,
            diffusion: sigma * t.sqrt(),
        }
    }

    #[inline]
    fn terminal(&self, z: f64) -> f64 {
        self.spot * (self.drift + self.diffusion * z).exp()
    }
}

/// Accumulates `n` samples without discounting.
///
/// In antithetic mode each of the `n` iterations draws one `z`, prices the
/// pair `+z`/`−z` and adds the pair average as a single sample, so the
/// returned count is `n` in both modes.
pub fn accumulate(
    contract: &OptionContract,
    n: usize,
    rng: &mut PricerRng,
    antithetic: bool,
) -> PayoffSum {
    let law = TerminalLaw::new(contract);
    let mut sum = 0.0;

    if antithetic {
        for _ in 0..n {
            let z = rng.gen_normal();
            let up = contract.payoff(law.terminal(z));
            let down = contract.payoff(law.terminal(-z));
            sum += 0.5 * (up + down);
        }
    } else {
        for _ in 0..n {
            let z = rng.gen_normal();
            sum += contract.payoff(law.terminal(z));
        }
    }

    PayoffSum {
        sum,
        count: n as u64,
    }
}

/// Monte Carlo price of a contract.
///
/// `seed == 0` seeds from entropy; any other seed is reproducible
/// bit-for-bit. In antithetic mode `sample_count` is the number of pairs.
///
/// # Errors
///
/// `PricingError::InvalidArgument` if `sample_count == 0`.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{OptionContract, OptionType};
/// use pricer_pricing::mc::simulate;
///
/// let call = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
/// let price = simulate(&call, 50_000, 42, true).unwrap();
/// assert!((price - 10.4506).abs() < 0.3);
///
/// assert!(simulate(&call, 0, 42, false).is_err());
/// ```
pub fn simulate(
    contract: &OptionContract,
    sample_count: usize,
    seed: u64,
    antithetic: bool,
) -> Result<f64, PricingError> {
    if sample_count == 0 {
        return Err(McError::InvalidSampleCount(sample_count).into());
    }
    let mut rng = PricerRng::new(seed);
    let total = accumulate(contract, sample_count, &mut rng, antithetic);
    Ok(total.discounted_mean(contract.discount_factor()))
}

/// Draws `n` terminal prices with plain sampling.
///
/// Uses the same seeding policy as [`simulate`]. This is the only path that
/// materialises samples; it feeds histogram rendering.
pub fn terminal_samples(contract: &OptionContract, n: usize, seed: u64) -> Vec<f64> {
    let law = TerminalLaw::new(contract);
    let mut rng = PricerRng::new(seed);
    (0..n).map(|_| law.terminal(rng.gen_normal())).collect()
}

/// Monte Carlo pricer bound to a validated configuration.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{OptionContract, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_samples(20_000)
///     .seed(7)
///     .antithetic(true)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config);
///
/// let put = OptionContract::new(OptionType::EuropeanPut, 100.0, 110.0, 0.03, 0.25, 0.5, 0.0);
/// assert_eq!(pricer.price(&put), pricer.price(&put));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer from a validated configuration.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices a contract; each call starts a fresh generator.
    pub fn price(&self, contract: &OptionContract) -> f64 {
        let mut rng = PricerRng::new(self.config.seed());
        accumulate(contract, self.config.n_samples(), &mut rng, self.config.antithetic())
            .discounted_mean(contract.discount_factor())
    }
}
