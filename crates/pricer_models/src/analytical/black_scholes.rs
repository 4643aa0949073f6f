//! Black-Scholes-Merton closed-form pricing and Greeks.
//!
//! ## Mathematical Formulas
//!
//! With discounted spot `S·e^(-qT)` and discounted strike `K·e^(-rT)`:
//!
//! - **European Call**: S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! - **European Put**: K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//! - **Binary Call**: e^(-rT)·N(d₂)
//! - **Digital Put**: e^(-rT)·N(-d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! At `T <= 0` prices collapse to the intrinsic payoff and Greeks are
//! reported as undefined.

use pricer_core::math::distributions::{norm_cdf, norm_pdf};

use crate::instruments::{OptionContract, OptionType};

/// First and second order price sensitivities.
///
/// Every field is NaN when the Greeks are undefined, which is distinct from
/// a numeric zero. Use [`Greeks::is_defined`] to branch on it.
///
/// At or past maturity the record is [`Greeks::undefined`]. With `T > 0` and
/// `σ <= 0` the NaN `d₁` reaches every field of a vanilla; the zero digital
/// delta survives.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// Time decay
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

impl Greeks {
    /// Greeks with every field set to NaN.
    pub fn undefined() -> Self {
        Self {
            delta: f64::NAN,
            gamma: f64::NAN,
            vega: f64::NAN,
            theta: f64::NAN,
            rho: f64::NAN,
        }
    }

    /// Returns `false` when every field is NaN.
    ///
    /// That covers [`Greeks::undefined`] and vanillas priced with `σ <= 0`.
    pub fn is_defined(&self) -> bool {
        !(self.delta.is_nan()
            && self.gamma.is_nan()
            && self.vega.is_nan()
            && self.theta.is_nan()
            && self.rho.is_nan())
    }
}

/// Computes the analytic price of a contract.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let call = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
/// let put = OptionContract::new(OptionType::EuropeanPut, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = price(&call) - price(&put) - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
pub fn price(contract: &OptionContract) -> f64 {
    let t = contract.expiry();
    if t <= 0.0 {
        return contract.intrinsic_value();
    }

    let d1 = contract.d1();
    let d2 = contract.d2();
    let disc_spot = contract.spot() * (-contract.dividend_yield() * t).exp();
    let discount = contract.discount_factor();
    let disc_strike = contract.strike() * discount;

    match contract.option_type() {
        OptionType::EuropeanCall => disc_spot * norm_cdf(d1) - disc_strike * norm_cdf(d2),
        OptionType::EuropeanPut => disc_strike * norm_cdf(-d2) - disc_spot * norm_cdf(-d1),
        OptionType::BinaryCall => discount * norm_cdf(d2),
        OptionType::DigitalPut => discount * norm_cdf(-d2),
    }
}

/// Computes Vega (∂V/∂σ) = S·e^(-qT)·φ(d₁)·√T.
///
/// Same expression for every variant. NaN at `T <= 0` or `σ <= 0`, where d₁
/// is undefined.
#[inline]
pub fn vega(contract: &OptionContract) -> f64 {
    let t = contract.expiry();
    contract.spot() * (-contract.dividend_yield() * t).exp() * norm_pdf(contract.d1()) * t.sqrt()
}

/// Computes delta, gamma, vega, theta and rho.
///
/// - Delta: call e^(-qT)·N(d₁), put e^(-qT)·(N(d₁) - 1), zero for both
///   digital variants
/// - Gamma: e^(-qT)·φ(d₁) / (S·σ·√T) for every variant
/// - Theta and Rho: the call formula for `EuropeanCall`, the put formula for
///   every other variant
///
/// # Examples
/// ```
/// use pricer_models::analytical::greeks;
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let call = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
/// let g = greeks(&call);
/// assert!((g.delta - 0.6368).abs() < 1e-4);
///
/// let expired = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 0.0, 0.0);
/// assert!(!greeks(&expired).is_defined());
/// ```
pub fn greeks(contract: &OptionContract) -> Greeks {
    let t = contract.expiry();
    if t <= 0.0 {
        return Greeks::undefined();
    }

    let s = contract.spot();
    let k = contract.strike();
    let r = contract.rate();
    let q = contract.dividend_yield();
    let sigma = contract.volatility();
    let sqrt_t = t.sqrt();

    let d1 = contract.d1();
    let d2 = contract.d2();
    let div_discount = (-q * t).exp();
    let discount = contract.discount_factor();
    let is_call = contract.option_type() == OptionType::EuropeanCall;

    let delta = match contract.option_type() {
        OptionType::EuropeanCall => div_discount * norm_cdf(d1),
        OptionType::EuropeanPut => div_discount * (norm_cdf(d1) - 1.0),
        OptionType::BinaryCall | OptionType::DigitalPut => 0.0,
    };

    let gamma = div_discount * norm_pdf(d1) / (s * sigma * sqrt_t);

    // Shared diffusion term: -S·φ(d₁)·σ·e^(-qT) / (2√T)
    let diffusion = -(s * norm_pdf(d1) * sigma * div_discount) / (2.0 * sqrt_t);
    let theta = if is_call {
        diffusion - r * k * discount * norm_cdf(d2) + q * s * div_discount * norm_cdf(d1)
    } else {
        diffusion + r * k * discount * norm_cdf(-d2) - q * s * div_discount * norm_cdf(-d1)
    };

    let rho = if is_call {
        k * t * discount * norm_cdf(d2)
    } else {
        -k * t * discount * norm_cdf(-d2)
    };

    Greeks {
        delta,
        gamma,
        vega: vega(contract),
        theta,
        rho,
    }
}
