//! Option contract definition.
//!
//! This module provides the immutable contract value consumed by every
//! pricer and solver in the workspace.

use std::fmt;

use super::payoff::OptionType;

/// A single option's market and contract parameters.
///
/// Fields are fixed at construction. "What-if" pricing builds a new contract
/// with one field changed (see [`OptionContract::with_volatility`]).
/// No validation is performed: degenerate inputs propagate through IEEE
/// arithmetic as NaN or infinity.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let contract = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
/// assert!((contract.d1() - 0.35).abs() < 1e-12);
///
/// let bumped = contract.with_volatility(0.3);
/// assert_eq!(bumped.volatility(), 0.3);
/// assert_eq!(contract.volatility(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    dividend_yield: f64,
}

impl OptionContract {
    /// Creates a new contract.
    ///
    /// # Arguments
    /// * `option_type` - Payoff variant
    /// * `spot` - Spot price (S)
    /// * `strike` - Strike price (K)
    /// * `rate` - Continuously-compounded risk-free rate (r)
    /// * `volatility` - Annualised volatility (σ)
    /// * `expiry` - Time to maturity in years (T)
    /// * `dividend_yield` - Continuous dividend yield (q)
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
        dividend_yield: f64,
    ) -> Self {
        Self {
            option_type,
            spot,
            strike,
            rate,
            volatility,
            expiry,
            dividend_yield,
        }
    }

    /// Returns the payoff variant.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns a copy of this contract with a different volatility.
    #[inline]
    pub fn with_volatility(&self, volatility: f64) -> Self {
        Self {
            volatility,
            ..*self
        }
    }

    /// Computes d₁ = (ln(S/K) + (r − q + σ²/2)T) / (σ√T).
    ///
    /// Returns NaN when `T <= 0` or `σ <= 0`.
    #[inline]
    pub fn d1(&self) -> f64 {
        if self.expiry <= 0.0 || self.volatility <= 0.0 {
            return f64::NAN;
        }
        let drift = (self.rate - self.dividend_yield + 0.5 * self.volatility * self.volatility)
            * self.expiry;
        ((self.spot / self.strike).ln() + drift) / (self.volatility * self.expiry.sqrt())
    }

    /// Computes d₂ = d₁ − σ√T.
    ///
    /// NaN whenever d₁ is.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.volatility * self.expiry.sqrt()
    }

    /// Payoff at a terminal underlying price.
    #[inline]
    pub fn payoff(&self, terminal: f64) -> f64 {
        self.option_type.payoff(terminal, self.strike)
    }

    /// Value of the payoff exercised at the current spot.
    #[inline]
    pub fn intrinsic_value(&self) -> f64 {
        self.payoff(self.spot)
    }

    /// Discount factor e^(−rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }
}

impl fmt::Display for OptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{S={:.4}, K={:.4}, r={:.4}, sigma={:.4}, T={:.4}, q={:.4}}}",
            self.option_type,
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.expiry,
            self.dividend_yield
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_call() -> OptionContract {
        OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0)
    }

    #[test]
    fn test_accessors() {
        let c = OptionContract::new(OptionType::DigitalPut, 95.0, 100.0, 0.03, 0.25, 0.5, 0.01);
        assert_eq!(c.option_type(), OptionType::DigitalPut);
        assert_eq!(c.spot(), 95.0);
        assert_eq!(c.strike(), 100.0);
        assert_eq!(c.rate(), 0.03);
        assert_eq!(c.volatility(), 0.25);
        assert_eq!(c.expiry(), 0.5);
        assert_eq!(c.dividend_yield(), 0.01);
    }

    #[test]
    fn test_d1_d2_atm() {
        let c = atm_call();
        assert_relative_eq!(c.d1(), 0.35, epsilon = 1e-12);
        assert_relative_eq!(c.d2(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_nan_on_degenerate_inputs() {
        let c = atm_call();
        assert!(c.with_volatility(0.0).d1().is_nan());
        assert!(c.with_volatility(-0.1).d2().is_nan());

        let expired = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 0.0, 0.0);
        assert!(expired.d1().is_nan());
        assert!(expired.d2().is_nan());
    }

    #[test]
    fn test_with_volatility_leaves_original_untouched() {
        let c = atm_call();
        let bumped = c.with_volatility(0.4);
        assert_eq!(c.volatility(), 0.2);
        assert_eq!(bumped.volatility(), 0.4);
        assert_eq!(bumped.spot(), c.spot());
        assert_eq!(bumped.option_type(), c.option_type());
    }

    #[test]
    fn test_intrinsic_value() {
        let c = OptionContract::new(OptionType::EuropeanPut, 90.0, 100.0, 0.05, 0.2, 1.0, 0.0);
        assert_eq!(c.intrinsic_value(), 10.0);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            atm_call().to_string(),
            "EUROPEAN_CALL {S=100.0000, K=100.0000, r=0.0500, sigma=0.2000, T=1.0000, q=0.0000}"
        );
    }
}
