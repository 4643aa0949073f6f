//! Property tests for the closed-form pricer and implied-volatility solver.
//!
//! # Test Categories
//!
//! 1. **Parity**: European call minus put equals the discounted forward gap
//! 2. **Bounds**: Digital prices stay within [0, e^(-rT)]
//! 3. **Round trip**: Implied volatility recovers the pricing volatility

use approx::assert_relative_eq;
use pricer_models::analytical::{greeks, price};
use pricer_models::instruments::{OptionContract, OptionType};
use pricer_models::vol::{implied_volatility, ImpliedVolSolver, SolveMethod};
use proptest::prelude::*;

// ============================================================================
// Property-based tests
// ============================================================================

proptest! {
    #[test]
    fn prop_put_call_parity(
        spot in 20.0_f64..200.0,
        strike in 20.0_f64..200.0,
        rate in -0.02_f64..0.1,
        sigma in 0.05_f64..1.0,
        expiry in 0.05_f64..3.0,
        dividend in 0.0_f64..0.05,
    ) {
        let call = OptionContract::new(OptionType::EuropeanCall, spot, strike, rate, sigma, expiry, dividend);
        let put = OptionContract::new(OptionType::EuropeanPut, spot, strike, rate, sigma, expiry, dividend);

        let forward_gap = spot * (-dividend * expiry).exp() - strike * (-rate * expiry).exp();
        prop_assert!((price(&call) - price(&put) - forward_gap).abs() < 1e-6);
    }

    #[test]
    fn prop_digital_prices_bounded(
        spot in 50.0_f64..150.0,
        sigma in 0.05_f64..1.0,
        expiry in 0.05_f64..3.0,
    ) {
        let discount = (-0.05 * expiry).exp();
        for option_type in [OptionType::BinaryCall, OptionType::DigitalPut] {
            let p = price(&OptionContract::new(option_type, spot, 100.0, 0.05, sigma, expiry, 0.0));
            prop_assert!(p >= 0.0 && p <= discount + 1e-12);
        }
    }

    #[test]
    fn prop_call_delta_in_unit_interval(
        spot in 50.0_f64..150.0,
        sigma in 0.05_f64..1.0,
    ) {
        let g = greeks(&OptionContract::new(OptionType::EuropeanCall, spot, 100.0, 0.05, sigma, 1.0, 0.0));
        prop_assert!((0.0..=1.0).contains(&g.delta));
        prop_assert!(g.gamma >= 0.0);
        prop_assert!(g.vega >= 0.0);
    }

    #[test]
    fn prop_implied_vol_round_trip(
        strike in 80.0_f64..120.0,
        sigma in 0.1_f64..0.8,
    ) {
        let contract = OptionContract::new(OptionType::EuropeanCall, 100.0, strike, 0.05, sigma, 1.0, 0.0);
        let iv = implied_volatility(&contract, price(&contract), 1e-9, 300);
        prop_assert!(iv.is_some());
        prop_assert!((iv.unwrap_or(f64::NAN) - sigma).abs() < 1e-4);
    }
}

// ============================================================================
// Scenario tests
// ============================================================================

#[test]
fn test_reference_call_scenario() {
    let call = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
    assert_relative_eq!(price(&call), 10.4506, epsilon = 1e-4);

    let g = greeks(&call);
    assert_relative_eq!(g.delta, 0.6368, epsilon = 1e-4);
    assert_relative_eq!(g.vega, 37.52, epsilon = 1e-2);
}

#[test]
fn test_implied_vol_round_trip_with_wrong_seed_volatility() {
    // The contract's own volatility only seeds Newton; bisection ignores it
    let truth = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
    let report = ImpliedVolSolver::new(1e-6, 200).solve_detailed(&truth.with_volatility(0.9), price(&truth));

    assert_eq!(report.method, SolveMethod::Bisection);
    assert_relative_eq!(report.volatility.unwrap(), 0.2, epsilon = 1e-4);
}

#[test]
fn test_binary_call_iv_round_trip() {
    let truth = OptionContract::new(OptionType::BinaryCall, 100.0, 90.0, 0.05, 0.3, 1.0, 0.0);
    let iv = implied_volatility(&truth, price(&truth), 1e-10, 300).unwrap();
    assert_relative_eq!(iv, 0.3, epsilon = 1e-4);
}
