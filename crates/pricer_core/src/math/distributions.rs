//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_pdf`: Probability density function (PDF)
//! - `norm_cdf`: Cumulative distribution function (CDF)
//!
//! Both are generic over `T: Float`. The CDF is the Abramowitz–Stegun
//! approximation, so every price and Greek computed downstream carries its
//! ~1e-7 absolute error.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun 7.1.26 constants.
const AS_P: f64 = 0.327_591_1;
const AS_A1: f64 = 0.254_829_592;
const AS_A2: f64 = -0.284_496_736;
const AS_A3: f64 = 1.421_413_741;
const AS_A4: f64 = -1.453_152_027;
const AS_A5: f64 = 1.061_405_429;

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Error function on a non-negative argument via A&S 7.1.26.
///
/// erf(a) ≈ 1 − (a1·t + a2·t² + a3·t³ + a4·t⁴ + a5·t⁵)·e^(−a²), t = 1/(1 + p·a)
#[inline]
fn erf_non_negative<T: Float>(a: T) -> T {
    let one = T::one();
    let t = one / (one + constant::<T>(AS_P) * a);

    // Horner's method
    let poly = constant::<T>(AS_A1)
        + t * (constant::<T>(AS_A2)
            + t * (constant::<T>(AS_A3) + t * (constant::<T>(AS_A4) + t * constant::<T>(AS_A5))));

    one - poly * t * (-a * a).exp()
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = ½·(1 + sign(x)·erf(|x| / √2))
///
/// # Accuracy
/// Absolute error around 1e-7 for all finite x; the result stays in [0, 1].
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = constant::<T>(0.5);
    let erf = erf_non_negative(x.abs() / constant::<T>(std::f64::consts::SQRT_2));
    let signed = if x < T::zero() { -erf } else { erf };
    half * (T::one() + signed)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let exponent = -constant::<T>(0.5) * x * x;
    constant::<T>(FRAC_1_SQRT_2PI) * exponent.exp()
}
