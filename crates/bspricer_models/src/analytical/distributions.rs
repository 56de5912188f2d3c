//! Standard normal distribution functions.
//!
//! Provides `norm_cdf` and `norm_pdf`, generic over `T: Float`.
//!
//! The CDF is computed as Φ(x) = 0.5·(1 + erf(x/√2)) with the error
//! function evaluated by the Abramowitz & Stegun 7.1.26 rational
//! approximation (maximum absolute error 1.5e-7).

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Error function approximation (Abramowitz & Stegun 7.1.26).
///
/// For x >= 0:
/// ```text
/// erf(x) ≈ 1 - (a1·t + a2·t² + a3·t³ + a4·t⁴ + a5·t⁵)·exp(-x²),
/// t = 1 / (1 + p·x)
/// ```
/// extended to negative arguments by the odd symmetry erf(-x) = -erf(x).
#[inline]
fn erf_approx<T: Float>(x: T) -> T {
    let one = T::one();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);

    // Horner evaluation of the degree-5 polynomial in t
    let poly = t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))));
    let erf_abs = one - poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        -erf_abs
    } else {
        erf_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as Φ(x) = 0.5·(1 + erf(x/√2)).
///
/// The odd symmetry of the underlying erf approximation guarantees
/// Φ(x) + Φ(-x) = 1 exactly, so put-call parity holds to floating-point
/// tolerance for prices built on this function.
///
/// # Accuracy
/// Absolute error at most 1.5e-7 for all finite x.
///
/// # Examples
/// ```
/// use bspricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * (T::one() + erf_approx(x / sqrt_2))
}

/// Standard normal probability density function.
///
/// Computes φ(x) = (1/√(2π))·exp(-x²/2).
///
/// # Examples
/// ```
/// use bspricer_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1/√(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let scale = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    scale * (-half * x * x).exp()
}
