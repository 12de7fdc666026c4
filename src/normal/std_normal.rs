use crate::error::SscomputeErr;
use crate::normal::error::NormalDistErr;
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

// Acklam (2003) rational approximation coefficients; absolute error of the
// approximation is below 1.15e-9 over (0, 1).
#[allow(clippy::excessive_precision)]
const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
#[allow(clippy::excessive_precision)]
const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
#[allow(clippy::excessive_precision)]
const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
#[allow(clippy::excessive_precision)]
const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

const P_LOW: f64 = 0.02425;
const P_HIGH: f64 = 1.0 - P_LOW;

/// Standard normal CDF, Φ(z)
pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

fn tail_ratio(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}

// Assumes p is strictly inside (0, 1)
fn std_normal_quantile_helper(p: f64) -> f64 {
    if p < P_LOW {
        // Lower tail region
        let q = (-2.0 * p.ln()).sqrt();
        return tail_ratio(q);
    }
    if p > P_HIGH {
        // Upper tail region
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        return -tail_ratio(q);
    }
    // Central region; q = 0 at the median zeroes the numerator
    let q = p - 0.5;
    let r = q * q;
    (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
        / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
}

/// Inverse of the standard normal CDF: the z such that Φ(z) = p.
///
/// No refinement step is applied, so the result carries the approximation
/// error of the rational fit. `p` must lie strictly inside (0, 1); the
/// endpoints (and NaN) are rejected rather than mapped to infinities.
pub fn std_normal_quantile(p: f64) -> Result<f64, SscomputeErr> {
    // Written so that NaN fails the check as well
    if !(p > 0.0 && p < 1.0) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    Ok(std_normal_quantile_helper(p))
}
