use crate::design::types::DesignParameters;
use crate::error::SscomputeErr;
use crate::normal::std_normal::{std_normal_cdf, std_normal_quantile};
use crate::power::standardized_se;
use tracing::debug;

/// Power of the design when group 1 has `n1` subjects and group 2 has
/// `allocation_ratio * n1`:
///
/// power = Phi(|delta| / (sd * sqrt((1 + 1/k) / n1)) - z_alpha)
///
/// The far rejection tail of a two-sided test is ignored, matching the
/// sample size formula. With a zero effect this is the one-tail rejection
/// probability under the null.
pub fn achieved_power(params: &DesignParameters, n1: u64) -> Result<f64, SscomputeErr> {
    params.validate()?;
    let se = standardized_se(n1, params.allocation_ratio)? * params.std_dev;
    let z_alpha = std_normal_quantile(1. - params.target_alpha())?.abs();
    let power = std_normal_cdf(params.effect_size.abs() / se - z_alpha);
    debug!(n1, power, "computed achieved power");
    Ok(power)
}
