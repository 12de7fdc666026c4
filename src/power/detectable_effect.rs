use crate::design::types::DesignParameters;
use crate::error::SscomputeErr;
use crate::power::standardized_se;
use crate::sample_size::compute_ss::critical_values;
use crate::sample_size::types::CriticalValues;

/// Smallest |effect size| detectable at the design's alpha and power when
/// group 1 has `n1` subjects. The design's own effect size is ignored.
pub fn min_detectable_effect(params: &DesignParameters, n1: u64) -> Result<f64, SscomputeErr> {
    params.validate()?;
    let se = standardized_se(n1, params.allocation_ratio)? * params.std_dev;
    let CriticalValues { z_alpha, z_beta } = critical_values(params)?;
    Ok((z_alpha + z_beta) * se)
}
