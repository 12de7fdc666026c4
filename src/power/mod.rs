//----------------------------------------
// power mod
//----------------------------------------
pub mod achieved_power;
pub mod detectable_effect;
pub mod error;
pub mod types;

use crate::error::SscomputeErr;
use crate::power::error::PowerErr;
use crate::sample_size::compute_ss::allocation_factor;

/// Standard error of the difference in means, in units of sd, when group 1
/// has `n1` subjects and group 2 has k * n1
pub(crate) fn standardized_se(n1: u64, allocation_ratio: f64) -> Result<f64, SscomputeErr> {
    if n1 == 0 {
        return Err(PowerErr::BadGroupSize(n1).into());
    }
    Ok((allocation_factor(allocation_ratio) / n1 as f64).sqrt())
}
