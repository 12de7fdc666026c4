//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::curve::generate::{generate_curve, generate_curve_with};
pub use crate::curve::types::{CurvePoint, CurveSettings};
pub use crate::design::types::DesignParameters;
pub use crate::normal::std_normal::{std_normal_cdf, std_normal_quantile};
pub use crate::power::achieved_power::achieved_power;
pub use crate::power::detectable_effect::min_detectable_effect;
pub use crate::power::types::ComputationTarget;
pub use crate::sample_size::compute_ss::{compute_sample_size, critical_values};
pub use crate::sample_size::types::{CriticalValues, SampleSizeResult};
