//----------------------------------------
// sample size mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

/// Group sizes required by a design.
///
/// `n1` and `n2` are the ceilings of the exact requirements, so the achieved
/// power is never below the target. The critical values are kept at 3
/// decimal places for display only; nothing downstream reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSizeResult {
    pub n1: u64,
    pub n2: u64,
    pub total_n: u64,
    pub critical_value_alpha: f64,
    pub critical_value_beta: f64,
}

impl SampleSizeResult {
    /// Result reported when there is no effect to detect
    pub fn zero() -> Self {
        SampleSizeResult {
            n1: 0,
            n2: 0,
            total_n: 0,
            critical_value_alpha: 0.0,
            critical_value_beta: 0.0,
        }
    }
}

/// Unrounded |z| values for the significance and power requirements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalValues {
    pub z_alpha: f64,
    pub z_beta: f64,
}
