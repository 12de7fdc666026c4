//----------------------------------------
// curve mod types
//----------------------------------------
use crate::curve::error::CurveErr;
use crate::error::SscomputeErr;
use serde::{Deserialize, Serialize};

/// One point of the sensitivity curve; `effect_size` is rounded to 3
/// decimal places
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub effect_size: f64,
    pub sample_size: u64,
}

/// Range and resolution of the effect size sweep, as multiples of the
/// design's |effect size|
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSettings {
    pub steps: usize,
    pub lower_multiplier: f64,
    pub upper_multiplier: f64,
}

impl Default for CurveSettings {
    fn default() -> Self {
        CurveSettings {
            steps: 20,
            lower_multiplier: 0.2,
            upper_multiplier: 2.5,
        }
    }
}

impl CurveSettings {
    pub fn validate(&self) -> Result<(), SscomputeErr> {
        if self.steps == 0 {
            return Err(CurveErr::NoSteps.into());
        }
        let (lower, upper) = (self.lower_multiplier, self.upper_multiplier);
        if !(lower > 0.0 && upper > lower && upper.is_finite()) {
            return Err(CurveErr::BadMultipliers { lower, upper }.into());
        }
        Ok(())
    }
}
