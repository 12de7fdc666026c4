//----------------------------------------
// curve errors
//----------------------------------------
use crate::error::SscomputeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveErr {
    #[error("number of curve steps should be at least 1")]
    NoSteps,
    #[error(
        "effect size multipliers should satisfy 0 < lower < upper \
        (lower {lower}, upper {upper})"
    )]
    BadMultipliers { lower: f64, upper: f64 },
    #[error(
        "effect size {effect_size} is too large to sweep; \
        the upper end of the range overflows"
    )]
    EffectRangeOverflow { effect_size: f64 },
}

impl From<CurveErr> for SscomputeErr {
    fn from(e: CurveErr) -> Self {
        SscomputeErr::Curve(e)
    }
}
