//----------------------------------------
// normal distribution errors
//----------------------------------------
use crate::error::SscomputeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
}

impl From<NormalDistErr> for SscomputeErr {
    fn from(e: NormalDistErr) -> Self {
        SscomputeErr::NormalDist(e)
    }
}
