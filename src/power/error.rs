//----------------------------------------
// power errors
//----------------------------------------
use crate::error::SscomputeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PowerErr {
    #[error("group 1 size should be at least 1; got {0}")]
    BadGroupSize(u64),
}

impl From<PowerErr> for SscomputeErr {
    fn from(e: PowerErr) -> Self {
        SscomputeErr::Power(e)
    }
}
