//----------------------------------------
// design parameter errors
//----------------------------------------
use crate::error::SscomputeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignErr {
    #[error("{name} should be {constraint}; got {value}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

impl From<DesignErr> for SscomputeErr {
    fn from(e: DesignErr) -> Self {
        SscomputeErr::Design(e)
    }
}
