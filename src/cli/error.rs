//----------------------------------------
// cli errors
//----------------------------------------
use crate::error::SscomputeErr;
use crate::power::types::ComputationTarget;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliErr {
    #[error("{0}")]
    Compute(#[from] SscomputeErr),
    #[error("while reading parameter file: {0}")]
    Io(#[from] std::io::Error),
    #[error("while parsing JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("--n1 is required when solving for {0:?}")]
    MissingGroupSize(ComputationTarget),
}
