//----------------------------------------
// advisory errors
//----------------------------------------
use crate::error::SscomputeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisoryErr {
    #[error("no credentials configured for the text generation service")]
    MissingCredentials,
    #[error("text generation request failed: {0}")]
    Request(String),
}

impl From<AdvisoryErr> for SscomputeErr {
    fn from(e: AdvisoryErr) -> Self {
        SscomputeErr::Advisory(e)
    }
}
