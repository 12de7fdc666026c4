//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::advisory::error::AdvisoryErr;
pub use crate::curve::error::CurveErr;
pub use crate::design::error::DesignErr;
pub use crate::normal::error::NormalDistErr;
pub use crate::power::error::PowerErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SscomputeErr {
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while validating design parameters: {0}")]
    Design(DesignErr),
    #[error("while generating sensitivity curve: {0}")]
    Curve(CurveErr),
    #[error("while computing power: {0}")]
    Power(PowerErr),
    #[error("while requesting commentary: {0}")]
    Advisory(AdvisoryErr),
}
