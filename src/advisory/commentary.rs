use crate::advisory::error::AdvisoryErr;
use crate::advisory::prompt::build_prompt;
use crate::design::types::DesignParameters;
use crate::error::SscomputeErr;
use crate::sample_size::types::SampleSizeResult;
use tracing::warn;

pub const MISSING_CREDENTIALS_MSG: &str = "API Key is missing. Please configure your environment.";
pub const REQUEST_FAILED_MSG: &str =
    "Sorry, I couldn't generate an analysis at this time. Please check your network or API key.";
pub const EMPTY_RESPONSE_MSG: &str = "No analysis could be generated.";

/// A text-generation backend that turns a prompt into prose
pub trait Advisor {
    fn advise(&self, prompt: &str) -> Result<String, SscomputeErr>;
}

/// Best-effort commentary on a result. Never fails: a missing advisor, a
/// failed request, or an empty reply each map to a fixed message.
pub fn commentary(
    advisor: Option<&dyn Advisor>,
    params: &DesignParameters,
    result: &SampleSizeResult,
) -> String {
    let Some(advisor) = advisor else {
        return MISSING_CREDENTIALS_MSG.to_string();
    };
    match advisor.advise(&build_prompt(params, result)) {
        Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_MSG.to_string(),
        Ok(text) => text,
        Err(SscomputeErr::Advisory(AdvisoryErr::MissingCredentials)) => {
            MISSING_CREDENTIALS_MSG.to_string()
        }
        Err(e) => {
            warn!(error = %e, "falling back to canned commentary");
            REQUEST_FAILED_MSG.to_string()
        }
    }
}
