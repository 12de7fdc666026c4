use crate::cli::error::CliErr;
use crate::curve::generate::generate_curve_with;
use crate::curve::types::{CurvePoint, CurveSettings};
use crate::design::types::DesignParameters;
use crate::power::achieved_power::achieved_power;
use crate::power::detectable_effect::min_detectable_effect;
use crate::power::types::ComputationTarget;
use crate::sample_size::compute_ss::compute_sample_size;
use crate::sample_size::types::SampleSizeResult;
use serde::Serialize;

/// Everything one invocation computes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub target: ComputationTarget,
    pub params: DesignParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SampleSizeResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub curve: Vec<CurvePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n1: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achieved_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_detectable_effect: Option<f64>,
}

pub fn build_report(
    params: &DesignParameters,
    target: ComputationTarget,
    n1: Option<u64>,
    steps: usize,
) -> Result<Report, CliErr> {
    let mut report = Report {
        target,
        params: *params,
        result: None,
        curve: Vec::new(),
        n1,
        achieved_power: None,
        min_detectable_effect: None,
    };
    match target {
        ComputationTarget::SampleSize => {
            let settings = CurveSettings {
                steps,
                ..Default::default()
            };
            report.result = Some(compute_sample_size(params)?);
            report.curve = generate_curve_with(params, &settings)?;
        }
        ComputationTarget::Power => {
            let n1 = n1.ok_or(CliErr::MissingGroupSize(target))?;
            report.achieved_power = Some(achieved_power(params, n1)?);
        }
        ComputationTarget::EffectSize => {
            let n1 = n1.ok_or(CliErr::MissingGroupSize(target))?;
            report.min_detectable_effect = Some(min_detectable_effect(params, n1)?);
        }
    }
    Ok(report)
}
