use crate::curve::error::CurveErr;
use crate::curve::types::{CurvePoint, CurveSettings};
use crate::design::types::DesignParameters;
use crate::error::SscomputeErr;
use crate::sample_size::compute_ss::compute_sample_size;
use crate::util::round::round_to;
use tracing::trace;

const EFFECT_SIZE_PLACES: i32 = 3;

/// Total sample size across a grid of effect sizes from 0.2x to 2.5x the
/// design's |effect size|, 21 points in increasing order of effect size.
/// Everything but the effect size is held fixed.
///
/// Effect sizes are reported at 3 decimal places, so when the grid spacing
/// drops below 0.001 (|effect size| under about 0.009 with the default
/// grid) neighbouring points can share the same reported effect size. The
/// sample sizes are still computed from the unrounded grid values.
pub fn generate_curve(params: &DesignParameters) -> Result<Vec<CurvePoint>, SscomputeErr> {
    generate_curve_with(params, &CurveSettings::default())
}

/// As `generate_curve`, with the grid taken from `settings`.
/// Returns an empty curve when the design's effect size is zero, since there
/// is no baseline to scale around.
pub fn generate_curve_with(
    params: &DesignParameters,
    settings: &CurveSettings,
) -> Result<Vec<CurvePoint>, SscomputeErr> {
    params.validate()?;
    settings.validate()?;
    if params.effect_size == 0.0 {
        return Ok(Vec::new());
    }

    let base = params.effect_size.abs();
    let min_es = base * settings.lower_multiplier;
    let max_es = base * settings.upper_multiplier;
    if !max_es.is_finite() {
        return Err(CurveErr::EffectRangeOverflow {
            effect_size: params.effect_size,
        }
        .into());
    }
    let step_size = (max_es - min_es) / settings.steps as f64;

    (0..=settings.steps)
        .map(|i| {
            let es = min_es + i as f64 * step_size;
            let res = compute_sample_size(&params.with_effect_size(es))?;
            trace!(effect_size = es, total_n = res.total_n, "curve point");
            Ok(CurvePoint {
                effect_size: round_to(es, EFFECT_SIZE_PLACES),
                sample_size: res.total_n,
            })
        })
        .collect()
}
