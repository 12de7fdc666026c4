use crate::design::types::DesignParameters;
use crate::sample_size::types::SampleSizeResult;

/// Prompt asking for a short, Markdown-formatted reading of a sample size
/// result
pub fn build_prompt(params: &DesignParameters, result: &SampleSizeResult) -> String {
    let test_type = if params.is_two_sided {
        "Two-sided"
    } else {
        "One-sided"
    };
    format!(
        "You are an expert statistician and data scientist.\n\
         Analyze the following sample size calculation for an A/B test or clinical trial.\n\
         \n\
         **Parameters:**\n\
         - Effect Size (Difference in Means): {effect}\n\
         - Standard Deviation: {sd}\n\
         - Significance Level (alpha): {alpha}\n\
         - Power (1-beta): {power}\n\
         - Test Type: {test_type}\n\
         - Allocation Ratio: 1:{ratio}\n\
         \n\
         **Results:**\n\
         - Required Total Sample Size: {total} ({n1} in group 1, {n2} in group 2)\n\
         \n\
         **Request:**\n\
         1. Briefly interpret the feasibility of this sample size. Is it very large (expensive) or manageable?\n\
         2. Explain the trade-off: What would happen to the sample size if we wanted to detect a smaller effect size (e.g., half of current)?\n\
         3. Provide a short recommendation on whether these parameters seem standard for typical research (e.g., alpha 0.05 and power 0.8 are standard).\n\
         \n\
         Keep the tone professional, encouraging, and concise (under 150 words). Format with Markdown.\n",
        effect = params.effect_size,
        sd = params.std_dev,
        alpha = params.alpha,
        power = params.power,
        ratio = params.allocation_ratio,
        total = result.total_n,
        n1 = result.n1,
        n2 = result.n2,
    )
}
