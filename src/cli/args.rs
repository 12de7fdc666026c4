//! Command-line arguments

use crate::cli::error::CliErr;
use crate::design::types::DesignParameters;
use crate::power::types::ComputationTarget;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sscompute")]
#[command(
    version,
    about = "Sample size, power, and sensitivity for two-group comparisons of means"
)]
pub struct Cli {
    /// Minimum difference in means to detect
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub effect_size: f64,

    /// Anticipated mean of group 1; with --mean2, sets the effect size to
    /// |mean1 - mean2|
    #[arg(
        long,
        requires = "mean2",
        conflicts_with = "effect_size",
        allow_negative_numbers = true
    )]
    pub mean1: Option<f64>,

    /// Anticipated mean of group 2
    #[arg(
        long,
        requires = "mean1",
        conflicts_with = "effect_size",
        allow_negative_numbers = true
    )]
    pub mean2: Option<f64>,

    /// Common standard deviation of the outcome
    #[arg(long, default_value_t = 1.0)]
    pub std_dev: f64,

    /// Type I error rate
    #[arg(short, long, default_value_t = 0.05)]
    pub alpha: f64,

    /// Target power (1 - beta)
    #[arg(short, long, default_value_t = 0.8)]
    pub power: f64,

    /// Use a one-sided test instead of a two-sided one
    #[arg(long)]
    pub one_sided: bool,

    /// Group 2 size over group 1 size
    #[arg(short = 'k', long, default_value_t = 1.0)]
    pub allocation_ratio: f64,

    /// Quantity to solve for
    #[arg(long, value_enum, default_value_t = ComputationTarget::SampleSize)]
    pub solve: ComputationTarget,

    /// Group 1 size, when solving for power or effect size
    #[arg(long)]
    pub n1: Option<u64>,

    /// Number of intervals in the sensitivity sweep
    #[arg(long, default_value_t = 20)]
    pub steps: usize,

    /// Print a JSON document instead of text
    #[arg(long)]
    pub json: bool,

    /// JSON file with design parameters; replaces the design flags
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,
}

impl Cli {
    /// Design parameters from `--params` if given, otherwise from the flags
    pub fn design(&self) -> Result<DesignParameters, CliErr> {
        match &self.params {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&text)?)
            }
            None => {
                let params = DesignParameters {
                    effect_size: self.effect_size,
                    std_dev: self.std_dev,
                    alpha: self.alpha,
                    power: self.power,
                    is_two_sided: !self.one_sided,
                    allocation_ratio: self.allocation_ratio,
                };
                match (self.mean1, self.mean2) {
                    (Some(mean1), Some(mean2)) => Ok(params.with_means(mean1, mean2)?),
                    _ => Ok(params),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_default_design() {
        let cli = Cli::try_parse_from(["sscompute"]).unwrap();
        assert_eq!(cli.design().unwrap(), DesignParameters::default());
        assert_eq!(cli.solve, ComputationTarget::SampleSize);
        assert_eq!(cli.steps, 20);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "sscompute",
            "--effect-size",
            "-0.3",
            "--one-sided",
            "-k",
            "2",
            "--solve",
            "power",
            "--n1",
            "40",
        ])
        .unwrap();
        let params = cli.design().unwrap();
        assert_eq!(params.effect_size, -0.3);
        assert!(!params.is_two_sided);
        assert_eq!(params.allocation_ratio, 2.0);
        assert_eq!(cli.solve, ComputationTarget::Power);
        assert_eq!(cli.n1, Some(40));
    }

    #[test]
    fn effect_size_from_means() {
        let cli =
            Cli::try_parse_from(["sscompute", "--mean1", "-1.5", "--mean2", "2", "--std-dev", "3"])
                .unwrap();
        let params = cli.design().unwrap();
        assert_eq!(params.effect_size, 3.5);
        assert_eq!(params.std_dev, 3.0);
    }

    #[test]
    fn means_flag_rules() {
        // Both means are needed
        assert!(Cli::try_parse_from(["sscompute", "--mean1", "1"]).is_err());
        // Means and an explicit effect size are mutually exclusive
        assert!(Cli::try_parse_from([
            "sscompute",
            "--mean1",
            "1",
            "--mean2",
            "2",
            "--effect-size",
            "0.3"
        ])
        .is_err());
    }

    #[test]
    fn non_finite_mean_error() {
        let cli = Cli::try_parse_from(["sscompute", "--mean1", "inf", "--mean2", "0"]).unwrap();
        assert!(matches!(cli.design(), Err(CliErr::Compute(_))));
    }

    #[test]
    fn reads_params_file() {
        let path = std::env::temp_dir().join(format!("sscompute-params-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"effectSize":1.0,"stdDev":2.0,"alpha":0.05,"power":0.9,"isTwoSided":true,"allocationRatio":1.0}}"#
        )
        .unwrap();
        let cli = Cli::try_parse_from(["sscompute", "--params", path.to_str().unwrap()]).unwrap();
        let params = cli.design().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(params.std_dev, 2.0);
        assert_eq!(params.power, 0.9);
    }

    #[test]
    fn missing_params_file() {
        let cli = Cli::try_parse_from(["sscompute", "--params", "/nonexistent/params.json"]).unwrap();
        assert!(matches!(cli.design(), Err(CliErr::Io(_))));
    }
}
