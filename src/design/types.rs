//----------------------------------------
// design mod types
//----------------------------------------
use crate::design::error::DesignErr;
use crate::error::SscomputeErr;
use crate::util::round::round_to;
use serde::{Deserialize, Serialize};

const MEAN_DIFFERENCE_PLACES: i32 = 4;

/// Inputs to a two-group, fixed-ratio, normal-approximation design.
///
/// `allocation_ratio` is k = n2 / n1. The sign of `effect_size` only matters
/// for display; every formula uses its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignParameters {
    pub effect_size: f64,
    pub std_dev: f64,
    pub alpha: f64,
    pub power: f64,
    pub is_two_sided: bool,
    pub allocation_ratio: f64,
}

impl Default for DesignParameters {
    fn default() -> Self {
        DesignParameters {
            effect_size: 0.5,
            std_dev: 1.0,
            alpha: 0.05,
            power: 0.8,
            is_two_sided: true,
            allocation_ratio: 1.0,
        }
    }
}

fn check(name: &'static str, value: f64, ok: bool, constraint: &'static str) -> Result<(), SscomputeErr> {
    if ok {
        Ok(())
    } else {
        Err(DesignErr::InvalidParameter {
            name,
            value,
            constraint,
        }
        .into())
    }
}

fn in_unit_interval(x: f64) -> bool {
    x > 0.0 && x < 1.0
}

impl DesignParameters {
    /// Same design with a different effect size
    pub fn with_effect_size(&self, effect_size: f64) -> Self {
        DesignParameters {
            effect_size,
            ..*self
        }
    }

    /// Raw effect size |mean1 - mean2| from two anticipated group means,
    /// rounded to 4 decimal places
    pub fn effect_from_means(mean1: f64, mean2: f64) -> Result<f64, SscomputeErr> {
        check("mean 1", mean1, mean1.is_finite(), "finite")?;
        check("mean 2", mean2, mean2.is_finite(), "finite")?;
        let diff = (mean1 - mean2).abs();
        check("mean difference", diff, diff.is_finite(), "finite")?;
        Ok(round_to(diff, MEAN_DIFFERENCE_PLACES))
    }

    /// Same design with the effect size taken from two group means
    pub fn with_means(&self, mean1: f64, mean2: f64) -> Result<Self, SscomputeErr> {
        Ok(self.with_effect_size(Self::effect_from_means(mean1, mean2)?))
    }

    /// Tail probability each critical value is taken at; two-sided designs
    /// split alpha across both tails
    pub fn target_alpha(&self) -> f64 {
        if self.is_two_sided {
            self.alpha / 2.
        } else {
            self.alpha
        }
    }

    /// Checks every field against the domain the formulas are defined on.
    /// A zero effect size is accepted; callers treat it as "nothing to detect".
    pub fn validate(&self) -> Result<(), SscomputeErr> {
        check(
            "effect size",
            self.effect_size,
            self.effect_size.is_finite(),
            "finite",
        )?;
        check(
            "standard deviation",
            self.std_dev,
            self.std_dev.is_finite() && self.std_dev > 0.0,
            "finite and > 0",
        )?;
        check(
            "alpha",
            self.alpha,
            in_unit_interval(self.alpha),
            "in (0, 1)",
        )?;
        check(
            "power",
            self.power,
            in_unit_interval(self.power),
            "in (0, 1)",
        )?;
        check(
            "allocation ratio",
            self.allocation_ratio,
            self.allocation_ratio.is_finite() && self.allocation_ratio > 0.0,
            "finite and > 0",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_design_is_valid() {
        assert!(DesignParameters::default().validate().is_ok());
    }

    #[test]
    fn zero_effect_is_valid() {
        let params = DesignParameters::default().with_effect_size(0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn bad_std_dev_error() {
        let params = DesignParameters {
            std_dev: 0.0,
            ..Default::default()
        };
        if let Err(e) = params.validate() {
            assert_eq!(
                String::from(
                    "while validating design parameters: \
                     standard deviation should be finite and > 0; got 0"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let base = DesignParameters::default();
        let bad = [
            DesignParameters { std_dev: -1.0, ..base },
            DesignParameters { alpha: 0.0, ..base },
            DesignParameters { alpha: 1.0, ..base },
            DesignParameters { power: 1.0, ..base },
            DesignParameters { power: f64::NAN, ..base },
            DesignParameters { allocation_ratio: 0.0, ..base },
            DesignParameters { allocation_ratio: f64::INFINITY, ..base },
            DesignParameters { effect_size: f64::NAN, ..base },
        ];
        for params in bad {
            assert!(params.validate().is_err(), "{params:?} should be rejected");
        }
    }

    #[test]
    fn target_alpha_splits_two_sided() {
        let two_sided = DesignParameters::default();
        let one_sided = DesignParameters {
            is_two_sided: false,
            ..two_sided
        };
        assert_eq!(two_sided.target_alpha(), 0.025);
        assert_eq!(one_sided.target_alpha(), 0.05);
    }

    #[test]
    fn effect_from_group_means() {
        assert_eq!(DesignParameters::effect_from_means(10.0, 12.5).unwrap(), 2.5);
        assert_eq!(DesignParameters::effect_from_means(3.0, 1.0).unwrap(), 2.0);
        assert_eq!(
            DesignParameters::effect_from_means(0.123456, 0.0).unwrap(),
            0.1235
        );
        let params = DesignParameters::default().with_means(5.0, 5.0).unwrap();
        assert_eq!(params.effect_size, 0.0);
        assert_eq!(params.std_dev, 1.0);
    }

    #[test]
    fn bad_means_error() {
        if let Err(e) = DesignParameters::effect_from_means(f64::NAN, 1.0) {
            assert_eq!(
                String::from(
                    "while validating design parameters: mean 1 should be finite; got NaN"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
        assert!(DesignParameters::effect_from_means(0.0, f64::INFINITY).is_err());
        // Finite means whose difference overflows
        assert!(DesignParameters::effect_from_means(1e308, -1e308).is_err());
        assert!(DesignParameters::default().with_means(1.0, f64::NAN).is_err());
        // Large but representable differences survive rounding
        assert_eq!(DesignParameters::effect_from_means(1e305, 0.0).unwrap(), 1e305);
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{"effectSize":0.3,"stdDev":2.0,"alpha":0.01,"power":0.9,
                       "isTwoSided":false,"allocationRatio":2.0}"#;
        let params: DesignParameters =
            serde_json::from_str(json).expect("failed to parse design parameters");
        assert_eq!(params.effect_size, 0.3);
        assert_eq!(params.allocation_ratio, 2.0);
        assert!(!params.is_two_sided);
    }
}
