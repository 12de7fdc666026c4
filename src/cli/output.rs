//! Plain-text rendering of a report

use crate::cli::report::Report;
use crate::curve::types::CurvePoint;
use crate::design::types::DesignParameters;
use itertools::Itertools;

const BAR_WIDTH: usize = 40;

fn describe_design(params: &DesignParameters) -> String {
    let sides = if params.is_two_sided {
        "two-sided"
    } else {
        "one-sided"
    };
    format!(
        "Design: effect size {}, sd {}, alpha {} ({}), power {}, allocation 1:{}",
        params.effect_size, params.std_dev, params.alpha, sides, params.power, params.allocation_ratio
    )
}

/// Horizontal bar chart of the curve, one row per point, with the row
/// nearest the design's |effect size| marked
pub fn render_curve(curve: &[CurvePoint], design_effect: f64) -> String {
    let max_n = curve.iter().map(|p| p.sample_size).max().unwrap_or(0).max(1);
    let nearest = curve.iter().position_min_by(|a, b| {
        let da = (a.effect_size - design_effect.abs()).abs();
        let db = (b.effect_size - design_effect.abs()).abs();
        da.total_cmp(&db)
    });
    curve
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let len = ((p.sample_size as f64 / max_n as f64) * BAR_WIDTH as f64).ceil() as usize;
            let marker = if Some(i) == nearest { '>' } else { ' ' };
            format!(
                "{marker} {:>8.3} | {:<width$} {}",
                p.effect_size,
                "#".repeat(len),
                p.sample_size,
                width = BAR_WIDTH
            )
        })
        .join("\n")
}

pub fn render_text(report: &Report) -> String {
    let params = &report.params;
    let mut sections = vec![describe_design(params)];

    if let Some(res) = &report.result {
        let alpha_label = if params.is_two_sided {
            "Z_alpha/2"
        } else {
            "Z_alpha"
        };
        let rows = [
            ("Total sample size", res.total_n.to_string()),
            ("Group 1", res.n1.to_string()),
            ("Group 2", res.n2.to_string()),
            (alpha_label, res.critical_value_alpha.to_string()),
            ("Z_beta", res.critical_value_beta.to_string()),
        ];
        sections.push(
            rows.iter()
                .map(|(label, value)| format!("{label:<20}{value}"))
                .join("\n"),
        );
    }
    if !report.curve.is_empty() {
        sections.push(format!(
            "Sensitivity (total sample size by effect size)\n{}",
            render_curve(&report.curve, params.effect_size)
        ));
    }
    if let (Some(n1), Some(power)) = (report.n1, report.achieved_power) {
        sections.push(format!("Power with n1 = {n1}: {power:.4}"));
    }
    if let (Some(n1), Some(mde)) = (report.n1, report.min_detectable_effect) {
        sections.push(format!("Minimum detectable effect with n1 = {n1}: {mde:.4}"));
    }
    format!("{}\n", sections.iter().join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::report::build_report;
    use crate::power::types::ComputationTarget;

    #[test]
    fn summary_lines() {
        let report =
            build_report(&DesignParameters::default(), ComputationTarget::SampleSize, None, 20)
                .unwrap();
        let text = render_text(&report);
        assert!(text.starts_with(
            "Design: effect size 0.5, sd 1, alpha 0.05 (two-sided), power 0.8, allocation 1:1\n"
        ));
        assert!(text.contains("Total sample size   126\n"));
        assert!(text.contains("Z_alpha/2           1.96\n"));
        assert!(text.contains("Z_beta              0.842\n"));
        assert_eq!(text.lines().filter(|l| l.contains(" | ")).count(), 21);
    }

    #[test]
    fn curve_marks_nearest_point() {
        let curve = vec![
            CurvePoint {
                effect_size: 0.25,
                sample_size: 400,
            },
            CurvePoint {
                effect_size: 0.5,
                sample_size: 100,
            },
            CurvePoint {
                effect_size: 1.0,
                sample_size: 25,
            },
        ];
        let rendered = render_curve(&curve, -0.45);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with('>'));
        assert!(lines[0].starts_with(' '));
        assert!(lines[0].contains(&"#".repeat(BAR_WIDTH)));
        assert!(lines[2].ends_with(" 25"));
    }

    #[test]
    fn power_line() {
        let report = build_report(
            &DesignParameters::default(),
            ComputationTarget::Power,
            Some(64),
            20,
        )
        .unwrap();
        let text = render_text(&report);
        assert!(text.contains("\n\nPower with n1 = 64: 0.807"));
        assert!(text.ends_with('\n'));
        assert!(!text.contains("Total sample size"));
    }
}
