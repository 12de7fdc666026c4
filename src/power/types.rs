//----------------------------------------
// power mod types
//----------------------------------------
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which quantity of a design to solve for, the others held fixed
#[derive(Default, Debug, PartialEq, Clone, Copy, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ComputationTarget {
    #[default]
    SampleSize,
    Power,
    EffectSize,
}
