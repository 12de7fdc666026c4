//----------------------------------------
// Root lib
//----------------------------------------
//! Sample size, power, and sensitivity computations for two-group
//! comparisons of means under the normal approximation with a fixed
//! allocation ratio.
//!
//! ```
//! use sscompute::compute::{compute_sample_size, DesignParameters};
//!
//! let res = compute_sample_size(&DesignParameters::default()).unwrap();
//! assert_eq!(res.total_n, 126);
//! ```

/// Text-generation seam for narrating a result
pub mod advisory;
/// Command-line front end
pub mod cli;
/// This module houses the public API for sample size, power, and curve
/// computations
pub mod compute;
pub mod curve;
pub mod design;
/// This module contains error types
pub mod error;
pub mod normal;
pub mod power;
pub mod sample_size;
mod util;
