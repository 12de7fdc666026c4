//----------------------------------------
// advisory mod
//----------------------------------------
//! Seam for an external text-generation service that narrates a result.
//! The numeric core never calls into this module.
pub mod commentary;
pub mod error;
pub mod prompt;
