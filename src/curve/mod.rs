//----------------------------------------
// curve mod
//----------------------------------------
pub mod error;
pub mod generate;
pub mod types;
