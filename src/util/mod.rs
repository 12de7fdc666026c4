//----------------------------------------
// util mod
//----------------------------------------
pub mod round;
