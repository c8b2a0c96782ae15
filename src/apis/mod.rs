pub mod easy_calc;
#[cfg(feature = "sweep")]
pub mod sweep;
