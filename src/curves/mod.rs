mod range_curve;
mod motor_curve;

pub use range_curve::*;
pub use motor_curve::*;
