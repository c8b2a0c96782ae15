mod environment;
mod mass;
mod battery;
mod propulsion;
mod drivetrain;

pub use environment::*;
pub use mass::*;
pub use battery::*;
pub use propulsion::*;
pub use drivetrain::*;

#[cfg(test)]
mod models_tests;
