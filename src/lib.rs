pub mod utils;
pub mod errors;
pub mod config;
pub mod models;
pub mod solvers;
pub mod envelope;
pub mod curves;
pub mod performance;
pub mod apis;

#[cfg(test)]
mod test_fixtures;

pub use config::AircraftConfig;
pub use errors::CalcError;
pub use performance::{calculate_performance, PerformanceResult};

/// ### General helper function
/// - Asserts that two floating point numbers are approximately equal.
///
/// ### Arguments
///
/// * `a` - The first floating point number.
/// * `b` - The second floating point number.
/// * `epsilon` - The maximum difference between `a` and `b` for them to be considered equal.
/// * `optional_message` - An optional message to display if the assertion fails.
///
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64, optional_message: Option<&str>) {
    match optional_message {
        Some(message) => assert!((a - b).abs() < epsilon, "a: {:?},\nb: {:?},\nepsilon: {:?},\n message: {:?}", a, b, epsilon, message),
        None => assert!((a - b).abs() < epsilon, "Expected {} to be approximately equal to {} (epsilon: {})", a, b, epsilon),
    }
}
