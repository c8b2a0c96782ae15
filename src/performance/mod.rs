mod result;
mod performance;

pub use result::*;
pub use performance::*;

#[cfg(test)]
mod performance_tests;
