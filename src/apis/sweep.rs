// src/apis/sweep.rs

use rayon::prelude::*;
use crate::config::AircraftConfig;
use crate::performance::{calculate_performance, PerformanceResult};

/// Evaluates one derived configuration per value, in parallel.
///
/// Results come back in the order of `values`. Each evaluation is independent,
/// so no locking is involved.
///
/// # Arguments
/// * `base` - Configuration every variant starts from.
/// * `values` - Parameter values to try.
/// * `apply` - Builds a variant from the base and one value.
///
/// # Example
/// ```
/// use rotorcalc::apis::sweep::sweep;
/// use rotorcalc::AircraftConfig;
///
/// let base = AircraftConfig::default();
/// let results = sweep(&base, &[15.0, 25.0, 35.0], |c, t| c.with_environment(c.environment.with_temperature(t)));
/// assert_eq!(results.len(), 3);
/// ```
pub fn sweep<T, F>(base: &AircraftConfig, values: &[T], apply: F) -> Vec<(T, PerformanceResult)>
where
    T: Copy + Send + Sync,
    F: Fn(AircraftConfig, T) -> AircraftConfig + Send + Sync,
{
    values
        .par_iter()
        .map(|&value| (value, calculate_performance(&apply(*base, value))))
        .collect()
}

/// Evaluates many independent configurations in parallel.
pub fn calculate_many(configs: &[AircraftConfig]) -> Vec<PerformanceResult> {
    configs.par_iter().map(calculate_performance).collect()
}

/// Sweeps the capacity of one parallel group, in mAh.
pub fn sweep_capacity(base: &AircraftConfig, capacities: &[f64]) -> Vec<(f64, PerformanceResult)> {
    sweep(base, capacities, |c, capacity| c.with_battery(c.battery.with_capacity(capacity)))
}

/// Sweeps the frame weight, in grams.
pub fn sweep_frame_weight(base: &AircraftConfig, weights: &[f64]) -> Vec<(f64, PerformanceResult)> {
    sweep(base, weights, |c, weight| c.with_frame(c.frame.with_weight(weight)))
}
