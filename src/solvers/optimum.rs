// src/solvers/optimum.rs

use crate::models::Drivetrain;
use crate::solvers::OperatingState;
use crate::utils::{CURVE_STEPS, OPTIMUM_SCAN_START};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimumSolution {
    pub state: OperatingState,
    /// Peak motor efficiency as a fraction.
    pub efficiency: f64,
}

/// Motor efficiency at a state: shaft power of one rotor over its electrical input,
/// saturating at 1 above the speed the loaded voltage can drive.
pub fn motor_efficiency(state: &OperatingState, rotors: f64) -> f64 {
    let input = state.voltage * state.motor_current;
    if input > 0.0 { (state.power_mech / rotors / input).clamp(0.0, 1.0) } else { 0.0 }
}

/// Scans from 10% to 100% of `max_rpm` in steps of `max_rpm / 20` for the best
/// motor efficiency.
///
/// Only a strictly better sample replaces the incumbent, so ties keep the slower
/// speed. If no sample has positive efficiency, `fallback` is returned with zero
/// efficiency.
pub fn solve_optimum(drivetrain: &Drivetrain, max_rpm: f64, fallback: OperatingState) -> OptimumSolution {
    let steps = CURVE_STEPS as f64;
    let first = (OPTIMUM_SCAN_START * steps).round() as usize;

    let mut best = OptimumSolution { state: fallback, efficiency: 0.0 };
    for k in first..=CURVE_STEPS {
        let state = drivetrain.state_at(max_rpm * k as f64 / steps);
        let efficiency = motor_efficiency(&state, drivetrain.rotors);
        if efficiency > best.efficiency {
            best = OptimumSolution { state, efficiency };
        }
    }
    best
}
