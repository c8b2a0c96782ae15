// src/solvers/max_throttle.rs

use log::debug;
use crate::models::Drivetrain;
use crate::solvers::OperatingState;
use crate::utils::{endurance_minutes, MAX_THROTTLE_PASSES, VOLTAGE_HEADROOM};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxThrottleSolution {
    pub state: OperatingState,
    /// Minutes of flight at full throttle.
    pub flight_time: f64,
}

/// Finds the highest sustainable rotor speed.
///
/// Starts from the no-load speed at nominal voltage and runs exactly five damped
/// passes. Each pass scales the speed down to the tightest current limit (motor
/// power limit at the loaded voltage, controller peak current) and then averages
/// it with 80% of the loaded-voltage synchronous speed. The pass count shapes the
/// result, so it is fixed rather than tolerance driven.
pub fn solve_max_throttle(drivetrain: &Drivetrain) -> MaxThrottleSolution {
    let motor = &drivetrain.config.motor;
    let esc_limit = drivetrain.config.esc.peak_current_limit();

    let mut rpm = motor.kv * drivetrain.battery.nominal_voltage;
    for pass in 0..MAX_THROTTLE_PASSES {
        let state = drivetrain.state_at(rpm);
        let current_limit = state
            .motor_current
            .min(motor.power_current_limit(state.voltage))
            .min(esc_limit);
        if current_limit < state.motor_current {
            rpm *= current_limit / state.motor_current;
        }
        let voltage_ceiling = motor.kv * state.voltage * VOLTAGE_HEADROOM;
        rpm = (rpm + voltage_ceiling) / 2.0;
        debug!("max throttle pass {}: limit {:.2} A, ceiling {:.0} rpm, next {:.0} rpm", pass, current_limit, voltage_ceiling, rpm);
    }

    let state = drivetrain.state_at(rpm);
    MaxThrottleSolution {
        state,
        flight_time: endurance_minutes(drivetrain.battery.capacity_ah, state.current),
    }
}
