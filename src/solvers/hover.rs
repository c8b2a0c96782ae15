// src/solvers/hover.rs

use crate::models::Drivetrain;
use crate::solvers::OperatingState;
use crate::utils::{endurance_minutes, CRUISE_CURRENT_FACTOR, GRAVITY, MIXED_CRUISE_SHARE, MIXED_HOVER_SHARE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSolution {
    pub state: OperatingState,
    /// Minutes of hover on 80% of rated charge.
    pub flight_time: f64,
    /// Minutes of cruise, taking cruise current as 85% of hover current.
    pub cruise_time: f64,
    /// 25% hover / 75% cruise mission.
    pub mixed_flight_time: f64,
}

/// Solves for the operating point where total thrust equals weight.
///
/// The thrust law is inverted in closed form for the per-rotor speed, then the
/// equilibrium state is evaluated there.
pub fn solve_hover(drivetrain: &Drivetrain) -> HoverSolution {
    let thrust_per_rotor = drivetrain.mass.total_kg * GRAVITY / drivetrain.rotors;
    let rps = drivetrain.propulsion.rps_for_thrust(thrust_per_rotor);
    let state = drivetrain.state_at(rps * 60.0);

    let capacity_ah = drivetrain.battery.capacity_ah;
    let flight_time = endurance_minutes(capacity_ah, state.current);
    let cruise_time = endurance_minutes(capacity_ah, state.current * CRUISE_CURRENT_FACTOR);

    HoverSolution {
        state,
        flight_time,
        cruise_time,
        mixed_flight_time: flight_time * MIXED_HOVER_SHARE + cruise_time * MIXED_CRUISE_SHARE,
    }
}
