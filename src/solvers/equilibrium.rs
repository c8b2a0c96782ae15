// src/solvers/equilibrium.rs

use std::f64::consts::PI;
use serde::Serialize;
use crate::models::Drivetrain;
use crate::utils::{GRAVITY, TORQUE_CONSTANT_FACTOR};

/// A self-consistent electrical and mechanical operating point of the whole aircraft.
///
/// Currents and powers cover all rotors; `motor_current` and `torque` are per rotor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingState {
    pub rpm: f64,
    /// Total battery current in A, accessories included.
    pub current: f64,
    /// Current through one motor in A.
    #[serde(rename = "currentMotor")]
    pub motor_current: f64,
    /// Battery terminal voltage under this load in V.
    pub voltage: f64,
    pub power_elec: f64,
    pub power_mech: f64,
    /// Total thrust in kg-force.
    pub thrust: f64,
    /// Shaft power over battery power, as a fraction in [0, 1].
    pub efficiency: f64,
    /// Shaft torque of one rotor in N·m.
    pub torque: f64,
}

/// Evaluates the operating point at a commanded rotational speed.
///
/// Closed form, no iteration. The loaded voltage never drops below the 3.0 V per
/// cell cutoff, and at zero speed torque and thrust are zero while the motors
/// still draw their no-load current.
///
/// Once the voltage sits on the cutoff floor the commanded speed can need more
/// shaft power than the pack delivers. Efficiency saturates at 1 there.
///
/// # Arguments
/// * `drivetrain` - Derived aircraft constants.
/// * `rpm` - Rotational speed of every rotor in rev/min.
///
/// # Returns
/// The resulting [`OperatingState`].
pub fn solve_equilibrium(drivetrain: &Drivetrain, rpm: f64) -> OperatingState {
    let motor = &drivetrain.config.motor;
    let rotors = drivetrain.rotors;

    let rps = rpm / 60.0;
    let shaft_power = drivetrain.propulsion.shaft_power(rps);
    let torque = if rps > 0.0 { shaft_power / (rps * 2.0 * PI) } else { 0.0 };

    let kt = TORQUE_CONSTANT_FACTOR / motor.kv;
    let motor_current = torque / kt + motor.no_load_current;
    let current = motor_current * rotors + drivetrain.config.frame.misc_current;

    let voltage = drivetrain.battery.loaded_voltage(current);
    let power_elec = voltage * current;
    let power_mech = shaft_power * rotors;
    let efficiency = if power_elec > 0.0 { (power_mech / power_elec).clamp(0.0, 1.0) } else { 0.0 };

    OperatingState {
        rpm,
        current,
        motor_current,
        voltage,
        power_elec,
        power_mech,
        thrust: drivetrain.propulsion.thrust(rps) * rotors / GRAVITY,
        efficiency,
        torque,
    }
}

impl Drivetrain {
    /// Shorthand for [`solve_equilibrium`].
    pub fn state_at(&self, rpm: f64) -> OperatingState {
        solve_equilibrium(self, rpm)
    }
}
