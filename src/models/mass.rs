// src/models/mass.rs

use crate::config::AircraftConfig;

/// All-up and drivetrain weight of the aircraft, in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassBreakdown {
    pub total_kg: f64,
    /// Motors, controllers and battery.
    pub drive_kg: f64,
}

impl MassBreakdown {
    /// Sums the per-part weights (grams) of a configuration. Motor and controller
    /// weights are per rotor.
    pub fn from_config(config: &AircraftConfig) -> Self {
        let rotors = f64::from(config.frame.rotors());
        let motors_g = config.motor.weight * rotors;
        let escs_g = config.esc.weight * rotors;
        let drive_g = motors_g + escs_g + config.battery.weight;
        let total_g = config.frame.weight + drive_g + config.frame.misc_weight;

        Self {
            total_kg: total_g / 1000.0,
            drive_kg: drive_g / 1000.0,
        }
    }
}
