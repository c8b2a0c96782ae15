// src/models/drivetrain.rs

use crate::config::AircraftConfig;
use crate::models::{BatteryPack, MassBreakdown, PropulsionCoefficients};

/// Everything the solvers need, derived once from a configuration.
#[derive(Debug, Clone, Copy)]
pub struct Drivetrain {
    pub config: AircraftConfig,
    pub air_density: f64,
    pub mass: MassBreakdown,
    pub battery: BatteryPack,
    pub propulsion: PropulsionCoefficients,
    pub rotors: f64,
}

impl Drivetrain {
    pub fn new(config: &AircraftConfig) -> Self {
        let air_density = config.environment.air_density();
        Self {
            config: *config,
            air_density,
            mass: MassBreakdown::from_config(config),
            battery: BatteryPack::from_battery(&config.battery),
            propulsion: PropulsionCoefficients::new(&config.prop, air_density),
            rotors: f64::from(config.frame.rotors()),
        }
    }

    /// Total swept area of all rotors in m².
    pub fn total_disc_area(&self) -> f64 {
        self.propulsion.disc_area() * self.rotors
    }

    pub fn ambient_temperature(&self) -> f64 {
        self.config.environment.ambient_temperature()
    }
}
