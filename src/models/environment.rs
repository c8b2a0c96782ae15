// src/models/environment.rs

use crate::config::Environment;
use crate::utils::{CELSIUS_TO_KELVIN, DENSITY_EXPONENT, LAPSE_RATE, SEA_LEVEL_AIR_DENSITY, SEA_LEVEL_TEMPERATURE_K};

/// Calculates the air density at a field using the ISA approximation.
/// # Arguments
/// * `temperature` - Air temperature in °C.
/// * `elevation` - Field elevation above sea level in m.
///
/// # Returns
/// The air density in kg/m³. Every input yields a number; nothing is validated.
///
/// # Example
/// ```
/// use rotorcalc::models::air_density;
///
/// let rho = air_density(15.0, 0.0);
/// assert!((rho - 1.225).abs() < 1e-9);
/// ```
pub fn air_density(temperature: f64, elevation: f64) -> f64 {
    let temperature_k = temperature + CELSIUS_TO_KELVIN;
    let pressure_ratio = (1.0 - LAPSE_RATE * elevation / SEA_LEVEL_TEMPERATURE_K).powf(DENSITY_EXPONENT);
    SEA_LEVEL_AIR_DENSITY * pressure_ratio * (SEA_LEVEL_TEMPERATURE_K / temperature_k)
}

impl Environment {
    /// Density at the field, reading an unset temperature as 25 °C.
    pub fn air_density(&self) -> f64 {
        air_density(self.ambient_temperature(), self.elevation)
    }
}
