// src/envelope/envelope.rs

use log::warn;
use crate::models::Drivetrain;
use crate::solvers::OperatingState;
use crate::utils::{DRAG_AREA_PER_KG, GRAVITY, MS_TO_KMH};

/// Flight-envelope statistics derived from the hover and full-throttle points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightEnvelope {
    /// Maximum thrust over all-up weight.
    pub thrust_to_weight: f64,
    /// Largest bank angle that still holds altitude, in degrees.
    pub max_tilt: f64,
    /// Parasitic drag area `Cd·A` in m².
    pub drag_area: f64,
    /// Drag-limited top speed in km/h.
    pub max_speed: f64,
    /// Climb rate from excess shaft power, in m/s.
    pub rate_of_climb: f64,
    /// Thrust left over after lifting the aircraft, in kg.
    pub payload: f64,
}

/// Estimates thrust-to-weight ratio, maximum tilt, top speed and climb rate.
///
/// # Arguments
/// * `drivetrain` - Derived aircraft constants.
/// * `hover` - The hover operating point.
/// * `max` - The full-throttle operating point.
///
/// # Returns
/// The [`FlightEnvelope`]. Below a thrust-to-weight ratio of 1 there is no tilt
/// margin, so tilt and top speed are 0.
pub fn estimate_envelope(drivetrain: &Drivetrain, hover: &OperatingState, max: &OperatingState) -> FlightEnvelope {
    let weight_kg = drivetrain.mass.total_kg;
    let thrust_to_weight = max.thrust / weight_kg;
    let max_tilt = if thrust_to_weight > 1.0 {
        (1.0 / thrust_to_weight).acos().to_degrees()
    } else {
        warn!("thrust-to-weight ratio {:.2} leaves no tilt margin", thrust_to_weight);
        0.0
    };

    let drag_area = DRAG_AREA_PER_KG * weight_kg;
    let horizontal_thrust = max.thrust * GRAVITY * max_tilt.to_radians().sin();
    let max_speed = (horizontal_thrust / (0.5 * drivetrain.air_density * drag_area)).sqrt() * MS_TO_KMH;

    let excess_power = max.power_mech - hover.power_mech;

    FlightEnvelope {
        thrust_to_weight,
        max_tilt,
        drag_area,
        max_speed,
        rate_of_climb: excess_power / (weight_kg * GRAVITY),
        payload: (max.thrust - weight_kg).max(0.0),
    }
}
