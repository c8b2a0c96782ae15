// src/curves/range_curve.rs

use log::debug;
use serde::Serialize;
use crate::models::Drivetrain;
use crate::utils::{
    endurance_minutes, CURVE_STEPS, ETL_BASE_SHARE, ETL_RECOVERED_SHARE, GRAVITY, MS_TO_KMH,
    RANGE_RPM_OVERSHOOT, RANGE_SPEED_OVERSHOOT,
};

/// One point of the range-versus-airspeed curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSample {
    /// Airspeed in km/h.
    pub speed: f64,
    /// Always the hover flight time, in minutes.
    pub flight_time_no_drag: f64,
    /// Range in km at hover endurance.
    pub range_no_drag: f64,
    /// Flight time in minutes with drag and translational lift applied.
    pub flight_time_incl_drag: f64,
    pub range_incl_drag: f64,
}

/// Range versus airspeed, from standstill to 110% of the top speed in 20 steps.
///
/// The iterator ends early once holding an airspeed would need more than 110% of
/// the full-throttle rotor speed. Clone it to walk the curve again.
#[derive(Debug, Clone)]
pub struct RangeCurve<'a> {
    drivetrain: &'a Drivetrain,
    max_speed: f64,
    drag_area: f64,
    max_rpm: f64,
    hover_flight_time: f64,
    index: usize,
    finished: bool,
}

impl<'a> RangeCurve<'a> {
    /// # Arguments
    /// * `drivetrain` - Derived aircraft constants.
    /// * `max_speed` - Drag-limited top speed in km/h.
    /// * `drag_area` - Parasitic drag area in m².
    /// * `max_rpm` - Full-throttle rotor speed.
    /// * `hover_flight_time` - Hover endurance in minutes.
    pub fn new(drivetrain: &'a Drivetrain, max_speed: f64, drag_area: f64, max_rpm: f64, hover_flight_time: f64) -> Self {
        Self { drivetrain, max_speed, drag_area, max_rpm, hover_flight_time, index: 0, finished: false }
    }

    fn last_index(&self) -> usize {
        // Without a top speed every sample would sit at standstill.
        if self.max_speed > 0.0 { CURVE_STEPS } else { 0 }
    }

    fn sample(&self, speed: f64) -> Option<RangeSample> {
        let dt = self.drivetrain;
        let rho = dt.air_density;
        let speed_ms = speed / MS_TO_KMH;

        let drag = 0.5 * rho * self.drag_area * speed_ms * speed_ms;
        let weight = dt.mass.total_kg * GRAVITY;
        let thrust_per_rotor = weight.hypot(drag) / dt.rotors;
        let rpm = dt.propulsion.rps_for_thrust(thrust_per_rotor) * 60.0;
        // NaN counts as out of reach.
        if !(rpm <= self.max_rpm * RANGE_RPM_OVERSHOOT) {
            return None;
        }

        let state = dt.state_at(rpm);
        let induced_velocity = (thrust_per_rotor / (2.0 * rho * dt.propulsion.disc_area())).sqrt();
        let etl_factor = translational_lift_factor(speed_ms, induced_velocity);
        let current = state.current * (ETL_BASE_SHARE + ETL_RECOVERED_SHARE * etl_factor);
        let flight_time_incl_drag = endurance_minutes(dt.battery.capacity_ah, current);

        Some(RangeSample {
            speed,
            flight_time_no_drag: self.hover_flight_time,
            range_no_drag: speed * self.hover_flight_time / 60.0,
            flight_time_incl_drag,
            range_incl_drag: speed * flight_time_incl_drag / 60.0,
        })
    }
}

/// Momentum-theory reduction of induced power in forward flight: `1 / sqrt(1 + (v / v_h)²)`.
pub fn translational_lift_factor(speed_ms: f64, induced_velocity: f64) -> f64 {
    if induced_velocity > 0.0 {
        1.0 / (1.0 + (speed_ms / induced_velocity).powi(2)).sqrt()
    } else if speed_ms > 0.0 {
        0.0
    } else {
        1.0
    }
}

impl Iterator for RangeCurve<'_> {
    type Item = RangeSample;

    fn next(&mut self) -> Option<RangeSample> {
        if self.finished || self.index > self.last_index() {
            return None;
        }
        let speed = self.index as f64 * RANGE_SPEED_OVERSHOOT * self.max_speed / CURVE_STEPS as f64;
        self.index += 1;

        let sample = self.sample(speed);
        if sample.is_none() {
            debug!("range curve stops at {:.1} km/h: rotor speed out of reach", speed);
            self.finished = true;
        }
        sample
    }
}

impl std::iter::FusedIterator for RangeCurve<'_> {}
