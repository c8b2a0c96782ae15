// src/performance/performance.rs

use log::warn;
use crate::config::AircraftConfig;
use crate::envelope::{estimate_envelope, FlightEnvelope};
use crate::models::Drivetrain;
use crate::performance::{Graphs, HoverPoint, MaxPoint, MixedPoint, OptimumPoint, PerformanceResult, Stats};
use crate::solvers::{solve_hover, solve_max_throttle, solve_optimum, HoverSolution, MaxThrottleSolution};
use crate::utils::{HOVER_TEMPERATURE_RISE, MAX_TEMPERATURE_RISE};

/// Predicts the steady-state performance of an aircraft.
///
/// Pure and total: any numeric configuration yields a result, and identical
/// inputs yield identical results. Physically meaningless setups degrade to
/// poor numbers (near-zero flight time, thrust-to-weight below 1) instead of
/// failing.
///
/// # Example
/// ```
/// use rotorcalc::{calculate_performance, AircraftConfig};
///
/// let result = calculate_performance(&AircraftConfig::default());
/// assert!(result.hover.flight_time > 0.0);
/// assert!(result.mixed.flight_time >= result.hover.flight_time);
/// ```
pub fn calculate_performance(config: &AircraftConfig) -> PerformanceResult {
    let drivetrain = Drivetrain::new(config);

    let hover = solve_hover(&drivetrain);
    let max = solve_max_throttle(&drivetrain);
    let optimum = solve_optimum(&drivetrain, max.state.rpm, max.state);
    let envelope = estimate_envelope(&drivetrain, &hover.state, &max.state);

    if hover.state.rpm > max.state.rpm {
        warn!(
            "hover needs {:.0} rpm but full throttle only reaches {:.0} rpm",
            hover.state.rpm, max.state.rpm
        );
    }

    PerformanceResult {
        hover: hover_point(&drivetrain, &hover, &max),
        max: max_point(&drivetrain, &max),
        opt: OptimumPoint { state: optimum.state, efficiency: optimum.efficiency * 100.0 },
        mixed: MixedPoint { flight_time: hover.mixed_flight_time },
        stats: stats(&drivetrain, &hover, &envelope),
        graphs: graphs(&drivetrain, &hover, &max, &envelope),
    }
}

/// Grams of thrust per watt.
fn specific_thrust(thrust_kg: f64, power_elec: f64) -> f64 {
    if power_elec > 0.0 { thrust_kg * 1000.0 / power_elec } else { 0.0 }
}

fn hover_point(drivetrain: &Drivetrain, hover: &HoverSolution, max: &MaxThrottleSolution) -> HoverPoint {
    let state = hover.state;
    let throttle = if max.state.rpm > 0.0 { state.rpm / max.state.rpm * 100.0 } else { 0.0 };
    HoverPoint {
        state,
        flight_time: hover.flight_time,
        throttle,
        specific_thrust: specific_thrust(state.thrust, state.power_elec),
        temperature: drivetrain.ambient_temperature() + state.power_elec * HOVER_TEMPERATURE_RISE,
    }
}

fn max_point(drivetrain: &Drivetrain, max: &MaxThrottleSolution) -> MaxPoint {
    let state = max.state;
    MaxPoint {
        state,
        flight_time: max.flight_time,
        specific_thrust: specific_thrust(state.thrust, state.power_elec),
        temperature: drivetrain.ambient_temperature() + state.power_elec * MAX_TEMPERATURE_RISE,
    }
}

fn stats(drivetrain: &Drivetrain, hover: &HoverSolution, envelope: &FlightEnvelope) -> Stats {
    let capacity_ah = drivetrain.battery.capacity_ah;
    Stats {
        weight: drivetrain.mass.total_kg,
        drive_weight: drivetrain.mass.drive_kg,
        twr: envelope.thrust_to_weight,
        payload: envelope.payload,
        max_tilt: envelope.max_tilt,
        max_speed: envelope.max_speed,
        rate_of_climb: envelope.rate_of_climb,
        // m² -> dm²
        disc_area: drivetrain.total_disc_area() * 100.0,
        battery_energy: drivetrain.battery.energy_wh,
        battery_load: if capacity_ah > 0.0 { hover.state.current / capacity_ah } else { 0.0 },
    }
}

#[cfg(feature = "curves")]
fn graphs(drivetrain: &Drivetrain, hover: &HoverSolution, max: &MaxThrottleSolution, envelope: &FlightEnvelope) -> Graphs {
    use crate::curves::{MotorCurve, RangeCurve};

    let range = RangeCurve::new(drivetrain, envelope.max_speed, envelope.drag_area, max.state.rpm, hover.flight_time);
    Graphs {
        range: range.collect(),
        motor: MotorCurve::new(drivetrain, max.state.motor_current).collect(),
    }
}

#[cfg(not(feature = "curves"))]
fn graphs(_: &Drivetrain, _: &HoverSolution, _: &MaxThrottleSolution, _: &FlightEnvelope) -> Graphs {
    Graphs::default()
}
