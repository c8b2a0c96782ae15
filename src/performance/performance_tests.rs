use approx::assert_relative_eq;
use crate::config::AircraftConfig;
use crate::performance::{calculate_performance, PerformanceResult};
use crate::test_fixtures::{golden_quad, heavy_lift_octo, overweight_quad};

/// Scales `value` by a random factor in [1 - spread, 1 + spread].
fn jitter(value: f64, spread: f64) -> f64 {
    value * (1.0 + spread * (2.0 * rand::random::<f64>() - 1.0))
}

fn jittered(base: AircraftConfig) -> AircraftConfig {
    let c = base;
    c.with_frame(c.frame.with_weight(jitter(c.frame.weight, 0.3)).with_misc_current(jitter(0.5, 1.0)))
        .with_environment(
            c.environment
                .with_temperature(jitter(15.0, 1.5))
                .with_elevation(jitter(1000.0, 1.0)),
        )
        .with_battery(
            c.battery
                .with_capacity(jitter(c.battery.capacity, 0.5))
                .with_resistance(jitter(c.battery.resistance, 0.5)),
        )
        .with_motor(
            c.motor
                .with_kv(jitter(c.motor.kv, 0.2))
                .with_no_load_current(jitter(c.motor.no_load_current, 0.5))
                .with_resistance(jitter(c.motor.resistance, 0.5)),
        )
        .with_prop(
            c.prop
                .with_pitch(jitter(c.prop.pitch, 0.2))
                .with_p_const(jitter(c.prop.p_const, 0.1)),
        )
}

fn assert_invariants(result: &PerformanceResult, cells: u32) {
    let floor = 3.0 * f64::from(cells);
    for (name, state) in [("hover", result.hover.state), ("max", result.max.state), ("opt", result.opt.state)] {
        assert!(state.voltage >= floor - 1e-12, "{}: voltage {} below cutoff {}", name, state.voltage, floor);
        assert!(state.current >= 0.0, "{}: negative current {}", name, state.current);
        assert!(state.thrust >= 0.0, "{}: negative thrust {}", name, state.thrust);
        assert!(
            (0.0..=1.0).contains(&state.efficiency),
            "{}: efficiency {} outside [0, 1]",
            name,
            state.efficiency
        );
    }
    assert!(result.opt.efficiency > 0.0 && result.opt.efficiency <= 100.0);
}

#[test]
fn test_golden_quad_scenario() {
    let result = calculate_performance(&golden_quad());
    let hover = result.hover;

    // Total draw of the four motors sits just above 20 A; each motor is well inside [5, 20] A.
    assert!((5.0..=20.0).contains(&hover.state.motor_current), "motor current {}", hover.state.motor_current);
    assert_relative_eq!(hover.state.current, 20.906015356638846, max_relative = 1e-9);
    assert!((3.0..=15.0).contains(&hover.flight_time), "hover time {}", hover.flight_time);

    assert_relative_eq!(hover.throttle, 39.39576141075475, max_relative = 1e-9);
    assert_relative_eq!(hover.specific_thrust, 2.627484572674845, max_relative = 1e-9);
    assert_relative_eq!(hover.temperature, 40.033389885820725, max_relative = 1e-9);
    assert_relative_eq!(result.max.temperature, 166.6286782960784, max_relative = 1e-9);
    assert_relative_eq!(result.mixed.flight_time, 3.899806365483018, max_relative = 1e-9);
    assert_relative_eq!(result.opt.efficiency, 77.47353208638984, max_relative = 1e-9);
}

#[test]
fn test_golden_quad_stats() {
    let stats = calculate_performance(&golden_quad()).stats;
    assert_relative_eq!(stats.weight, 0.79, max_relative = 1e-12);
    assert_relative_eq!(stats.drive_weight, 0.34, max_relative = 1e-12);
    assert_relative_eq!(stats.twr, 6.443190957888646, max_relative = 1e-9);
    assert_relative_eq!(stats.payload, 4.300120856732031, max_relative = 1e-9);
    assert_relative_eq!(stats.max_tilt, 81.07145332701845, max_relative = 1e-9);
    assert_relative_eq!(stats.max_speed, 261.4449381776879, max_relative = 1e-9);
    assert_relative_eq!(stats.rate_of_climb, 132.92534446677195, max_relative = 1e-9);
    assert_relative_eq!(stats.disc_area, 5.067074790974978, max_relative = 1e-9);
    assert_relative_eq!(stats.battery_energy, 22.2, max_relative = 1e-12);
    assert_relative_eq!(stats.battery_load, 13.937343571092564, max_relative = 1e-9);
}

#[test]
fn test_heavy_lift_scenario() {
    let result = calculate_performance(&heavy_lift_octo());
    assert!((20.0..=60.0).contains(&result.hover.state.current), "hover current {}", result.hover.state.current);
    assert!((15.0..=45.0).contains(&result.hover.flight_time), "hover time {}", result.hover.flight_time);
    assert_relative_eq!(result.stats.battery_energy, 710.4, max_relative = 1e-12);
}

#[test]
fn test_overweight_scenario_degrades_gracefully() {
    let result = calculate_performance(&overweight_quad());
    assert!(result.hover.state.current > 50.0, "hover current {}", result.hover.state.current);
    assert!((0.0..=2.0).contains(&result.hover.flight_time), "hover time {}", result.hover.flight_time);
    assert!(result.stats.twr < calculate_performance(&golden_quad()).stats.twr);
}

#[test]
fn test_unset_temperature_matches_default_day() {
    let config = golden_quad();
    let unset = config.with_environment(config.environment.with_temperature(0.0));
    let result = calculate_performance(&unset);
    assert_relative_eq!(result.hover.temperature, 40.033389885820725, max_relative = 1e-9);
    assert_eq!(result, calculate_performance(&config));
}

#[test]
fn test_calculation_is_idempotent() {
    let config = heavy_lift_octo();
    assert_eq!(calculate_performance(&config), calculate_performance(&config));
}

#[test]
fn test_capacity_strictly_increases_hover_time() {
    let base = golden_quad();
    let mut previous = 0.0;
    for capacity in [500.0, 1000.0, 1500.0, 3000.0, 6000.0] {
        let config = base.with_battery(base.battery.with_capacity(capacity));
        let time = calculate_performance(&config).hover.flight_time;
        assert!(time > previous, "{} mAh gave {} min after {} min", capacity, time, previous);
        previous = time;
    }
}

#[test]
fn test_mixed_time_not_below_hover_time() {
    for config in [golden_quad(), heavy_lift_octo(), overweight_quad(), AircraftConfig::default()] {
        let result = calculate_performance(&config);
        assert!(result.mixed.flight_time > result.hover.flight_time);
    }
}

#[test]
fn test_invariants_on_reference_aircraft() {
    for config in [golden_quad(), heavy_lift_octo(), overweight_quad(), AircraftConfig::default()] {
        assert_invariants(&calculate_performance(&config), config.battery.cells);
    }
}

#[test]
fn test_invariants_on_randomized_aircraft() {
    for i in 0..200 {
        let base = if i % 2 == 0 { golden_quad() } else { heavy_lift_octo() };
        let config = jittered(base);
        let result = calculate_performance(&config);
        assert!(config.environment.air_density() > 0.0);
        assert_invariants(&result, config.battery.cells);
        assert!(result.mixed.flight_time > result.hover.flight_time);
    }
}

#[test]
fn test_invariants_hold_far_beyond_hover_capability() {
    let base = golden_quad();
    for weight in [8_000.0, 12_000.0, 20_000.0] {
        let config = base.with_frame(base.frame.with_weight(weight));
        let result = calculate_performance(&config);
        assert!(result.hover.state.rpm > result.max.state.rpm, "{} g cannot hover", weight);
        assert_eq!(result.hover.state.efficiency, 1.0, "{} g: efficiency saturates on the voltage floor", weight);
        assert_invariants(&result, config.battery.cells);
    }
}

#[cfg(feature = "curves")]
#[test]
fn test_graphs_are_populated() {
    for config in [golden_quad(), heavy_lift_octo(), overweight_quad(), AircraftConfig::default()] {
        let result = calculate_performance(&config);
        assert!(!result.graphs.range.is_empty() && result.graphs.range.len() <= 21);
        assert_eq!(result.graphs.motor.len(), 20);

        let last = result.graphs.range[result.graphs.range.len() - 1];
        if last.speed > 10.0 {
            assert!(last.range_incl_drag < last.range_no_drag, "drag must reduce range at {} km/h", last.speed);
        }
    }
}

#[test]
fn test_zeroed_configuration_does_not_panic() {
    let config = AircraftConfig::from_json(
        r#"{
            "frame": { "weight": 0, "numMotors": 0, "miscCurrent": 0 },
            "battery": { "cells": 0, "capacity": 0, "resistance": 0, "weight": 0 },
            "esc": { "currentMax": 0, "weight": 0 },
            "motor": { "kv": 0, "noLoadCurrent": 0, "limitPower": 0, "weight": 0 },
            "prop": { "diameter": 0, "pitch": 0, "blades": 0, "tConst": 0, "pConst": 0 }
        }"#,
    )
    .unwrap();
    let result = calculate_performance(&config);
    assert_eq!(result.hover.flight_time, 0.0, "No capacity means no endurance");
    assert!(result.graphs.motor.len() <= 20);
}

#[test]
fn test_result_serializes_for_display() {
    let json = calculate_performance(&golden_quad()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let hover = &value["hover"];
    assert!(hover.get("state").is_none(), "Operating point fields sit directly on the record");
    for key in ["rpm", "current", "currentMotor", "voltage", "powerElec", "powerMech", "thrust", "torque", "flightTime", "throttle", "specificThrust", "temp"] {
        assert!(hover.get(key).is_some(), "hover.{} missing", key);
    }
    assert_relative_eq!(hover["current"].as_f64().unwrap(), 20.906015356638846, max_relative = 1e-9);
    assert!(value["max"].get("temp").is_some() && value["max"].get("powerElec").is_some());

    let opt = &value["opt"];
    assert!(opt.get("currentMotor").is_some() && opt.get("powerMech").is_some());
    assert_relative_eq!(opt["efficiency"].as_f64().unwrap(), 77.47353208638984, max_relative = 1e-9);

    assert!(value["mixed"].get("flightTime").is_some());
    assert!(value["stats"].get("rateOfClimb").is_some());
    if cfg!(feature = "curves") {
        assert!(value["graphs"]["range"][0].get("rangeInclDrag").is_some());
        let motor = &value["graphs"]["motor"][0];
        assert!(motor.get("temp").is_some() && motor.get("tempOverlimit").is_some());
        assert!(motor.get("wastePower").is_some());
    }
}

#[test]
fn test_display_summary() {
    let summary = calculate_performance(&golden_quad()).to_string();
    assert!(summary.contains("hover flight time 3.4 min"));
    assert!(summary.contains("790 g all-up"));
}
