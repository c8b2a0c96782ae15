// src/curves/motor_curve.rs

use serde::Serialize;
use crate::models::Drivetrain;
use crate::utils::{
    CURVE_STEPS, MOTOR_CURVE_OVERSHOOT, MOTOR_CURVE_START_CURRENT, MOTOR_TEMPERATURE_LIMIT,
    THERMAL_RISE_PER_WATT,
};

/// One point of the motor characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotorSample {
    /// Motor current in A.
    pub current: f64,
    /// Electrical input power in W.
    pub power: f64,
    /// Efficiency in percent.
    pub efficiency: f64,
    pub rpm: f64,
    /// Copper and no-load losses in W.
    pub waste_power: f64,
    /// Estimated case temperature in °C.
    #[serde(rename = "temp")]
    pub temperature: f64,
    /// Degrees above the 80 °C limit, 0 when below.
    #[serde(rename = "tempOverlimit")]
    pub temperature_over_limit: f64,
}

/// Motor characteristic over 20 evenly spaced currents from 0.5 A up to 120% of
/// the full-throttle motor current, both ends included.
///
/// Empty when 120% of the motor current is below 0.5 A.
#[derive(Debug, Clone)]
pub struct MotorCurve<'a> {
    drivetrain: &'a Drivetrain,
    step: f64,
    len: usize,
    index: usize,
}

impl<'a> MotorCurve<'a> {
    pub fn new(drivetrain: &'a Drivetrain, max_motor_current: f64) -> Self {
        let last_current = max_motor_current * MOTOR_CURVE_OVERSHOOT;
        // NaN lands here too.
        if !(last_current >= MOTOR_CURVE_START_CURRENT) {
            return Self { drivetrain, step: 0.0, len: 0, index: 0 };
        }
        let step = (last_current - MOTOR_CURVE_START_CURRENT) / (CURVE_STEPS - 1) as f64;
        Self { drivetrain, step, len: CURVE_STEPS, index: 0 }
    }

    fn sample(&self, current: f64) -> MotorSample {
        let dt = self.drivetrain;
        let motor = &dt.config.motor;

        let voltage = dt.battery.loaded_voltage(current * dt.rotors);
        let power = voltage * current;
        let waste_power = current * current * motor.resistance + motor.no_load_current * voltage;
        let output = (power - waste_power).max(0.0);
        let efficiency = if power > 0.0 { output / power * 100.0 } else { 0.0 };
        let temperature = dt.ambient_temperature() + waste_power * THERMAL_RISE_PER_WATT;

        MotorSample {
            current,
            power,
            efficiency,
            rpm: motor.kv * (voltage - current * motor.resistance),
            waste_power,
            temperature,
            temperature_over_limit: (temperature - MOTOR_TEMPERATURE_LIMIT).max(0.0),
        }
    }
}

impl Iterator for MotorCurve<'_> {
    type Item = MotorSample;

    fn next(&mut self) -> Option<MotorSample> {
        if self.index >= self.len {
            return None;
        }
        let current = MOTOR_CURVE_START_CURRENT + self.index as f64 * self.step;
        self.index += 1;
        Some(self.sample(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MotorCurve<'_> {}
