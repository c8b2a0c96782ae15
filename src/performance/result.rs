// src/performance/result.rs

use std::fmt;
use serde::{Serialize, Serializer};
use crate::curves::{MotorSample, RangeSample};
use crate::solvers::OperatingState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverPoint {
    #[serde(flatten)]
    pub state: OperatingState,
    /// Minutes.
    pub flight_time: f64,
    /// Hover speed as a percentage of full-throttle speed.
    pub throttle: f64,
    /// Grams of thrust per watt of input.
    pub specific_thrust: f64,
    /// Estimated motor temperature in °C.
    #[serde(rename = "temp")]
    pub temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxPoint {
    #[serde(flatten)]
    pub state: OperatingState,
    pub flight_time: f64,
    pub specific_thrust: f64,
    #[serde(rename = "temp")]
    pub temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimumPoint {
    pub state: OperatingState,
    /// Peak motor efficiency in percent.
    pub efficiency: f64,
}

// Serializes as the operating state with its fractional efficiency replaced by the percentage.
impl Serialize for OptimumPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OperatingState { efficiency: self.efficiency, ..self.state }.serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixedPoint {
    pub flight_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// All-up weight in kg.
    pub weight: f64,
    pub drive_weight: f64,
    pub twr: f64,
    /// Extra liftable mass in kg.
    pub payload: f64,
    /// Degrees.
    pub max_tilt: f64,
    /// km/h.
    pub max_speed: f64,
    /// m/s.
    pub rate_of_climb: f64,
    /// Total disc area in dm².
    pub disc_area: f64,
    /// Wh.
    pub battery_energy: f64,
    /// Hover discharge rate in C.
    pub battery_load: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Graphs {
    pub range: Vec<RangeSample>,
    pub motor: Vec<MotorSample>,
}

/// Everything one computation produces, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceResult {
    pub hover: HoverPoint,
    pub max: MaxPoint,
    pub opt: OptimumPoint,
    pub mixed: MixedPoint,
    pub stats: Stats,
    pub graphs: Graphs,
}

impl PerformanceResult {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for PerformanceResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (hover, max, opt, stats) = (&self.hover, &self.max, &self.opt, &self.stats);
        writeln!(f, "Battery:  load {:.2} C, {:.2} V, {:.1} Wh", stats.battery_load, hover.state.voltage, stats.battery_energy)?;
        writeln!(f, "          mixed flight time {:.1} min, hover flight time {:.1} min", self.mixed.flight_time, hover.flight_time)?;
        writeln!(f, "Optimum:  {:.2} A, {:.2} V, {:.0} rpm, {:.1} %", opt.state.motor_current, opt.state.voltage, opt.state.rpm, opt.efficiency)?;
        writeln!(f, "Maximum:  {:.2} A, {:.2} V, {:.0} rpm, {:.1} W in, est. {:.0} °C", max.state.current, max.state.voltage, max.state.rpm, max.state.power_elec, max.temperature)?;
        writeln!(f, "Hover:    {:.2} A, {:.2} V, {:.0} rpm, {:.0} % throttle, {:.2} g/W", hover.state.current, hover.state.voltage, hover.state.rpm, hover.throttle, hover.specific_thrust)?;
        writeln!(f, "Drive:    {:.0} g, thrust-weight {:.1} : 1", stats.drive_weight * 1000.0, stats.twr)?;
        write!(
            f,
            "Aircraft: {:.0} g all-up, {:.0} g payload, {:.0}° tilt, {:.0} km/h, {:.1} m/s climb, {:.2} dm² disc",
            stats.weight * 1000.0,
            stats.payload * 1000.0,
            stats.max_tilt,
            stats.max_speed,
            stats.rate_of_climb,
            stats.disc_area,
        )
    }
}
