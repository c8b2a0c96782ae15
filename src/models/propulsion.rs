// src/models/propulsion.rs

use std::f64::consts::PI;
use crate::config::Propeller;
use crate::utils::INCH_TO_METER;

/// Static thrust and power coefficients of one propeller.
///
/// Thrust in N is `k_thrust · rps²` and shaft power in W is `k_power · rps³`,
/// with `rps` in revolutions per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionCoefficients {
    pub ct: f64,
    pub cp: f64,
    pub k_thrust: f64,
    pub k_power: f64,
    pub diameter_m: f64,
}

impl PropulsionCoefficients {
    /// Derives the coefficients from propeller geometry at the given air density.
    ///
    /// A non-positive diameter or a zero blade count gives zero or non-finite
    /// coefficients; rejecting such props is up to the caller.
    pub fn new(prop: &Propeller, air_density: f64) -> Self {
        let diameter_m = prop.diameter * INCH_TO_METER;
        let ratio_pd = prop.pitch / prop.diameter;
        let blade_factor = f64::from(prop.blades) / 2.0;

        let base_ct = 0.08 + 0.12 * ratio_pd;
        let ct = base_ct * prop.thrust_constant() * blade_factor.powf(0.7);
        // Built on the untuned base, so tConst and the thrust blade factor stay out of Cp.
        let cp = base_ct * ratio_pd * 0.40 * prop.power_constant() * blade_factor.powf(0.9);

        Self {
            ct,
            cp,
            k_thrust: ct * air_density * diameter_m.powi(4),
            k_power: cp * air_density * diameter_m.powi(5),
            diameter_m,
        }
    }

    pub fn thrust(&self, rps: f64) -> f64 {
        self.k_thrust * rps * rps
    }

    pub fn shaft_power(&self, rps: f64) -> f64 {
        self.k_power * rps.powi(3)
    }

    /// Inverts the thrust law: the rev/s at which one rotor makes `thrust` newtons.
    pub fn rps_for_thrust(&self, thrust: f64) -> f64 {
        (thrust / self.k_thrust).sqrt()
    }

    /// Swept area of one rotor in m².
    pub fn disc_area(&self) -> f64 {
        PI * (self.diameter_m / 2.0).powi(2)
    }
}
