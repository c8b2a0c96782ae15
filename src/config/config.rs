// src/config/config.rs

use serde::{Deserialize, Serialize};
use crate::errors::CalcError;
use crate::utils::{
    limit_or_unbounded, or_default, DEFAULT_CELL_RESISTANCE, DEFAULT_PARALLEL_COUNT,
    DEFAULT_ROTOR_COUNT, DEFAULT_TEMPERATURE, DEFAULT_TUNING_CONSTANT, NOMINAL_CELL_VOLTAGE,
};

/// Generates `with_<field>` methods that return a copy with one field replaced.
macro_rules! with_fields {
    ($ty:ty { $($method:ident => $field:ident : $fty:ty),* $(,)? }) => {
        impl $ty {
            $(
                #[doc = concat!("Returns a copy with `", stringify!($field), "` replaced.")]
                #[must_use]
                pub fn $method(mut self, value: $fty) -> Self {
                    self.$field = value;
                    self
                }
            )*
        }
    };
}

/// Ambient conditions at the flying field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Environment {
    /// Air temperature in °C, 0 for the 25 °C default.
    #[serde(alias = "temp")]
    pub temperature: f64,
    /// Field elevation above sea level in m.
    pub elevation: f64,
    /// Barometric pressure in hPa. Not used by the density model.
    pub pressure: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self { temperature: 25.0, elevation: 500.0, pressure: 1013.0 }
    }
}

impl Environment {
    /// Temperature with the unset value mapped to 25 °C.
    pub fn ambient_temperature(&self) -> f64 {
        or_default(self.temperature, DEFAULT_TEMPERATURE)
    }
}

/// Airframe data. Weights are in grams and exclude the drivetrain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Frame {
    pub weight: f64,
    #[serde(alias = "numMotors")]
    pub rotor_count: u32,
    /// Motor-to-motor diagonal in mm.
    pub size: f64,
    /// Flight controller tilt limit in degrees, 0 for none.
    pub tilt_limit: f64,
    pub misc_weight: f64,
    /// Constant current draw of accessories in A.
    pub misc_current: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            weight: 1900.0,
            rotor_count: 4,
            size: 300.0,
            tilt_limit: 0.0,
            misc_weight: 0.0,
            misc_current: 0.0,
        }
    }
}

impl Frame {
    /// Rotor count with the unset value mapped to a quad.
    pub fn rotors(&self) -> u32 {
        if self.rotor_count == 0 { DEFAULT_ROTOR_COUNT } else { self.rotor_count }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeState {
    Low,
    #[default]
    Normal,
    Full,
}

/// Battery pack built from `cells` in series and `parallel` groups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Battery {
    pub cells: u32,
    pub parallel: u32,
    /// Capacity of one parallel group in mAh.
    pub capacity: f64,
    pub c_rating: f64,
    pub c_rating_max: f64,
    /// Internal resistance per cell in Ω.
    pub resistance: f64,
    /// Per-cell voltage as entered. The model always uses 3.7 V.
    #[serde(alias = "voltage")]
    pub cell_voltage: f64,
    pub weight: f64,
    pub charge_state: ChargeState,
}

impl Default for Battery {
    fn default() -> Self {
        Self {
            cells: 4,
            parallel: 1,
            capacity: 6000.0,
            c_rating: 25.0,
            c_rating_max: 35.0,
            resistance: 0.0035,
            cell_voltage: NOMINAL_CELL_VOLTAGE,
            weight: 148.0,
            charge_state: ChargeState::Normal,
        }
    }
}

impl Battery {
    pub fn parallel_groups(&self) -> u32 {
        if self.parallel == 0 { DEFAULT_PARALLEL_COUNT } else { self.parallel }
    }

    pub fn cell_resistance(&self) -> f64 {
        or_default(self.resistance, DEFAULT_CELL_RESISTANCE)
    }
}

/// Electronic speed controller, per rotor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Esc {
    pub current_cont: f64,
    /// Peak current in A, 0 for no limit.
    pub current_max: f64,
    pub resistance: f64,
    pub weight: f64,
}

impl Default for Esc {
    fn default() -> Self {
        Self { current_cont: 50.0, current_max: 50.0, resistance: 0.005, weight: 65.0 }
    }
}

impl Esc {
    pub fn peak_current_limit(&self) -> f64 {
        limit_or_unbounded(self.current_max)
    }
}

/// Brushless motor, per rotor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Motor {
    /// Velocity constant in rpm/V.
    pub kv: f64,
    pub no_load_current: f64,
    pub no_load_voltage: f64,
    /// Power limit in W, 0 for no limit.
    #[serde(alias = "limitPower")]
    pub power_limit: f64,
    /// Winding resistance in Ω.
    pub resistance: f64,
    pub length: f64,
    pub poles: u32,
    pub weight: f64,
}

impl Default for Motor {
    fn default() -> Self {
        Self {
            kv: 1300.0,
            no_load_current: 0.95,
            no_load_voltage: 10.0,
            power_limit: 1050.0,
            resistance: 0.076,
            length: 19.7,
            poles: 14,
            weight: 47.0,
        }
    }
}

impl Motor {
    /// Current ceiling implied by the power limit at `voltage`.
    pub fn power_current_limit(&self, voltage: f64) -> f64 {
        if self.power_limit > 0.0 { self.power_limit / voltage } else { f64::INFINITY }
    }
}

/// Propeller geometry in inches plus the two empirical tuning constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Propeller {
    pub diameter: f64,
    pub pitch: f64,
    pub blades: u32,
    pub t_const: f64,
    pub p_const: f64,
    pub gear_ratio: f64,
}

impl Default for Propeller {
    fn default() -> Self {
        Self { diameter: 7.0, pitch: 3.5, blades: 2, t_const: 1.0, p_const: 1.09, gear_ratio: 1.0 }
    }
}

impl Propeller {
    pub fn thrust_constant(&self) -> f64 {
        or_default(self.t_const, DEFAULT_TUNING_CONSTANT)
    }

    pub fn power_constant(&self) -> f64 {
        or_default(self.p_const, DEFAULT_TUNING_CONSTANT)
    }
}

with_fields!(Environment { with_temperature => temperature: f64, with_elevation => elevation: f64, with_pressure => pressure: f64 });

/// Full input of one performance computation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    pub frame: Frame,
    pub environment: Environment,
    pub battery: Battery,
    pub esc: Esc,
    pub motor: Motor,
    #[serde(alias = "propeller")]
    pub prop: Propeller,
}

impl AircraftConfig {
    /// Loads a configuration from JSON. Missing sections and fields keep their defaults.
    ///
    /// # Examples
    /// ```
    /// use rotorcalc::AircraftConfig;
    ///
    /// let config = AircraftConfig::from_json(r#"{ "frame": { "weight": 450, "numMotors": 4 } }"#).unwrap();
    /// assert_eq!(config.frame.weight, 450.0);
    /// assert_eq!(config.battery.cells, 4);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CalcError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_frame(self, frame: Frame) -> Self {
        Self { frame, ..self }
    }

    #[must_use]
    pub fn with_environment(self, environment: Environment) -> Self {
        Self { environment, ..self }
    }

    #[must_use]
    pub fn with_battery(self, battery: Battery) -> Self {
        Self { battery, ..self }
    }

    #[must_use]
    pub fn with_esc(self, esc: Esc) -> Self {
        Self { esc, ..self }
    }

    #[must_use]
    pub fn with_motor(self, motor: Motor) -> Self {
        Self { motor, ..self }
    }

    #[must_use]
    pub fn with_prop(self, prop: Propeller) -> Self {
        Self { prop, ..self }
    }

    /// Range sanity check for callers that want one.
    ///
    /// The computation does not require this; it produces a defined result for any input.
    ///
    /// # Errors
    /// Returns the first problem found:
    /// * rotor count other than 3, 4, 6 or 8 (0 counts as the default quad)
    /// * no series cells or a non-positive capacity
    /// * non-positive propeller diameter, negative pitch or no blades
    /// * non-positive motor kv
    pub fn validate(&self) -> Result<(), CalcError> {
        let rotors = self.frame.rotors();
        if ![3, 4, 6, 8].contains(&rotors) {
            return Err(CalcError::InvalidRotorCount(rotors));
        }
        if self.battery.cells == 0 {
            return Err(CalcError::InvalidCellCount(self.battery.cells));
        }
        if self.battery.capacity <= 0.0 {
            return Err(CalcError::InvalidCapacity);
        }
        if self.prop.diameter <= 0.0 {
            return Err(CalcError::InvalidPropeller("diameter must be positive".to_string()));
        }
        if self.prop.pitch < 0.0 {
            return Err(CalcError::InvalidPropeller("pitch must not be negative".to_string()));
        }
        if self.prop.blades == 0 {
            return Err(CalcError::InvalidPropeller("at least one blade is required".to_string()));
        }
        if self.motor.kv <= 0.0 {
            return Err(CalcError::InvalidMotor("kv must be positive".to_string()));
        }
        Ok(())
    }
}

with_fields!(Frame {
    with_weight => weight: f64,
    with_rotor_count => rotor_count: u32,
    with_size => size: f64,
    with_tilt_limit => tilt_limit: f64,
    with_misc_weight => misc_weight: f64,
    with_misc_current => misc_current: f64,
});

with_fields!(Battery {
    with_cells => cells: u32,
    with_parallel => parallel: u32,
    with_capacity => capacity: f64,
    with_c_rating => c_rating: f64,
    with_c_rating_max => c_rating_max: f64,
    with_resistance => resistance: f64,
    with_cell_voltage => cell_voltage: f64,
    with_weight => weight: f64,
    with_charge_state => charge_state: ChargeState,
});

with_fields!(Esc { with_current_cont => current_cont: f64, with_current_max => current_max: f64, with_resistance => resistance: f64, with_weight => weight: f64 });

with_fields!(Motor {
    with_kv => kv: f64,
    with_no_load_current => no_load_current: f64,
    with_no_load_voltage => no_load_voltage: f64,
    with_power_limit => power_limit: f64,
    with_resistance => resistance: f64,
    with_length => length: f64,
    with_poles => poles: u32,
    with_weight => weight: f64,
});

with_fields!(Propeller {
    with_diameter => diameter: f64,
    with_pitch => pitch: f64,
    with_blades => blades: u32,
    with_t_const => t_const: f64,
    with_p_const => p_const: f64,
    with_gear_ratio => gear_ratio: f64,
});
