// src/utils/constants.rs

/// Gravitational acceleration used for every N <-> kg-force conversion (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Sea-level ISA air density (kg/m³).
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225;
/// ISA sea-level temperature (K).
pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;
/// ISA tropospheric lapse rate (K/m).
pub const LAPSE_RATE: f64 = 0.0065;
pub const DENSITY_EXPONENT: f64 = 4.25;
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

pub const INCH_TO_METER: f64 = 0.0254;
pub const MS_TO_KMH: f64 = 3.6;

/// Nominal voltage of a single lithium cell (V).
pub const NOMINAL_CELL_VOLTAGE: f64 = 3.7;
/// Loaded voltage never drops below this per cell (V); the pack counts as empty there.
pub const CUTOFF_CELL_VOLTAGE: f64 = 3.0;
/// Share of rated capacity available before the pack is considered depleted.
pub const USABLE_CAPACITY_FRACTION: f64 = 0.80;

/// Torque constant numerator: kt = 9.55 / kv (N·m/A).
pub const TORQUE_CONSTANT_FACTOR: f64 = 9.55;

pub const CRUISE_CURRENT_FACTOR: f64 = 0.85;
pub const MIXED_HOVER_SHARE: f64 = 0.25;
pub const MIXED_CRUISE_SHARE: f64 = 0.75;

pub const MAX_THROTTLE_PASSES: usize = 5;
pub const VOLTAGE_HEADROOM: f64 = 0.80;

/// Samples per curve / scan step divisor.
pub const CURVE_STEPS: usize = 20;
pub const OPTIMUM_SCAN_START: f64 = 0.1;

pub const DRAG_AREA_PER_KG: f64 = 0.02;
pub const RANGE_SPEED_OVERSHOOT: f64 = 1.1;
pub const RANGE_RPM_OVERSHOOT: f64 = 1.1;
pub const ETL_BASE_SHARE: f64 = 0.6;
pub const ETL_RECOVERED_SHARE: f64 = 0.4;

pub const MOTOR_CURVE_START_CURRENT: f64 = 0.5;
pub const MOTOR_CURVE_OVERSHOOT: f64 = 1.2;
/// Case temperature rise per watt of motor losses (°C/W).
pub const THERMAL_RISE_PER_WATT: f64 = 0.3;
pub const MOTOR_TEMPERATURE_LIMIT: f64 = 80.0;

/// Temperature rise per watt of electrical input at hover and at full throttle (°C/W).
pub const HOVER_TEMPERATURE_RISE: f64 = 0.05;
pub const MAX_TEMPERATURE_RISE: f64 = 0.1;

/// Ambient temperature assumed when none is given (°C).
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_ROTOR_COUNT: u32 = 4;
pub const DEFAULT_PARALLEL_COUNT: u32 = 1;
pub const DEFAULT_CELL_RESISTANCE: f64 = 0.005;
pub const DEFAULT_TUNING_CONSTANT: f64 = 1.0;
