// src/test_fixtures.rs
// Reference aircraft shared by the unit tests.

use crate::config::{AircraftConfig, Battery, Environment, Esc, Frame, Motor, Propeller};

fn sea_level() -> Environment {
    Environment::default().with_temperature(25.0).with_elevation(0.0)
}

/// 5" freestyle quad on 4S, no controller or motor power limits.
pub fn golden_quad() -> AircraftConfig {
    AircraftConfig {
        frame: Frame::default().with_weight(450.0).with_rotor_count(4),
        environment: sea_level(),
        battery: Battery::default()
            .with_cells(4)
            .with_parallel(1)
            .with_capacity(1500.0)
            .with_resistance(0.005)
            .with_weight(180.0),
        esc: Esc::default().with_current_max(0.0).with_resistance(0.005).with_weight(10.0),
        motor: Motor::default()
            .with_kv(2400.0)
            .with_no_load_current(1.0)
            .with_power_limit(0.0)
            .with_resistance(0.05)
            .with_weight(30.0),
        prop: Propeller::default()
            .with_diameter(5.0)
            .with_pitch(4.5)
            .with_blades(3)
            .with_t_const(1.0)
            .with_p_const(1.1),
    }
}

/// X8 heavy lifter on 12S with 22" props.
pub fn heavy_lift_octo() -> AircraftConfig {
    AircraftConfig {
        frame: Frame::default().with_weight(4000.0).with_rotor_count(8),
        environment: sea_level(),
        battery: Battery::default()
            .with_cells(12)
            .with_parallel(1)
            .with_capacity(16000.0)
            .with_resistance(0.002)
            .with_weight(4000.0),
        esc: Esc::default().with_current_max(0.0).with_resistance(0.002).with_weight(50.0),
        motor: Motor::default()
            .with_kv(180.0)
            .with_no_load_current(0.8)
            .with_power_limit(0.0)
            .with_resistance(0.15)
            .with_weight(200.0),
        prop: Propeller::default()
            .with_diameter(22.0)
            .with_pitch(8.0)
            .with_blades(2)
            .with_t_const(1.0)
            .with_p_const(1.1),
    }
}

/// The golden quad carrying a 2 kg frame.
pub fn overweight_quad() -> AircraftConfig {
    let config = golden_quad();
    config.with_frame(config.frame.with_weight(2000.0))
}
