use approx::assert_relative_eq;
use crate::assert_float_eq;
use crate::config::{AircraftConfig, Battery, Environment, Propeller};
use crate::models::{air_density, BatteryPack, Drivetrain, MassBreakdown, PropulsionCoefficients};

#[test]
fn test_air_density_sea_level() {
    assert_float_eq(air_density(15.0, 0.0), 1.225, 1e-12, Some("ISA standard day"));
    assert_float_eq(air_density(25.0, 0.0), 1.1839132986751635, 1e-12, Some("Warm day at sea level"));
}

#[test]
fn test_air_density_altitude() {
    let rho = Environment::default().with_temperature(10.0).with_elevation(3000.0).air_density();
    assert_float_eq(rho, 0.9255568212246538, 1e-12, Some("3000 m at 10 °C"));
    assert!(rho < air_density(10.0, 0.0), "Density must fall with elevation");
}

#[test]
fn test_air_density_unset_temperature() {
    let unset = Environment::default().with_temperature(0.0).with_elevation(500.0);
    assert_float_eq(unset.air_density(), air_density(25.0, 500.0), 1e-15, Some("0 reads as 25 °C"));
    assert!(unset.air_density() < air_density(0.0, 500.0));
}

#[test]
fn test_air_density_is_defined_outside_model_range() {
    // Below sea level and far below freezing still give a positive number.
    let rho = air_density(-40.0, -400.0);
    assert!(rho.is_finite() && rho > 0.0);
}

#[test]
fn test_mass_breakdown_scales_per_rotor_parts() {
    let config = AircraftConfig::default()
        .with_frame(AircraftConfig::default().frame.with_weight(450.0).with_rotor_count(4).with_misc_weight(20.0));
    let config = config
        .with_battery(config.battery.with_weight(180.0))
        .with_esc(config.esc.with_weight(10.0))
        .with_motor(config.motor.with_weight(30.0));
    let mass = MassBreakdown::from_config(&config);
    assert_float_eq(mass.drive_kg, 0.340, 1e-12, Some("4 motors + 4 ESCs + battery"));
    assert_float_eq(mass.total_kg, 0.810, 1e-12, Some("Frame + drive + misc"));
}

#[test]
fn test_battery_pack_scaling() {
    let battery = Battery::default()
        .with_cells(6)
        .with_parallel(2)
        .with_capacity(3000.0)
        .with_resistance(0.004);
    let pack = BatteryPack::from_battery(&battery);
    assert_float_eq(pack.nominal_voltage, 22.2, 1e-12, Some("6 x 3.7 V"));
    assert_float_eq(pack.resistance, 0.012, 1e-12, Some("Series adds, parallel divides"));
    assert_float_eq(pack.capacity_ah, 6.0, 1e-12, Some("Two 3 Ah groups"));
    assert_float_eq(pack.usable_charge_ah(), 4.8, 1e-12, Some("80% usable"));
    assert_float_eq(pack.energy_wh, 133.2, 1e-9, Some("Pack energy"));
    assert_float_eq(pack.cutoff_voltage(), 18.0, 1e-12, None);
}

#[test]
fn test_battery_loaded_voltage_floor() {
    let pack = BatteryPack::from_battery(&Battery::default().with_cells(4).with_resistance(0.005));
    assert_float_eq(pack.loaded_voltage(0.0), 14.8, 1e-12, Some("No load"));
    assert_float_eq(pack.loaded_voltage(20.0), 14.8 - 20.0 * 0.02, 1e-12, Some("Sag"));
    assert_float_eq(pack.loaded_voltage(1.0e6), 12.0, 1e-12, Some("Clamped at 3.0 V per cell"));
}

#[test]
fn test_propulsion_coefficients() {
    let prop = Propeller::default()
        .with_diameter(5.0)
        .with_pitch(4.5)
        .with_blades(3)
        .with_t_const(1.0)
        .with_p_const(1.1);
    let coefficients = PropulsionCoefficients::new(&prop, air_density(25.0, 0.0));
    assert_relative_eq!(coefficients.ct, 0.2497018331093468, max_relative = 1e-12);
    assert_relative_eq!(coefficients.cp, 0.10723465733246859, max_relative = 1e-12);
    assert_relative_eq!(coefficients.k_thrust, 7.690534298169113e-05, max_relative = 1e-10);
    assert_relative_eq!(coefficients.k_power, 4.194436964563289e-06, max_relative = 1e-10);
    assert_relative_eq!(coefficients.disc_area(), 0.012667686977437444, max_relative = 1e-12);
}

#[test]
fn test_thrust_inversion() {
    let coefficients = PropulsionCoefficients::new(&Propeller::default(), 1.225);
    let rps = 150.0;
    let thrust = coefficients.thrust(rps);
    assert_relative_eq!(coefficients.rps_for_thrust(thrust), rps, max_relative = 1e-12);
}

#[test]
fn test_more_blades_more_thrust() {
    let two = PropulsionCoefficients::new(&Propeller::default().with_blades(2), 1.225);
    let three = PropulsionCoefficients::new(&Propeller::default().with_blades(3), 1.225);
    assert!(three.k_thrust > two.k_thrust);
    assert!(three.k_power > two.k_power);
}

#[test]
fn test_drivetrain_disc_area() {
    let config = AircraftConfig::default();
    let drivetrain = Drivetrain::new(&config);
    assert_eq!(drivetrain.rotors, 4.0);
    assert_relative_eq!(drivetrain.total_disc_area(), drivetrain.propulsion.disc_area() * 4.0, max_relative = 1e-12);
    assert!(drivetrain.air_density > 0.0);
}
