// demos/quad_summary.rs

use log::info;
use rotorcalc::apis::easy_calc::PerformanceCalculator;
use rotorcalc::apis::sweep::sweep_capacity;
use rotorcalc::CalcError;

fn main() -> Result<(), CalcError> {
    env_logger::init();

    // An optional JSON configuration file as the only argument.
    let calculator = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|e| CalcError::Parse(format!("{}: {}", path, e)))?;
            PerformanceCalculator::from_json(&json)?
        }
        None => PerformanceCalculator::new(),
    };
    if let Err(err) = calculator.validate() {
        eprintln!("warning: {}", err);
    }

    let result = calculator.calculate();
    println!("{}", result);

    println!("\nRange vs. airspeed:");
    println!("{:>8} {:>10} {:>10} {:>10}", "km/h", "min", "km", "km (drag)");
    for sample in &result.graphs.range {
        println!(
            "{:>8.1} {:>10.1} {:>10.2} {:>10.2}",
            sample.speed, sample.flight_time_incl_drag, sample.range_no_drag, sample.range_incl_drag
        );
    }

    println!("\nMotor characteristic:");
    println!("{:>8} {:>10} {:>8} {:>10} {:>8}", "A", "W in", "eff %", "rpm", "°C");
    for sample in &result.graphs.motor {
        println!(
            "{:>8.2} {:>10.1} {:>8.1} {:>10.0} {:>8.1}",
            sample.current, sample.power, sample.efficiency, sample.rpm, sample.temperature
        );
    }

    info!("sweeping battery capacity");
    let capacities = [2000.0, 4000.0, 6000.0, 8000.0, 10000.0];
    println!("\nCapacity sweep:");
    for (capacity, result) in sweep_capacity(calculator.config(), &capacities) {
        println!(
            "{:>6.0} mAh: hover {:>5.1} min, mixed {:>5.1} min, TWR {:.2}",
            capacity, result.hover.flight_time, result.mixed.flight_time, result.stats.twr
        );
    }

    Ok(())
}
