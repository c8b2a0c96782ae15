// src/models/battery.rs

use crate::config::Battery;
use crate::utils::{CUTOFF_CELL_VOLTAGE, NOMINAL_CELL_VOLTAGE, USABLE_CAPACITY_FRACTION};

/// Electrical view of a battery pack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryPack {
    pub cells: f64,
    /// Open-circuit voltage at 3.7 V per cell.
    pub nominal_voltage: f64,
    /// Pack internal resistance in Ω.
    pub resistance: f64,
    /// Rated charge across all parallel groups in Ah.
    pub capacity_ah: f64,
    /// Rated energy in Wh.
    pub energy_wh: f64,
}

impl BatteryPack {
    pub fn from_battery(battery: &Battery) -> Self {
        let cells = f64::from(battery.cells);
        let parallel = f64::from(battery.parallel_groups());
        let nominal_voltage = cells * NOMINAL_CELL_VOLTAGE;
        let group_ah = battery.capacity / 1000.0;

        Self {
            cells,
            nominal_voltage,
            resistance: battery.cell_resistance() * cells / parallel,
            capacity_ah: group_ah * parallel,
            // Wh of one group times the nominal voltage, scaled by the group count.
            energy_wh: group_ah * nominal_voltage * parallel,
        }
    }

    /// Charge available before the pack counts as depleted (80% of rated).
    pub fn usable_charge_ah(&self) -> f64 {
        self.capacity_ah * USABLE_CAPACITY_FRACTION
    }

    pub fn cutoff_voltage(&self) -> f64 {
        CUTOFF_CELL_VOLTAGE * self.cells
    }

    /// Terminal voltage while `total_current` flows, floored at the cutoff voltage.
    pub fn loaded_voltage(&self, total_current: f64) -> f64 {
        let sag = total_current * self.resistance;
        self.cutoff_voltage().max(self.nominal_voltage - sag)
    }
}
