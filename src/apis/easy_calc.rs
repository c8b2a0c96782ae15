// src/apis/easy_calc.rs

use crate::config::AircraftConfig;
use crate::errors::CalcError;
use crate::performance::{calculate_performance, PerformanceResult};

/// A simplified interface for interactive use.
///
/// Holds the configuration currently being edited. Every edit produces a new
/// calculator, so earlier snapshots stay valid and can be recomputed at will.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerformanceCalculator {
    config: AircraftConfig,
}

impl PerformanceCalculator {

    /// Creates a calculator holding the default aircraft.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcalc::apis::easy_calc::PerformanceCalculator;
    ///
    /// let calculator = PerformanceCalculator::new();
    /// assert_eq!(calculator.config().frame.rotor_count, 4);
    /// ```
    ///
    /// # Notes
    ///
    /// The default aircraft is a 1900 g quad with 7" props on a 4S 6000 mAh pack,
    /// flown at 500 m and 25 °C.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AircraftConfig) -> Self {
        Self { config }
    }

    /// Creates a calculator from a JSON configuration document.
    ///
    /// # Errors
    ///
    /// * `CalcError::Parse` - If the document is not valid JSON for a configuration
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        AircraftConfig::from_json(json).map(Self::with_config)
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    /// Derives a calculator with an edited configuration.
    ///
    /// # Arguments
    ///
    /// * `edit` - Maps the current configuration to the new one
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcalc::apis::easy_calc::PerformanceCalculator;
    ///
    /// let base = PerformanceCalculator::new();
    /// let bigger_pack = base.edit(|c| c.with_battery(c.battery.with_capacity(8000.0)));
    /// assert_eq!(base.config().battery.capacity, 6000.0);
    /// assert_eq!(bigger_pack.config().battery.capacity, 8000.0);
    /// ```
    #[must_use]
    pub fn edit<F>(&self, edit: F) -> Self
    where
        F: FnOnce(AircraftConfig) -> AircraftConfig,
    {
        Self { config: edit(self.config) }
    }

    /// Runs the full performance prediction for the current configuration.
    pub fn calculate(&self) -> PerformanceResult {
        calculate_performance(&self.config)
    }

    /// Checks the configuration for values the model cannot make sense of.
    ///
    /// # Errors
    ///
    /// See [`AircraftConfig::validate`].
    pub fn validate(&self) -> Result<(), CalcError> {
        self.config.validate()
    }
}
