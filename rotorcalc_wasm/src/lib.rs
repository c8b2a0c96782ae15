// rotorcalc_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the performance calculator.

use wasm_bindgen::prelude::*;
use rotorcalc::apis::easy_calc::PerformanceCalculator;
use rotorcalc::{CalcError, PerformanceResult};

fn to_js_error(err: CalcError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen]
pub struct WasmCalculator {
    calculator: PerformanceCalculator,
}

#[wasm_bindgen]
impl WasmCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            calculator: PerformanceCalculator::new(),
        }
    }

    /// Builds a calculator from the front end's JSON form state.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(config_json: &str) -> Result<WasmCalculator, JsValue> {
        PerformanceCalculator::from_json(config_json)
            .map(|calculator| Self { calculator })
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.calculator.config().to_json().map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn calculate(&self) -> WasmResult {
        if let Err(err) = self.calculator.validate() {
            web_sys::console::warn_1(&JsValue::from_str(&format!("rotorcalc: {}", err)));
        }
        WasmResult(self.calculator.calculate())
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot JSON in, JSON out.
#[wasm_bindgen(js_name = calculatePerformance)]
pub fn calculate_performance_json(config_json: &str) -> Result<String, JsValue> {
    let calculator = PerformanceCalculator::from_json(config_json).map_err(to_js_error)?;
    calculator
        .calculate()
        .to_json()
        .map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

#[wasm_bindgen]
pub struct WasmResult(PerformanceResult);

#[wasm_bindgen]
impl WasmResult {
    #[wasm_bindgen(getter, js_name = hoverFlightTime)]
    pub fn hover_flight_time(&self) -> f64 {
        self.0.hover.flight_time
    }

    #[wasm_bindgen(getter, js_name = mixedFlightTime)]
    pub fn mixed_flight_time(&self) -> f64 {
        self.0.mixed.flight_time
    }

    #[wasm_bindgen(getter, js_name = hoverCurrent)]
    pub fn hover_current(&self) -> f64 {
        self.0.hover.state.current
    }

    #[wasm_bindgen(getter, js_name = maxCurrent)]
    pub fn max_current(&self) -> f64 {
        self.0.max.state.current
    }

    #[wasm_bindgen(getter)]
    pub fn twr(&self) -> f64 {
        self.0.stats.twr
    }

    #[wasm_bindgen(getter, js_name = maxSpeed)]
    pub fn max_speed(&self) -> f64 {
        self.0.stats.max_speed
    }

    /// The complete result, including both curves.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.0.to_json().map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }
}
