// #![deny(warnings)]
pub mod carlos;
pub mod catalogue;
pub mod equal;
pub mod generator;
pub mod helpers;
pub mod interval;
pub mod ji_ratio;
pub mod notes;
pub mod orwell;
pub mod partch;
pub mod placement;
pub mod report;
pub mod scale;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde_wasm_bindgen::{from_value, to_value};

#[cfg(feature = "wasm")]
use crate::catalogue::ReferenceCatalogue;
#[cfg(feature = "wasm")]
use crate::generator::Generator;

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Generates and annotates the scale described by `request`, a serialized [`Generator`],
/// and returns its report rows.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn scale_result(request: JsValue) -> Result<JsValue, JsValue> {
    let generator: Generator = from_value(request)?;
    let catalogue = ReferenceCatalogue::default();
    let annotated = generator
        .annotate(&catalogue)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(to_value(&report::rows(&annotated))?)
}
