use wasm_bindgen::prelude::*;

/// Evaluates `input` for the browser front end.
///
/// Returns the value on success and `undefined` on any failure, which is all
/// the page needs to decide between showing a result and showing an error.
#[wasm_bindgen]
#[must_use]
pub fn calculate(input: &str) -> Option<f64> {
    crate::calculate(input).ok()
}
