//! JavaScript entry points.

use wasm_bindgen::prelude::*;

use crate::converters::html::convert_slide_to_html;
use crate::models::slide::Slide;

/// Routes panics and `log` output to the browser console.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed, which is fine.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Renders the insertion points of a JSON slide snapshot into an HTML page.
#[wasm_bindgen]
pub fn render_slide_html(
    snapshot_json: &str,
    canvas_width: u32,
    canvas_height: u32,
    background: Option<String>,
) -> Result<String, JsValue> {
    let slide = Slide::from_json(snapshot_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    convert_slide_to_html(&slide, canvas_width, canvas_height, background.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
