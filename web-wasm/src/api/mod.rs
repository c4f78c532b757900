//! 外部エンジン連携

pub mod tesseract;

use wasm_bindgen::{JsCast, JsValue};

/// JS 側の例外を文字列にする
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
