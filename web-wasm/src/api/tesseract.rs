//! tesseract.js 連携
//!
//! OCR は JavaScript Bridge（js/ocr-bridge.js）経由で tesseract.js に委譲する。
//! 進捗は Rust 側のクロージャを JS に渡して通知してもらう。

use ocr_excel_common::{Error, Languages, RecognitionResult, Recognizer, Result};
use wasm_bindgen::prelude::*;

use crate::api::js_error_message;

#[wasm_bindgen(module = "/js/ocr-bridge.js")]
extern "C" {
    /// JavaScript側でOCRを実行
    ///
    /// # Arguments
    /// * `image` - 画像のバイト配列
    /// * `languages` - tesseract形式の言語指定（例: "eng+swa"）
    /// * `on_progress` - 進捗（0.0〜1.0）を受け取るコールバック
    ///
    /// # Returns
    /// 認識テキスト（文字列）
    #[wasm_bindgen(js_name = "recognizeText", catch)]
    async fn recognize_text_js(
        image: &[u8],
        languages: &str,
        on_progress: &Closure<dyn FnMut(f64)>,
    ) -> std::result::Result<JsValue, JsValue>;
}

/// tesseract.js バックエンド
#[derive(Clone, Copy, Debug, Default)]
pub struct TesseractJs;

impl Recognizer for TesseractJs {
    async fn recognize(
        &self,
        image: &[u8],
        languages: &Languages,
        on_progress: impl Fn(f32) + 'static,
    ) -> Result<RecognitionResult> {
        // await が終わるまで JS から呼ばれるので、ここで保持しておく
        let callback = Closure::<dyn FnMut(f64)>::new(move |fraction: f64| {
            on_progress(fraction as f32);
        });

        let value = recognize_text_js(image, &languages.tesseract_spec(), &callback)
            .await
            .map_err(|e| Error::Recognition(js_error_message(&e)))?;
        drop(callback);

        let text = value
            .as_string()
            .ok_or_else(|| Error::Recognition("OCR結果が文字列ではありません".into()))?;
        Ok(RecognitionResult::new(text))
    }
}
