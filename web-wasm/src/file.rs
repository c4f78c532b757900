//! ブラウザで選択されたファイル

use ocr_excel_common::{Error, Result, SourceFile};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::api::js_error_message;

/// `<input type="file">` で選択されたファイル
#[derive(Clone, Debug)]
pub struct BrowserFile(web_sys::File);

impl BrowserFile {
    pub fn new(file: web_sys::File) -> Self {
        Self(file)
    }
}

impl SourceFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| Error::FileRead(js_error_message(&e)))?;
        let buffer: js_sys::ArrayBuffer = buffer
            .dyn_into()
            .map_err(|_| Error::FileRead("ArrayBuffer を取得できません".into()))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn wasm_read_bytes_returns_file_content() {
        let data = js_sys::Uint8Array::from(&b"PNG?"[..]);
        let parts = js_sys::Array::of1(&data);
        let file = web_sys::File::new_with_u8_array_sequence(&parts, "scan.png")
            .expect("File生成失敗");

        let file = BrowserFile::new(file);
        assert_eq!(file.name(), "scan.png");
        assert_eq!(file.read_bytes().await.expect("読み込み失敗"), b"PNG?".to_vec());
    }
}
