//! Blob を作ってブラウザのダウンロードを起こす

use ocr_excel_common::{Delivery, Error, Result, SpreadsheetDocument};
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::api::js_error_message;

/// `<a download>` によるダウンロード
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownload;

impl Delivery for BrowserDownload {
    fn deliver(&self, document: &SpreadsheetDocument, file_name: &str) -> Result<()> {
        save_bytes(document.bytes(), document.mime_type(), file_name)
            .map_err(|e| Error::Delivery(js_error_message(&e)))
    }
}

/// バイト列を指定の MIME タイプ・ファイル名で保存させる
fn save_bytes(data: &[u8], mime_type: &str, file_name: &str) -> std::result::Result<(), JsValue> {
    let blob = make_blob(data, mime_type)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document がありません"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}

fn make_blob(data: &[u8], mime_type: &str) -> std::result::Result<Blob, JsValue> {
    let array = js_sys::Uint8Array::from(data);
    let parts = js_sys::Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use ocr_excel_common::XLSX_MIME_TYPE;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_blob_carries_xlsx_mime_type() {
        let blob = make_blob(b"PK\x03\x04", XLSX_MIME_TYPE).expect("Blob生成失敗");
        assert_eq!(blob.type_(), XLSX_MIME_TYPE);
        assert_eq!(blob.size(), 4.0);
    }
}
