//! index.html に埋め込んだ設定の読み込み
//!
//! `<script type="application/json" id="app-config">{ ... }</script>` があれば使う。

use ocr_excel_common::{Error, Settings};

const CONFIG_ELEMENT_ID: &str = "app-config";

/// 設定を読み込む。ブロックがなければ既定値、壊れていれば既定値とエラーを返す。
pub fn load_settings() -> (Settings, Option<Error>) {
    settings_from_block(config_block_text())
}

fn config_block_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

fn settings_from_block(text: Option<String>) -> (Settings, Option<Error>) {
    match text {
        Some(json) if !json.trim().is_empty() => match Settings::from_json(&json) {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        },
        _ => (Settings::default(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_block_uses_defaults() {
        let (settings, error) = settings_from_block(None);
        assert_eq!(settings, Settings::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_blank_block_uses_defaults() {
        let (settings, error) = settings_from_block(Some("  \n ".into()));
        assert_eq!(settings, Settings::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_valid_block() {
        let (settings, error) =
            settings_from_block(Some(r#"{"languages":{"primary":"eng","secondary":"fra"}}"#.into()));
        assert_eq!(settings.languages.tesseract_spec(), "eng+fra");
        assert!(error.is_none());
    }

    #[test]
    fn test_invalid_block_falls_back() {
        let (settings, error) = settings_from_block(Some(r#"{"sheetName":"a/b"}"#.into()));
        assert_eq!(settings, Settings::default());
        assert!(matches!(error, Some(Error::Config(_))));
    }
}
