//! 出力・OCR設定
//!
//! ブラウザ版は index.html 内の JSON ブロックがあれば読み込み、なければ既定値を使う。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 出力ファイル名の既定値
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "result.xlsx";

/// ワークシート名の既定値
pub const DEFAULT_SHEET_NAME: &str = "Sheet 1";

/// Excel のシート名上限
const MAX_SHEET_NAME_LEN: usize = 31;

/// シート名に使えない文字
const INVALID_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// OCR言語設定（主言語＋副言語）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Languages {
    pub primary: String,
    pub secondary: String,
}

impl Default for Languages {
    fn default() -> Self {
        Self {
            primary: "eng".into(),
            secondary: "swa".into(),
        }
    }
}

impl Languages {
    /// tesseract 形式の言語指定（例: "eng+swa"）
    pub fn tesseract_spec(&self) -> String {
        format!("{}+{}", self.primary, self.secondary)
    }

    fn validate(&self) -> Result<()> {
        for code in [&self.primary, &self.secondary] {
            let valid = !code.is_empty()
                && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                return Err(Error::Config(format!("invalid language code: {:?}", code)));
            }
        }
        Ok(())
    }
}

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub languages: Languages,
    pub output_file_name: String,
    pub sheet_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            languages: Languages::default(),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.into(),
            sheet_name: DEFAULT_SHEET_NAME.into(),
        }
    }
}

impl Settings {
    /// JSON文字列から読み込み、検証する。省略したキーは既定値になる。
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.languages.validate()?;

        if !self.output_file_name.ends_with(".xlsx") || self.output_file_name.len() <= ".xlsx".len() {
            return Err(Error::Config(format!(
                "output file name must end with .xlsx: {:?}",
                self.output_file_name
            )));
        }

        let sheet_len = self.sheet_name.chars().count();
        if sheet_len == 0 || sheet_len > MAX_SHEET_NAME_LEN {
            return Err(Error::Config(format!(
                "sheet name must be 1-{} characters: {:?}",
                MAX_SHEET_NAME_LEN, self.sheet_name
            )));
        }
        if self.sheet_name.contains(INVALID_SHEET_CHARS) {
            return Err(Error::Config(format!(
                "sheet name contains invalid characters: {:?}",
                self.sheet_name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.output_file_name, "result.xlsx");
        assert_eq!(settings.sheet_name, "Sheet 1");
        assert_eq!(settings.languages.tesseract_spec(), "eng+swa");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let settings = Settings::from_json(r#"{"languages":{"primary":"eng","secondary":"fra"}}"#)
            .expect("設定読み込み失敗");
        assert_eq!(settings.languages.tesseract_spec(), "eng+fra");
        assert_eq!(settings.output_file_name, "result.xlsx");
        assert_eq!(settings.sheet_name, "Sheet 1");
    }

    #[test]
    fn test_from_json_empty_object() {
        let settings = Settings::from_json("{}").expect("設定読み込み失敗");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_json_invalid_json() {
        let err = Settings::from_json("{ invalid").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_rejects_bad_language_code() {
        let err = Settings::from_json(r#"{"languages":{"primary":"eng","secondary":"sw a"}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_non_xlsx_file_name() {
        let settings = Settings {
            output_file_name: "result.csv".into(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(Error::Config(_))));

        let settings = Settings {
            output_file_name: ".xlsx".into(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_sheet_names() {
        for name in ["", "a/b", "[x]", "this sheet name is far too long for excel"] {
            let settings = Settings {
                sheet_name: name.into(),
                ..Default::default()
            };
            assert!(settings.validate().is_err(), "accepted: {:?}", name);
        }
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_string(&Settings::default()).expect("シリアライズ失敗");
        assert!(json.contains("\"outputFileName\":"));
        assert!(json.contains("\"sheetName\":"));
    }
}
