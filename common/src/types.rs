//! OCR結果とExcel出力の型定義
//!
//! - RecognitionResult: OCRエンジンの生テキスト
//! - TextLine: 前後の空白を除いた空でない1行
//! - SpreadsheetDocument: ダウンロード用のxlsxバイト列

use serde::{Deserialize, Serialize};

/// xlsx の MIME タイプ
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// OCR結果（1入力につき1つのテキスト）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionResult {
    text: String,
}

impl RecognitionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// 空でない、trim済みの1行
///
/// `TextLine::new` 以外で作れないので、空行や前後空白を含む値は存在しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TextLine(String);

impl TextLine {
    /// 前後の空白を除去し、空なら None
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TextLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TextLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 生成済みExcel（1回の出力の間だけ保持する）
#[derive(Debug, Clone)]
pub struct SpreadsheetDocument {
    bytes: Vec<u8>,
    row_count: usize,
}

impl SpreadsheetDocument {
    pub(crate) fn new(bytes: Vec<u8>, row_count: usize) -> Self {
        Self { bytes, row_count }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// データ行数（= 行数、ヘッダなし）
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn mime_type(&self) -> &'static str {
        XLSX_MIME_TYPE
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
