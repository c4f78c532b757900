//! Excel生成（共通ライブラリ）
//!
//! OCR結果の行をA列に1行ずつ書き出す。ヘッダ行はなし。

use crate::error::{Error, Result};
use crate::types::{SpreadsheetDocument, TextLine};
use rust_xlsxwriter::Workbook;

/// 行をExcelに書き出してバッファを返す
///
/// # Arguments
/// * `lines` - 出力する行（i番目の行はExcelの i+1 行目、A列）
/// * `sheet_name` - ワークシート名
///
/// 行が空でもワークシートを1枚持つ有効なファイルを返す。
pub fn build_spreadsheet(lines: &[TextLine], sheet_name: &str) -> Result<SpreadsheetDocument> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| Error::Export(format!("シート名設定エラー: {}", e)))?;

    for (index, line) in lines.iter().enumerate() {
        let row = u32::try_from(index)
            .map_err(|_| Error::Export(format!("行番号が範囲外です: {}", index + 1)))?;
        worksheet
            .write_string(row, 0, line.as_str())
            .map_err(|e| Error::Export(format!("セル書き込みエラー (A{}): {}", index + 1, e)))?;
    }

    let bytes = workbook
        .save_to_buffer()
        .map_err(|e| Error::Export(format!("Excel保存エラー: {}", e)))?;

    Ok(SpreadsheetDocument::new(bytes, lines.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::extract_lines;

    #[test]
    fn test_build_produces_zip_container() {
        let lines = extract_lines("Hello\nWorld");
        let doc = build_spreadsheet(&lines, "Sheet 1").expect("Excel生成失敗");

        assert_eq!(doc.row_count(), 2);
        // xlsx は zip なので "PK" で始まる
        assert_eq!(&doc.bytes()[..2], b"PK");
    }

    #[test]
    fn test_build_empty_lines() {
        let doc = build_spreadsheet(&[], "Sheet 1").expect("空のExcel生成失敗");
        assert_eq!(doc.row_count(), 0);
        assert!(!doc.bytes().is_empty());
    }

    #[test]
    fn test_build_invalid_sheet_name() {
        let lines = extract_lines("Hello");
        let err = build_spreadsheet(&lines, "bad/name").unwrap_err();
        assert!(matches!(err, Error::Export(_)));
    }

    #[test]
    fn test_build_string_too_long() {
        // Excel のセル文字数上限（32767）を超える
        let long = "x".repeat(40_000);
        let lines = extract_lines(&long);
        let err = build_spreadsheet(&lines, "Sheet 1").unwrap_err();
        assert!(matches!(err, Error::Export(_)));
        assert!(err.to_string().contains("A1"));
    }
}
