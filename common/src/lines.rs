//! OCRテキストの行分割

use crate::types::TextLine;

/// テキストを行に分割し、trim後に空でない行だけを出現順に返す
///
/// `\n` と `\r\n` のどちらの改行でも同じ結果になる。空文字列は空のVecを返す。
pub fn extract_lines(text: &str) -> Vec<TextLine> {
    text.lines().filter_map(TextLine::new).collect()
}

/// 行を `\n` で連結する（`extract_lines` の逆変換）
pub fn join_lines(lines: &[TextLine]) -> String {
    lines
        .iter()
        .map(TextLine::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
