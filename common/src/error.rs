//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// `FileRead` / `Recognition` / `Export` / `Delivery` は実行中の処理を打ち切る。
/// 呼び出し側（pipeline）で一度だけ捕捉される。
#[derive(Error, Debug)]
pub enum Error {
    #[error("File read error: {0}")]
    FileRead(String),

    #[error("Recognition error: {0}")]
    Recognition(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
