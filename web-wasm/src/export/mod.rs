//! 生成ファイルのダウンロード

pub mod download;
