//! 入力ファイル（ユーザーが選択したファイル）

use crate::error::Result;

/// ユーザーが選択したファイル
///
/// 中身は処理開始時に初めて読み込む。形式・サイズの検証はしない。
#[allow(async_fn_in_trait)]
pub trait SourceFile: Clone {
    /// 表示用のファイル名
    fn name(&self) -> String;

    /// ファイルの中身を読み込む
    async fn read_bytes(&self) -> Result<Vec<u8>>;
}

/// メモリ上のファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

impl SourceFile for InMemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.data.clone())
    }
}
