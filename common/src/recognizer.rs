//! OCRエンジンの抽象化

use crate::config::Languages;
use crate::error::{Error, Result};
use crate::types::RecognitionResult;

/// OCRバックエンド
///
/// 画像のバイト列を受け取り、認識テキストを返す。処理中は `on_progress` に
/// 0.0〜1.0 の進捗を任意の回数通知する（1.0 に届かないまま終わることもある）。
#[allow(async_fn_in_trait)]
pub trait Recognizer {
    async fn recognize(
        &self,
        image: &[u8],
        languages: &Languages,
        on_progress: impl Fn(f32) + 'static,
    ) -> Result<RecognitionResult>;
}

/// 決められた進捗を通知してから、決められたテキスト（またはエラー）を返すバックエンド
///
/// エンジンなしでパイプラインを動かすためのもの。
#[derive(Debug, Clone)]
pub struct ScriptedRecognizer {
    progress: Vec<f32>,
    outcome: std::result::Result<String, String>,
}

impl ScriptedRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            progress: Vec::new(),
            outcome: Ok(text.into()),
        }
    }

    /// 常に `Error::Recognition` を返す
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            progress: Vec::new(),
            outcome: Err(message.into()),
        }
    }

    pub fn with_progress(mut self, steps: impl IntoIterator<Item = f32>) -> Self {
        self.progress = steps.into_iter().collect();
        self
    }
}

impl Recognizer for ScriptedRecognizer {
    async fn recognize(
        &self,
        _image: &[u8],
        _languages: &Languages,
        on_progress: impl Fn(f32) + 'static,
    ) -> Result<RecognitionResult> {
        for fraction in &self.progress {
            on_progress(*fraction);
        }
        self.outcome
            .clone()
            .map(RecognitionResult::new)
            .map_err(Error::Recognition)
    }
}
