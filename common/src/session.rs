//! 画面状態（選択ファイル・処理中フラグ・進捗）の状態機械
//!
//! Idle ──begin──▶ Running ──finish──▶ Idle
//!
//! Running から Idle に戻るのは `finish` のみ（ユーザーによるキャンセルはない）。

use std::cell::RefCell;
use std::rc::Rc;

/// 処理フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
        }
    }
}

/// 画面状態
#[derive(Debug, Clone)]
pub struct Session<F> {
    file: Option<F>,
    phase: Phase,
    /// 0.0〜100.0
    progress: f32,
}

impl<F> Default for Session<F> {
    fn default() -> Self {
        Self {
            file: None,
            phase: Phase::Idle,
            progress: 0.0,
        }
    }
}

impl<F: Clone> Session<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// 進捗（0.0〜100.0）
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// ファイルを選択する。処理中は無視して false を返す。
    pub fn select_file(&mut self, file: F) -> bool {
        if self.is_processing() {
            return false;
        }
        self.file = Some(file);
        true
    }

    pub fn can_reset(&self) -> bool {
        self.has_file() && !self.is_processing()
    }

    /// 選択を解除する。解除できなければ false。
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.file = None;
        true
    }

    pub fn can_process(&self) -> bool {
        self.has_file() && !self.is_processing()
    }

    /// 処理を開始して対象ファイルを返す
    ///
    /// ファイル未選択・処理中なら状態を変えずに None を返す。
    pub fn begin(&mut self) -> Option<F> {
        if !self.can_process() {
            return None;
        }
        let file = self.file.clone()?;
        self.phase = Phase::Running;
        self.progress = 0.0;
        Some(file)
    }

    /// エンジンからの進捗（0.0〜1.0）を反映する
    ///
    /// 範囲外は丸め、既存値より小さい値は無視する。Idle 中は何もしない。
    pub fn report_progress(&mut self, fraction: f32) {
        if !self.is_processing() || fraction.is_nan() {
            return;
        }
        let percent = (fraction * 100.0).clamp(0.0, 100.0);
        if percent > self.progress {
            self.progress = percent;
        }
    }

    /// 処理を終了して Idle に戻る（成功・失敗どちらでも）
    pub fn finish(&mut self) {
        self.phase = Phase::Idle;
        self.progress = 0.0;
    }

    /// プログレスバーのラベル（進捗が0のときは None）
    pub fn progress_label(&self) -> Option<String> {
        (self.progress > 0.0).then(|| format!("{:.2}%", self.progress))
    }
}

/// Session の保持先
///
/// ブラウザ版は Leptos のシグナル、テストは `Rc<RefCell<Session>>` を使う。
/// 保持先がすでに破棄されていれば None を返す。
pub trait SessionStore: Clone + 'static {
    type File: Clone;

    fn with_session<T>(&self, f: impl FnOnce(&mut Session<Self::File>) -> T) -> Option<T>;
}

impl<F: Clone + 'static> SessionStore for Rc<RefCell<Session<F>>> {
    type File = F;

    fn with_session<T>(&self, f: impl FnOnce(&mut Session<F>) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}
