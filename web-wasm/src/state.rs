//! Leptos シグナルに載せた Session

use leptos::prelude::*;
use ocr_excel_common::{Session, SessionStore};

use crate::file::BrowserFile;

/// 画面状態のシグナル
///
/// `web_sys::File` は Send ではないので LocalStorage に置く。
#[derive(Clone, Copy)]
pub struct SessionSignal(RwSignal<Session<BrowserFile>, LocalStorage>);

impl SessionSignal {
    pub fn new() -> Self {
        Self(RwSignal::new_local(Session::new()))
    }

    /// 追跡付きで読む（view内のクロージャから呼ぶ）
    pub fn with<T>(&self, f: impl FnOnce(&Session<BrowserFile>) -> T) -> T {
        self.0.with(f)
    }
}

impl Default for SessionSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for SessionSignal {
    type File = BrowserFile;

    fn with_session<T>(&self, f: impl FnOnce(&mut Session<BrowserFile>) -> T) -> Option<T> {
        self.0.try_update(f)
    }
}
