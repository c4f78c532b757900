//! ファイル選択コンポーネント
//!
//! 選択は1ファイルのみ。形式の検証はしない（OCRエンジン側で失敗する）。

use leptos::html;
use leptos::prelude::*;
use ocr_excel_common::{SessionStore, SourceFile};
use web_sys::HtmlInputElement;

use crate::file::BrowserFile;
use crate::state::SessionSignal;

#[component]
pub fn UploadArea(session: SessionSignal) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    let on_change = move |ev| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            session.with_session(|s| s.select_file(BrowserFile::new(file)));
        }
    };

    let on_reset = move |_| {
        let cleared = session.with_session(|s| s.reset()).unwrap_or(false);
        // 同じファイルを選び直しても change が発火するように値を消す
        if cleared {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    };

    view! {
        <section class="upload-area">
            <h2>"Upload File"</h2>
            <input
                type="file"
                node_ref=input_ref
                disabled=move || session.with(|s| s.is_processing())
                on:change=on_change
            />
            <button
                class="btn btn-secondary"
                disabled=move || !session.with(|s| s.can_reset())
                on:click=on_reset
            >
                "Reset File"
            </button>
            {move || session.with(|s| {
                s.file().map(|file| view! { <span class="file-name">{file.name()}</span> })
            })}
        </section>
    }
}
