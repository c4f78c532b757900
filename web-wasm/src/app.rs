//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use ocr_excel_common::{process, Outcome};
use wasm_bindgen_futures::spawn_local;

use crate::api::tesseract::TesseractJs;
use crate::components::{
    header::Header,
    process_panel::ProcessPanel,
    upload_area::UploadArea,
};
use crate::export::download::BrowserDownload;
use crate::settings::load_settings;
use crate::state::SessionSignal;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = SessionSignal::new();

    let (settings, config_error) = load_settings();
    if let Some(e) = config_error {
        console::error!(format!("設定を読み込めません。既定値を使います: {}", e));
    }

    // 実行ハンドラ（失敗は開発者コンソールにだけ出す）
    let on_process = move |_: ()| {
        let settings = settings.clone();
        spawn_local(async move {
            match process(&session, &TesseractJs, &BrowserDownload, &settings).await {
                Outcome::Skipped => {}
                Outcome::Delivered(report) => console::log!(format!(
                    "{}: {}行を {} に出力 ({} bytes)",
                    report.file_name, report.line_count, report.output_file_name, report.output_size
                )),
                Outcome::Failed(e) => console::error!(format!("Error: {}", e)),
            }
        });
    };

    view! {
        <div class="container" data-phase=move || session.with(|s| s.phase().as_str())>
            <Header />
            <UploadArea session=session />
            <ProcessPanel session=session on_process=on_process />
        </div>
    }
}
