//! プログレスバーコンポーネント

use leptos::prelude::*;

use crate::state::SessionSignal;

/// 進捗が0より大きいときだけ表示する
#[component]
pub fn ProgressBar(session: SessionSignal) -> impl IntoView {
    view! {
        <Show when=move || session.with(|s| s.progress() > 0.0)>
            <div class="progress-container">
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style=move || format!("width: {}%", session.with(|s| s.progress()))
                    />
                </div>
                <p class="progress-text">
                    {move || session.with(|s| s.progress_label().unwrap_or_default())}
                </p>
            </div>
        </Show>
    }
}
