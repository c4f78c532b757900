//! 実行ボタンコンポーネント

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::state::SessionSignal;

#[component]
pub fn ProcessPanel<FP>(session: SessionSignal, on_process: FP) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
{
    let is_processing = move || session.with(|s| s.is_processing());

    view! {
        <section class="process-panel">
            <h2>"Process and Download"</h2>
            <button
                class="btn btn-primary"
                disabled=move || !session.with(|s| s.can_process())
                on:click={
                    let on_process = on_process.clone();
                    move |_| on_process(())
                }
            >
                {move || if is_processing() { "Processing..." } else { "Process and Download" }}
            </button>

            <ProgressBar session=session />
        </section>
    }
}
