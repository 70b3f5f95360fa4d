//! File picker and upload trigger.
//!
//! Pure presentation: receives the accepted file name and forwards gestures
//! to the controller's callbacks.

use leptos::*;
use web_sys::Event;

#[component]
pub fn FileSelect(
    #[prop(into)] file_name: Signal<Option<String>>,
    #[prop(into)] on_file_change: Callback<Event>,
    #[prop(into)] on_upload: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="file-select">
            <label for="csv-upload">"Upload CSV File"</label>

            <div class="file-select-row">
                <input
                    id="csv-upload"
                    type="file"
                    accept=".csv"
                    on:change=move |ev| on_file_change.call(ev)
                />
                <button
                    class="btn btn-primary"
                    disabled=move || file_name.get().is_none()
                    on:click=move |_| on_upload.call(())
                >
                    "Upload"
                </button>
            </div>

            <Show
                when=move || file_name.get().is_some()
                fallback=|| view! { }
            >
                <p class="file-select-name">
                    "Selected: " {move || file_name.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
