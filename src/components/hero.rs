//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Upload a CSV file, pick a column, and ask a question about it. "
                "The answers come back as a downloadable CSV."
            </p>
        </div>
    }
}
