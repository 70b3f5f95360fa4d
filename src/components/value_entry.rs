//! Question input for the chosen column.
//!
//! Pure presentation: mounted by the controller only once a column is chosen.

use leptos::*;

#[component]
pub fn ValueEntry(
    #[prop(into)] column: Signal<String>,
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="value-entry">
            <p class="value-entry-column">
                "Selected Column: " {move || column.get()}
            </p>
            <div class="value-entry-row">
                <input
                    type="text"
                    placeholder="Enter your query..."
                    prop:value=move || query.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=move |_| on_submit.call(())>
                    "Submit"
                </button>
            </div>
        </div>
    }
}
