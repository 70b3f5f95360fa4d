//! Toggleable list of CSV column names.
//!
//! Pure presentation: offers exactly the ordered sequence it is given, with
//! no reordering or de-duplication. Duplicate header names render as separate
//! entries and resolve to the same string either way.

use leptos::*;

#[component]
pub fn ColumnPicker(
    #[prop(into)] columns: Signal<Vec<String>>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="column-picker">
            <button class="btn column-picker-toggle" on:click=move |_| on_toggle.call(())>
                "View Columns"
                <span class="column-picker-arrow" class:open=move || open.get()>"▼"</span>
            </button>

            <Show
                when=move || open.get()
                fallback=|| view! { }
            >
                <ul class="column-picker-list">
                    <For
                        each=move || columns.get().into_iter().enumerate()
                        key=|(idx, _)| *idx
                        children=move |(_, column)| {
                            let value = column.clone();
                            view! {
                                <li
                                    class="column-picker-item"
                                    on:click=move |_| on_select.call(value.clone())
                                >
                                    {column}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
