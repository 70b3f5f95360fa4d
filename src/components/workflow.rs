//! CSV upload workflow controller.
//!
//! Owns the [`WorkflowState`] record and the selected file handle, and maps
//! user gestures and asynchronous completions onto the named state
//! operations. The presentation components below it carry no state of their
//! own.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::{ColumnPicker, FileSelect, ValueEntry};
use crate::config::BACKEND_URL;
use crate::services::{download_url, process_csv, read_text};
use crate::state::{is_csv, parse_header_line, WorkflowState};

#[component]
pub fn CsvQueryForm() -> impl IntoView {
    let (state, set_state) = create_signal(WorkflowState::default());
    // The raw handle stays outside the state record so the record remains
    // host-testable; only the UI thread touches it.
    let selected_file = store_value(None::<File>);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let candidate = input.files().and_then(|files| files.get(0));

        let mut token = 0;
        set_state.update(|s| token = s.begin_selection());
        selected_file.set_value(None);

        let Some(file) = candidate else {
            return;
        };

        if !is_csv(&file.name(), &file.type_()) {
            set_state.update(|s| s.reject_file());
            return;
        }

        set_state.update(|s| s.accept_file(&file.name()));
        selected_file.set_value(Some(file.clone()));

        spawn_local(async move {
            match read_text(&file).await {
                Ok(content) => {
                    let headers = parse_header_line(&content);
                    set_state.update(|s| {
                        s.apply_headers(token, headers);
                    });
                }
                Err(e) => {
                    log::error!("header read failed: {}", e);
                    set_state.update(|s| {
                        s.header_read_failed(token);
                    });
                }
            }
        });
    };

    // Local validation pass; never calls the backend.
    let on_upload = move |_: ()| {
        let mut proceed = false;
        set_state.update(|s| proceed = s.can_upload());
        if !proceed {
            return;
        }
        let Some(file) = selected_file.get_value() else {
            return;
        };

        spawn_local(async move {
            match read_text(&file).await {
                Ok(content) => {
                    let headers = parse_header_line(&content);
                    log::info!("first row (headers): {:?}", headers);
                    log::info!("number of columns: {}", headers.len());
                    set_state.update(|s| s.upload_succeeded());
                }
                Err(e) => {
                    set_state.update(|s| s.upload_failed(&e.to_string()));
                }
            }
        });
    };

    let on_toggle = move |_: ()| set_state.update(|s| s.toggle_picker());
    let on_select = move |column: String| set_state.update(|s| s.choose_column(&column));
    let on_input = move |text: String| set_state.update(|s| s.edit_query(&text));

    let on_submit = move |_: ()| {
        let mut proceed = false;
        set_state.update(|s| proceed = s.begin_submit());
        if !proceed {
            return;
        }
        let Some(file) = selected_file.get_value() else {
            return;
        };
        let column = state
            .with_untracked(|s| s.chosen_column.clone())
            .unwrap_or_default();
        let question = state.with_untracked(|s| s.query.clone());

        spawn_local(async move {
            match process_csv(&file, &column, &question, BACKEND_URL).await {
                Ok(response) => {
                    log::info!("processing finished, output file: {}", response.output_file);
                    set_state.update(|s| s.submit_succeeded(response.output_file));
                }
                Err(e) => {
                    log::error!("processing failed: {}", e);
                    set_state.update(|s| s.submit_failed(&e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="csv-query-form">
            <FileSelect
                file_name=Signal::derive(move || state.get().file_name)
                on_file_change=on_file_change
                on_upload=on_upload
            />

            <Show
                when=move || state.with(|s| !s.headers.is_empty() && s.status.is_some())
                fallback=|| view! { }
            >
                <ColumnPicker
                    columns=Signal::derive(move || state.get().headers)
                    open=Signal::derive(move || state.get().picker_open)
                    on_toggle=on_toggle
                    on_select=on_select
                />
            </Show>

            <Show
                when=move || state.with(|s| s.chosen_column.is_some())
                fallback=|| view! { }
            >
                <ValueEntry
                    column=Signal::derive(move || state.get().chosen_column.unwrap_or_default())
                    query=Signal::derive(move || state.get().query)
                    on_input=on_input
                    on_submit=on_submit
                />
            </Show>

            <Show
                when=move || state.with(|s| s.error.is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || state.get().error.unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || state.with(|s| s.status.is_some())
                fallback=|| view! { }
            >
                <div class="status-message">
                    {move || state.get().status.unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || state.with(|s| s.result_file.is_some())
                fallback=|| view! { }
            >
                <div class="download-link">
                    <a
                        href=move || {
                            let name = state.get().result_file.unwrap_or_default();
                            download_url(BACKEND_URL, &name)
                        }
                        download=move || state.get().result_file.unwrap_or_default()
                    >
                        "Download"
                    </a>
                </div>
            </Show>
        </div>
    }
}
