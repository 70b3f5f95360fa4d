//! AskCSV - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a CSV file, picking one of its
//! columns, and asking a free-text question answered by the processing
//! backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CsvQueryForm (workflow controller)                         │
//! │  ├── FileSelect (picker + upload trigger)                   │
//! │  ├── ColumnPicker (after headers are extracted)             │
//! │  ├── ValueEntry (after a column is chosen)                  │
//! │  └── error / status / download link                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`state`] - Workflow state record and its named operations
//! - [`types`] - Common types (API responses, errors)
//! - [`components`] - UI components
//! - [`services`] - File reads and backend communication

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod types;

pub use config::*;
pub use state::WorkflowState;
pub use types::{AppError, AppResult, ErrorBody, ProcessResponse};

pub use components::*;
pub use services::*;

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 AskCSV - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <CsvQueryForm/>
        </div>
        <Footer/>
    }
}
