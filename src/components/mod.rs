//! UI Components for the AskCSV application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`CsvQueryForm`] - Upload workflow controller, owns all state
//! - [`FileSelect`] - File picker and upload trigger
//! - [`ColumnPicker`] - Toggleable column list
//! - [`ValueEntry`] - Question input and submit trigger

mod column_picker;
mod file_select;
mod footer;
mod hero;
mod value_entry;
mod workflow;

pub use column_picker::*;
pub use file_select::*;
pub use footer::*;
pub use hero::*;
pub use value_entry::*;
pub use workflow::*;
