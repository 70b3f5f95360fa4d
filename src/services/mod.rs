//! Platform and backend services.
//!
//! # Services
//!
//! - [`file`] - Asynchronous whole-file text reads
//! - [`process`] - Submission to the processing backend

pub mod file;
pub mod process;

pub use file::*;
pub use process::*;
