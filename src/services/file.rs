//! Asynchronous whole-file text reads.

use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::types::{AppError, AppResult};

/// Reads the full textual content of `file`.
pub async fn read_text(file: &File) -> AppResult<String> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| AppError::FileRead(format!("{:?}", e)))?;

    value
        .as_string()
        .ok_or_else(|| AppError::FileRead("file content is not text".to_string()))
}
