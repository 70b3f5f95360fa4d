//! HTTP service for submitting a CSV file and question to the backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult, ErrorBody, ProcessResponse};

/// Submits `file` plus the chosen column and question as a multipart POST to
/// `{backend_url}/process`.
///
/// A non-success status is reported as [`AppError::Server`] carrying the
/// server's `error` field when the body provides one; a success response whose
/// body does not match [`ProcessResponse`] is an [`AppError::Decode`].
pub async fn process_csv(
    file: &File,
    column: &str,
    question: &str,
    backend_url: &str,
) -> AppResult<ProcessResponse> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("file", file)
        .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;
    form_data
        .append_with_str("column", column)
        .map_err(|e| AppError::Network(format!("Failed to append column: {:?}", e)))?;
    form_data
        .append_with_str("question", question)
        .map_err(|e| AppError::Network(format!("Failed to append question: {:?}", e)))?;

    let url = format!("{}/process", backend_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "Failed to process file".to_string());
        return Err(AppError::Server {
            status: response.status(),
            message,
        });
    }

    response
        .json::<ProcessResponse>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// URL the rendered download link points at.
///
/// The link is never fetched programmatically; the browser follows it with a
/// suggested save name equal to the output file.
pub fn download_url(backend_url: &str, output_file: &str) -> String {
    format!("{}/download/{}", backend_url, output_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url_joins_host_and_file() {
        assert_eq!(
            download_url("http://localhost:5001", "result.csv"),
            "http://localhost:5001/download/result.csv"
        );
    }
}
