//! Workflow state for the CSV upload form.
//!
//! All sequencing lives here as named operations on [`WorkflowState`], so the
//! workflow stays independent of the DOM and testable on the host. The
//! controller component wires user gestures and async completions onto these
//! operations; presentation components never touch the record directly.

use crate::config::CSV_MIME_TYPE;

/// Returns true when a picker candidate looks like a CSV file, either by
/// extension (case-insensitive) or by the platform-reported content type.
pub fn is_csv(name: &str, mime: &str) -> bool {
    name.to_lowercase().ends_with(".csv") || mime == CSV_MIME_TYPE
}

/// Splits the first line of `content` into header names.
///
/// Fields are comma-separated, whitespace-trimmed, with literal double-quote
/// characters removed. A zero-byte file yields a single empty header.
pub fn parse_header_line(content: &str) -> Vec<String> {
    let first_line = content.split('\n').next().unwrap_or("");
    first_line
        .split(',')
        .map(|field| field.trim().replace('"', ""))
        .collect()
}

/// Session-scoped state record for the upload workflow.
///
/// The selected `web_sys::File` handle is held by the controller component,
/// outside this record; only the accepted file name is mirrored here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkflowState {
    /// Name of the accepted file, if any.
    pub file_name: Option<String>,
    /// Last validation or operational failure notice.
    pub error: Option<String>,
    /// Last success or progress notice.
    pub status: Option<String>,
    /// Column names extracted from the first line of the file.
    pub headers: Vec<String>,
    /// Visibility of the column list.
    pub picker_open: bool,
    /// Column selected by the user; a member of `headers` when set.
    pub chosen_column: Option<String>,
    /// Free-text question tied to the chosen column, stored verbatim.
    pub query: String,
    /// Server-provided output artifact name, set after a successful submission.
    pub result_file: Option<String>,
    /// Selection token. Bumped on every new file selection; header-read
    /// completions present the token they were started with and are discarded
    /// when a newer selection has superseded them.
    selection: u64,
}

impl WorkflowState {
    /// Current selection token.
    pub fn selection(&self) -> u64 {
        self.selection
    }

    /// Clears everything tied to the previous file and bumps the selection
    /// token. Returns the new token; reads started for this selection must
    /// present it back through [`apply_headers`](Self::apply_headers) or
    /// [`header_read_failed`](Self::header_read_failed).
    pub fn begin_selection(&mut self) -> u64 {
        self.file_name = None;
        self.error = None;
        self.status = None;
        self.headers.clear();
        self.picker_open = false;
        self.chosen_column = None;
        self.query.clear();
        self.selection += 1;
        self.selection
    }

    /// Records a rejected (non-CSV) candidate. The file stays empty.
    pub fn reject_file(&mut self) {
        self.error = Some("Please upload only CSV files".to_string());
    }

    /// Records an accepted file and the success notice naming it.
    pub fn accept_file(&mut self, name: &str) {
        self.file_name = Some(name.to_string());
        self.status = Some(format!("File \"{}\" selected successfully", name));
    }

    /// Stores headers extracted for selection `token`. Completions from a
    /// superseded selection are discarded; returns whether the result was
    /// applied.
    pub fn apply_headers(&mut self, token: u64, headers: Vec<String>) -> bool {
        if token != self.selection {
            return false;
        }
        self.headers = headers;
        true
    }

    /// Records a failed header read for selection `token`, subject to the
    /// same staleness guard as [`apply_headers`](Self::apply_headers).
    pub fn header_read_failed(&mut self, token: u64) -> bool {
        if token != self.selection {
            return false;
        }
        self.error = Some("Error reading file headers".to_string());
        true
    }

    /// Precondition check for the local upload pass. Errors when no file has
    /// been selected.
    pub fn can_upload(&mut self) -> bool {
        if self.file_name.is_none() {
            self.error = Some("Please select a file first".to_string());
            return false;
        }
        true
    }

    pub fn upload_succeeded(&mut self) {
        self.status = Some("File uploaded successfully!".to_string());
    }

    pub fn upload_failed(&mut self, reason: &str) {
        self.error = Some(format!("Error uploading file: {}", reason));
    }

    /// Flips the column list visibility. No other field is touched.
    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Records the chosen column and closes the picker. `name` comes from the
    /// picker, which only offers members of `headers`.
    pub fn choose_column(&mut self, name: &str) {
        self.chosen_column = Some(name.to_string());
        self.picker_open = false;
    }

    pub fn edit_query(&mut self, text: &str) {
        self.query = text.to_string();
    }

    /// Checks the submit preconditions. On success flips into the in-flight
    /// presentation (status "Processing...", error cleared) and returns true;
    /// otherwise sets the combined validation error and returns false.
    pub fn begin_submit(&mut self) -> bool {
        if self.file_name.is_none() || self.chosen_column.is_none() || self.query.is_empty() {
            self.error = Some("Please select a file, column, and enter a question".to_string());
            return false;
        }
        self.error = None;
        self.status = Some("Processing...".to_string());
        true
    }

    /// Records a successful submission. The column and query are cleared so a
    /// fresh selection can be made against the same file; the headers and
    /// file stay in place.
    pub fn submit_succeeded(&mut self, output_file: String) {
        self.result_file = Some(output_file);
        self.status = Some("File processed successfully!".to_string());
        self.chosen_column = None;
        self.query.clear();
    }

    /// Records a failed submission. Prior selections stay intact.
    pub fn submit_failed(&mut self, reason: &str) {
        self.error = Some(format!("Error processing file: {}", reason));
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_state() -> WorkflowState {
        let mut state = WorkflowState::default();
        let token = state.begin_selection();
        state.accept_file("data.csv");
        state.apply_headers(token, vec!["Name".to_string(), "City".to_string()]);
        state
    }

    #[test]
    fn test_is_csv_by_extension_case_insensitive() {
        assert!(is_csv("report.csv", ""));
        assert!(is_csv("REPORT.CSV", "application/octet-stream"));
        assert!(is_csv("mixed.Csv", ""));
    }

    #[test]
    fn test_is_csv_by_content_type() {
        assert!(is_csv("export.txt", "text/csv"));
        assert!(!is_csv("export.txt", "text/plain"));
        assert!(!is_csv("archive.zip", "application/zip"));
    }

    #[test]
    fn test_reject_leaves_file_empty() {
        let mut state = WorkflowState::default();
        state.begin_selection();
        state.reject_file();
        assert_eq!(state.file_name, None);
        assert_eq!(state.error.as_deref(), Some("Please upload only CSV files"));
    }

    #[test]
    fn test_parse_header_line_trims_and_strips_quotes() {
        assert_eq!(
            parse_header_line("Name, \"Age\", City\n1,2,3"),
            vec!["Name", "Age", "City"]
        );
    }

    #[test]
    fn test_parse_header_line_preserves_order_and_count() {
        assert_eq!(
            parse_header_line("b,a,b,a\nrest"),
            vec!["b", "a", "b", "a"]
        );
    }

    #[test]
    fn test_parse_header_line_handles_crlf() {
        assert_eq!(parse_header_line("Name,City\r\n1,2"), vec!["Name", "City"]);
    }

    #[test]
    fn test_parse_header_line_empty_file_yields_one_empty_header() {
        assert_eq!(parse_header_line(""), vec![""]);
    }

    #[test]
    fn test_begin_selection_resets_everything_but_result() {
        let mut state = selected_state();
        state.toggle_picker();
        state.choose_column("Name");
        state.edit_query("what is the capital?");
        state.result_file = Some("out.csv".to_string());

        let token = state.begin_selection();

        assert_eq!(state.file_name, None);
        assert_eq!(state.error, None);
        assert_eq!(state.status, None);
        assert!(state.headers.is_empty());
        assert!(!state.picker_open);
        assert_eq!(state.chosen_column, None);
        assert_eq!(state.query, "");
        assert_eq!(state.result_file.as_deref(), Some("out.csv"));
        assert_eq!(token, state.selection());
    }

    #[test]
    fn test_stale_header_read_is_discarded() {
        let mut state = WorkflowState::default();
        let stale = state.begin_selection();
        let fresh = state.begin_selection();
        assert!(stale < fresh);

        assert!(!state.apply_headers(stale, vec!["Old".to_string()]));
        assert!(state.headers.is_empty());

        assert!(!state.header_read_failed(stale));
        assert_eq!(state.error, None);

        assert!(state.apply_headers(fresh, vec!["New".to_string()]));
        assert_eq!(state.headers, vec!["New"]);
    }

    #[test]
    fn test_can_upload_requires_file() {
        let mut state = WorkflowState::default();
        assert!(!state.can_upload());
        assert_eq!(state.error.as_deref(), Some("Please select a file first"));

        let mut state = selected_state();
        assert!(state.can_upload());
    }

    #[test]
    fn test_toggle_picker_twice_is_identity() {
        let mut state = selected_state();
        let before = state.clone();
        state.toggle_picker();
        assert!(state.picker_open);
        state.toggle_picker();
        assert_eq!(state, before);
    }

    #[test]
    fn test_choose_column_closes_picker() {
        let mut state = selected_state();
        state.toggle_picker();
        state.choose_column("City");
        assert_eq!(state.chosen_column.as_deref(), Some("City"));
        assert!(!state.picker_open);
    }

    #[test]
    fn test_begin_submit_rejects_missing_fields() {
        let expected = "Please select a file, column, and enter a question";

        let mut state = WorkflowState::default();
        assert!(!state.begin_submit());
        assert_eq!(state.error.as_deref(), Some(expected));

        let mut state = selected_state();
        assert!(!state.begin_submit());
        assert_eq!(state.error.as_deref(), Some(expected));

        let mut state = selected_state();
        state.choose_column("Name");
        assert!(!state.begin_submit());
        assert_eq!(state.error.as_deref(), Some(expected));
    }

    #[test]
    fn test_begin_submit_enters_processing() {
        let mut state = selected_state();
        state.choose_column("Name");
        state.edit_query("what is the capital?");
        state.error = Some("leftover".to_string());

        assert!(state.begin_submit());
        assert_eq!(state.error, None);
        assert_eq!(state.status.as_deref(), Some("Processing..."));
    }

    #[test]
    fn test_submit_succeeded_clears_column_and_query() {
        let mut state = selected_state();
        state.choose_column("Name");
        state.edit_query("what is the capital?");
        state.begin_submit();

        state.submit_succeeded("result.csv".to_string());

        assert_eq!(state.result_file.as_deref(), Some("result.csv"));
        assert_eq!(state.status.as_deref(), Some("File processed successfully!"));
        assert_eq!(state.chosen_column, None);
        assert_eq!(state.query, "");
        // Headers and file survive so another column can be queried.
        assert_eq!(state.file_name.as_deref(), Some("data.csv"));
        assert_eq!(state.headers, vec!["Name", "City"]);
    }

    #[test]
    fn test_submit_failed_keeps_selections() {
        let mut state = selected_state();
        state.choose_column("Name");
        state.edit_query("what is the capital?");
        state.begin_submit();

        state.submit_failed("bad column");

        assert_eq!(
            state.error.as_deref(),
            Some("Error processing file: bad column")
        );
        assert_eq!(state.status, None);
        assert_eq!(state.result_file, None);
        assert_eq!(state.chosen_column.as_deref(), Some("Name"));
        assert_eq!(state.query, "what is the capital?");
    }

    #[test]
    fn test_query_is_stored_verbatim() {
        let mut state = selected_state();
        state.edit_query("  padded, \"quoted\"  ");
        assert_eq!(state.query, "  padded, \"quoted\"  ");
    }
}
