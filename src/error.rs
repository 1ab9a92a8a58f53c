//! Structured error types for order-sheets.
//!
//! Caller-input errors (`EmptyTitle`, `MissingField`, `InvalidField`,
//! `TooManyRows`) are raised by the request builders before anything is sent.
//! Everything reported by the Sheets service is passed through unchanged.

/// All errors that can occur while building or sending Sheets requests.
#[derive(Debug, thiserror::Error)]
pub enum SheetSyncError {
    /// Spreadsheet title was empty or whitespace.
    #[error("Spreadsheet title must not be empty")]
    EmptyTitle,

    /// An order lacks a field required by the column layout.
    #[error("Order at row {row} is missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    /// An order field holds a value its column cannot be written with.
    #[error("Order at row {row} has invalid field '{field}': {reason}")]
    InvalidField {
        row: usize,
        field: &'static str,
        reason: &'static str,
    },

    /// More orders than a sheet grid can address.
    #[error("Cannot sync {rows} rows into a single sheet")]
    TooManyRows { rows: usize },

    /// Error reported by the Sheets service.
    #[error("Sheets API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure talking to the Sheets service.
    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a body this crate cannot use.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid configuration.
    #[error("Configuration: {0}")]
    Config(String),
}

impl SheetSyncError {
    /// True for errors detected locally before any request was sent.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyTitle
                | Self::MissingField { .. }
                | Self::InvalidField { .. }
                | Self::TooManyRows { .. }
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetSyncError>;
