//! Blocking HTTPS implementation of `SheetsRpc`.

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::SheetsRpc;
use crate::config::Config;
use crate::error::{Result, SheetSyncError};
use crate::types::{BatchUpdateRequest, BatchUpdateResponse, CreateSpreadsheetRequest, Spreadsheet};

/// Talks to `{api_base_url}/v4/spreadsheets` with a bearer token.
///
/// Holds one connection pool for all calls. No retries are attempted.
pub struct HttpSheetsClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl HttpSheetsClient {
    /// # Errors
    /// Returns `Config` for unusable settings and `Http` if the TLS client
    /// cannot be initialised.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("order-sheets/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn spreadsheets_url(&self) -> String {
        format!("{}/v4/spreadsheets", self.base_url)
    }

    fn batch_update_url(&self, spreadsheet_id: &str) -> Result<String> {
        if !is_valid_spreadsheet_id(spreadsheet_id) {
            return Err(SheetSyncError::Config(format!(
                "invalid spreadsheet id '{spreadsheet_id}'"
            )));
        }
        Ok(format!(
            "{}/{}:batchUpdate",
            self.spreadsheets_url(),
            spreadsheet_id
        ))
    }

    fn post<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(url, "POST");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json()?);
        }

        let text = match response.text() {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "failed to read error body");
                status.canonical_reason().unwrap_or_default().to_string()
            }
        };
        let err = api_error(status.as_u16(), &text);
        warn!(status = status.as_u16(), "Sheets API request failed");
        Err(err)
    }
}

impl SheetsRpc for HttpSheetsClient {
    fn create(&self, request: &CreateSpreadsheetRequest) -> Result<Spreadsheet> {
        self.post(&self.spreadsheets_url(), request)
    }

    fn batch_update(
        &self,
        spreadsheet_id: &str,
        request: &BatchUpdateRequest,
    ) -> Result<BatchUpdateResponse> {
        let url = self.batch_update_url(spreadsheet_id)?;
        self.post(&url, request)
    }
}

/// Spreadsheet ids are URL-safe base64-like tokens.
fn is_valid_spreadsheet_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Google error envelope: `{"error": {"code": 403, "message": "...", "status": "PERMISSION_DENIED"}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Turn a non-2xx response body into `SheetSyncError::Api`.
///
/// Bodies that are not a Google error envelope are kept verbatim.
pub(crate) fn api_error(status: u16, body: &str) -> SheetSyncError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => match error.status {
            Some(code) => format!("{code}: {}", error.message),
            None => error.message,
        },
        Err(_) => body.trim().to_string(),
    };
    SheetSyncError::Api { status, message }
}
