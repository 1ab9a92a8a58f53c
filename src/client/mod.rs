//! Sending requests to the Sheets service.
//!
//! `SheetsRpc` is the seam between the request builders and the network. It
//! mirrors the two API calls this crate needs; errors come back unchanged.

mod helper;
mod http;

pub use helper::SheetsHelper;
pub use http::HttpSheetsClient;

use crate::error::Result;
use crate::types::{
    BatchUpdateRequest, BatchUpdateResponse, CreateSpreadsheetRequest, Spreadsheet,
};

/// The Sheets API operations used by [`SheetsHelper`].
pub trait SheetsRpc {
    /// `spreadsheets.create`
    ///
    /// # Errors
    /// Any failure reported by the service or transport.
    fn create(&self, request: &CreateSpreadsheetRequest) -> Result<Spreadsheet>;

    /// `spreadsheets.batchUpdate`, applied atomically by the service.
    ///
    /// # Errors
    /// Any failure reported by the service or transport.
    fn batch_update(
        &self,
        spreadsheet_id: &str,
        request: &BatchUpdateRequest,
    ) -> Result<BatchUpdateResponse>;
}

impl<T: SheetsRpc + ?Sized> SheetsRpc for &T {
    fn create(&self, request: &CreateSpreadsheetRequest) -> Result<Spreadsheet> {
        (**self).create(request)
    }

    fn batch_update(
        &self,
        spreadsheet_id: &str,
        request: &BatchUpdateRequest,
    ) -> Result<BatchUpdateResponse> {
        (**self).batch_update(spreadsheet_id, request)
    }
}

impl<T: SheetsRpc + ?Sized> SheetsRpc for Box<T> {
    fn create(&self, request: &CreateSpreadsheetRequest) -> Result<Spreadsheet> {
        (**self).create(request)
    }

    fn batch_update(
        &self,
        spreadsheet_id: &str,
        request: &BatchUpdateRequest,
    ) -> Result<BatchUpdateResponse> {
        (**self).batch_update(spreadsheet_id, request)
    }
}
