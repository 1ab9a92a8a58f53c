//! Create-and-setup and sync flows on top of any `SheetsRpc`.

use tracing::{debug, info};

use super::SheetsRpc;
use crate::builder::{
    build_create_request, build_setup_request, build_sync_request, DATA_SHEET_TITLE,
    PIVOT_SHEET_TITLE,
};
use crate::cell_ref::a1_range;
use crate::columns::COLUMN_COUNT;
use crate::error::{Result, SheetSyncError};
use crate::types::{BatchUpdateResponse, Order, SheetId, Spreadsheet, SpreadsheetRef};

/// Drives the two spreadsheet workflows: creating a formatted spreadsheet and
/// pushing the current orders into it.
pub struct SheetsHelper<C: SheetsRpc> {
    rpc: C,
}

impl<C: SheetsRpc> SheetsHelper<C> {
    pub fn new(rpc: C) -> Self {
        Self { rpc }
    }

    /// Create a spreadsheet, then write its header row, pivot table and chart.
    ///
    /// The returned reference should be stored and passed to every later [`sync`](Self::sync).
    ///
    /// # Errors
    /// `EmptyTitle` before any call; `MalformedResponse` if the created
    /// spreadsheet lacks ids; otherwise whatever the RPC returns.
    pub fn create_spreadsheet(&self, title: &str) -> Result<SpreadsheetRef> {
        let request = build_create_request(title)?;
        let spreadsheet = self.rpc.create(&request)?;

        let spreadsheet_id = spreadsheet.spreadsheet_id.clone().ok_or_else(|| {
            SheetSyncError::MalformedResponse("created spreadsheet has no id".to_string())
        })?;
        let data_sheet_id = sheet_id(&spreadsheet, DATA_SHEET_TITLE, 0)?;
        let pivot_sheet_id = sheet_id(&spreadsheet, PIVOT_SHEET_TITLE, 1)?;
        info!(
            spreadsheet_id = %spreadsheet_id,
            data_sheet_id,
            pivot_sheet_id,
            "spreadsheet created"
        );

        let setup = build_setup_request(data_sheet_id, pivot_sheet_id);
        self.rpc.batch_update(&spreadsheet_id, &setup)?;
        debug!(requests = setup.requests.len(), "spreadsheet setup applied");

        Ok(SpreadsheetRef {
            spreadsheet_id,
            data_sheet_id,
            pivot_sheet_id,
            spreadsheet_url: spreadsheet.spreadsheet_url,
        })
    }

    /// Replace the data sheet's rows with `orders` in one batch.
    ///
    /// # Errors
    /// Input errors from the builder (nothing is sent), otherwise whatever the
    /// RPC returns.
    pub fn sync(
        &self,
        reference: &SpreadsheetRef,
        orders: &[Order],
    ) -> Result<BatchUpdateResponse> {
        let request = build_sync_request(reference.data_sheet_id, orders)?;
        let response = self.rpc.batch_update(&reference.spreadsheet_id, &request)?;
        info!(
            spreadsheet_id = %reference.spreadsheet_id,
            orders = orders.len(),
            range = %a1_range(DATA_SHEET_TITLE, rows_written(orders.len()), COLUMN_COUNT),
            "orders synced"
        );
        Ok(response)
    }
}

/// Header row plus one row per order, saturating for logging.
fn rows_written(orders: usize) -> u32 {
    u32::try_from(orders).unwrap_or(u32::MAX).saturating_add(1)
}

/// Sheet id by title, falling back to the sheet's creation position.
fn sheet_id(spreadsheet: &Spreadsheet, title: &str, position: usize) -> Result<SheetId> {
    spreadsheet
        .sheet_by_title(title)
        .or_else(|| spreadsheet.sheets.get(position))
        .and_then(|sheet| sheet.properties.sheet_id)
        .ok_or_else(|| SheetSyncError::MalformedResponse(format!("no sheet id for '{title}'")))
}
