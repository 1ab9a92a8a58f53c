//! Sheet sync builder
//!
//! Pure functions that turn orders into Google Sheets request bodies:
//! - `build_create_request`: the two-sheet spreadsheet ("Data" and "Pivot")
//! - `build_setup_request`: header row, pivot table, pivot formatting and chart
//! - `build_sync_request`: grid resize plus one row of cells per order
//!
//! Nothing here performs I/O. Identical inputs always produce identical requests.

mod chart;
mod pivot;
mod rows;

use crate::columns::{COLUMNS, COLUMN_COUNT};
use crate::error::{Result, SheetSyncError};
use crate::types::{
    BatchUpdateRequest, CellData, CellFormat, CreateSpreadsheetRequest, GridCoordinate,
    GridProperties, Order, Request, RowData, Sheet, SheetId, SheetProperties,
    SpreadsheetProperties, TextFormat, UpdateCellsRequest, UpdateSheetPropertiesRequest,
};

pub use chart::{build_chart_request, CHART_TITLE};
pub use pivot::{build_format_pivot_request, build_pivot_request, REVENUE_NAME};
pub use rows::build_rows;

/// Title of the sheet holding one row per order
pub const DATA_SHEET_TITLE: &str = "Data";
/// Title of the sheet holding the pivot table and chart
pub const PIVOT_SHEET_TITLE: &str = "Pivot";

/// Build the body of `spreadsheets.create`.
///
/// The "Data" sheet has a frozen header row and exactly one column per order
/// field; the "Pivot" sheet hides its gridlines. Sheet ids are left for the
/// service to assign.
///
/// # Errors
/// Returns `EmptyTitle` if `title` is empty or only whitespace.
pub fn build_create_request(title: &str) -> Result<CreateSpreadsheetRequest> {
    if title.trim().is_empty() {
        return Err(SheetSyncError::EmptyTitle);
    }

    Ok(CreateSpreadsheetRequest {
        properties: SpreadsheetProperties {
            title: Some(title.to_string()),
            locale: None,
        },
        sheets: vec![
            Sheet {
                properties: SheetProperties {
                    title: Some(DATA_SHEET_TITLE.to_string()),
                    grid_properties: Some(GridProperties {
                        column_count: Some(COLUMN_COUNT),
                        frozen_row_count: Some(1),
                        ..GridProperties::default()
                    }),
                    ..SheetProperties::default()
                },
            },
            Sheet {
                properties: SheetProperties {
                    title: Some(PIVOT_SHEET_TITLE.to_string()),
                    grid_properties: Some(GridProperties {
                        hide_gridlines: Some(true),
                        ..GridProperties::default()
                    }),
                    ..SheetProperties::default()
                },
            },
        ],
    })
}

/// Build the header row write: every column header in bold at row 0.
pub fn build_header_request(data_sheet_id: SheetId) -> UpdateCellsRequest {
    let bold = CellFormat {
        number_format: None,
        text_format: Some(TextFormat {
            bold: Some(true),
            italic: None,
        }),
    };
    let values = COLUMNS
        .iter()
        .map(|column| CellData::string(column.header).with_format(bold.clone()))
        .collect();

    UpdateCellsRequest {
        start: GridCoordinate::new(data_sheet_id, 0, 0),
        rows: vec![RowData { values }],
        fields: "userEnteredValue,userEnteredFormat.textFormat.bold".to_string(),
    }
}

/// Build the batch sent right after creation: header row, pivot table,
/// pivot number formatting and the revenue chart, in that order.
pub fn build_setup_request(
    data_sheet_id: SheetId,
    pivot_sheet_id: SheetId,
) -> BatchUpdateRequest {
    BatchUpdateRequest::new(vec![
        Request::UpdateCells(build_header_request(data_sheet_id)),
        Request::UpdateCells(build_pivot_request(data_sheet_id, pivot_sheet_id)),
        Request::RepeatCell(build_format_pivot_request(pivot_sheet_id)),
        Request::AddChart(build_chart_request(pivot_sheet_id)),
    ])
}

/// Build the batch that replaces the data sheet's contents with `orders`.
///
/// The grid is resized to one header row plus one row per order, then the
/// order rows are written starting at row 1.
///
/// # Errors
/// Returns `MissingField` for the first order lacking a column's field, and
/// `TooManyRows` if the row count does not fit a sheet grid.
pub fn build_sync_request(sheet_id: SheetId, orders: &[Order]) -> Result<BatchUpdateRequest> {
    let row_count = orders
        .len()
        .checked_add(1)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(SheetSyncError::TooManyRows { rows: orders.len() })?;
    let rows = build_rows(orders)?;

    let resize = UpdateSheetPropertiesRequest {
        properties: SheetProperties {
            sheet_id: Some(sheet_id),
            grid_properties: Some(GridProperties {
                row_count: Some(row_count),
                column_count: Some(COLUMN_COUNT),
                ..GridProperties::default()
            }),
            ..SheetProperties::default()
        },
        fields: "gridProperties(rowCount,columnCount)".to_string(),
    };
    let write = UpdateCellsRequest {
        start: GridCoordinate::new(sheet_id, 1, 0),
        rows,
        fields: "*".to_string(),
    };

    Ok(BatchUpdateRequest::new(vec![
        Request::UpdateSheetProperties(resize),
        Request::UpdateCells(write),
    ]))
}
