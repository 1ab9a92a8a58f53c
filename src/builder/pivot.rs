//! Pivot table summarizing units and revenue per product.

use crate::cell_ref::quote_name;
use crate::columns::{COLUMN_COUNT, PRODUCT_CODE, UNITS_ORDERED, UNIT_PRICE};
use crate::numfmt::{cell_format, currency_format};
use crate::types::{
    CellData, GridCoordinate, GridRange, PivotGroup, PivotTable, PivotValue, RepeatCellRequest,
    RowData, SheetId, SortOrder, SummarizeFunction, UpdateCellsRequest,
};

/// Name of the calculated revenue column
pub const REVENUE_NAME: &str = "Revenue";

/// Column of the pivot output holding the revenue sum
/// (product code, units sum, revenue sum).
pub(crate) const PIVOT_REVENUE_COLUMN: u32 = 2;

/// Calculated-field formula multiplying units by price, referencing headers by name.
fn revenue_formula() -> String {
    format!(
        "={} * {}",
        quote_name(UNITS_ORDERED.header),
        quote_name(UNIT_PRICE.header)
    )
}

/// Build the pivot table write anchored at A1 of the pivot sheet.
///
/// Groups the data sheet by product code (ascending, no totals) and sums
/// units ordered plus a calculated revenue column.
pub fn build_pivot_request(
    data_sheet_id: SheetId,
    pivot_sheet_id: SheetId,
) -> UpdateCellsRequest {
    let pivot = PivotTable {
        source: GridRange {
            sheet_id: data_sheet_id,
            start_row_index: Some(0),
            end_row_index: None,
            start_column_index: Some(0),
            end_column_index: Some(COLUMN_COUNT),
        },
        rows: vec![PivotGroup {
            source_column_offset: PRODUCT_CODE.index,
            show_totals: false,
            sort_order: SortOrder::Ascending,
        }],
        values: vec![
            PivotValue {
                summarize_function: SummarizeFunction::Sum,
                source_column_offset: Some(UNITS_ORDERED.index),
                name: None,
                formula: None,
            },
            PivotValue {
                summarize_function: SummarizeFunction::Sum,
                source_column_offset: None,
                name: Some(REVENUE_NAME.to_string()),
                formula: Some(revenue_formula()),
            },
        ],
    };

    UpdateCellsRequest {
        start: GridCoordinate::new(pivot_sheet_id, 0, 0),
        rows: vec![RowData {
            values: vec![CellData {
                pivot_table: Some(pivot),
                ..CellData::default()
            }],
        }],
        fields: "*".to_string(),
    }
}

/// Apply the currency format to the pivot's revenue column, below its header.
pub fn build_format_pivot_request(pivot_sheet_id: SheetId) -> RepeatCellRequest {
    RepeatCellRequest {
        range: GridRange::sheet(pivot_sheet_id)
            .rows_from(1)
            .columns(PIVOT_REVENUE_COLUMN, None),
        cell: CellData::default().with_format(cell_format(currency_format())),
        fields: "userEnteredFormat.numberFormat".to_string(),
    }
}
