use serde::{Deserialize, Serialize};

use super::{
    is_false, CellData, EmbeddedChart, GridCoordinate, GridRange, RowData, SheetProperties,
};

/// Body of `spreadsheets.batchUpdate`: sub-requests applied atomically in order.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest {
    pub requests: Vec<Request>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_spreadsheet_in_response: bool,
}

impl BatchUpdateRequest {
    pub fn new(requests: Vec<Request>) -> Self {
        Self {
            requests,
            include_spreadsheet_in_response: false,
        }
    }
}

/// Response of `spreadsheets.batchUpdate`.
///
/// Replies are kept as raw JSON; callers only rely on success or failure.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub replies: Vec<serde_json::Value>,
}

/// One sub-request of a batch update.
///
/// Externally tagged with the API's camelCase request names, so
/// `Request::UpdateCells(..)` serializes as `{"updateCells": {..}}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    UpdateSheetProperties(UpdateSheetPropertiesRequest),
    UpdateCells(UpdateCellsRequest),
    RepeatCell(RepeatCellRequest),
    AddChart(AddChartRequest),
}

impl Request {
    /// Wire name of the sub-request, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UpdateSheetProperties(_) => "updateSheetProperties",
            Self::UpdateCells(_) => "updateCells",
            Self::RepeatCell(_) => "repeatCell",
            Self::AddChart(_) => "addChart",
        }
    }
}

/// Update sheet properties selected by the `fields` mask
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSheetPropertiesRequest {
    pub properties: SheetProperties,
    pub fields: String,
}

/// Write rows of cells starting at a coordinate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCellsRequest {
    pub start: GridCoordinate,
    #[serde(default)]
    pub rows: Vec<RowData>,
    pub fields: String,
}

/// Apply one cell template to every cell of a range
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepeatCellRequest {
    pub range: GridRange,
    pub cell: CellData,
    pub fields: String,
}

/// Add an embedded chart
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AddChartRequest {
    pub chart: EmbeddedChart,
}
