use serde::{Deserialize, Serialize};

use super::{DataValidationRule, PivotTable, SheetId};

/// A single cell payload: value, format, validation or an anchored pivot table.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    /// The value as if the user had typed it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_entered_value: Option<ExtendedValue>,
    /// Explicit format for the cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_entered_format: Option<CellFormat>,
    /// Input validation attached to the cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_validation: Option<DataValidationRule>,
    /// Pivot table anchored at this cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_table: Option<PivotTable>,
}

impl CellData {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            user_entered_value: Some(ExtendedValue::StringValue(value.into())),
            ..Self::default()
        }
    }

    pub fn number(value: f64) -> Self {
        Self {
            user_entered_value: Some(ExtendedValue::NumberValue(value)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.user_entered_format = Some(format);
        self
    }

    #[must_use]
    pub fn with_validation(mut self, rule: DataValidationRule) -> Self {
        self.data_validation = Some(rule);
        self
    }
}

/// The kinds of value a cell can hold.
///
/// Externally tagged, so `NumberValue(3.0)` serializes as `{"numberValue": 3.0}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedValue {
    NumberValue(f64),
    StringValue(String),
    BoolValue(bool),
    FormulaValue(String),
}

impl ExtendedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::StringValue(s) | Self::FormulaValue(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::NumberValue(n) => Some(*n),
            _ => None,
        }
    }
}

/// Cell formatting
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_format: Option<TextFormat>,
}

/// Font-level formatting
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

/// Number format: a category plus the display pattern
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    #[serde(rename = "type")]
    pub format_type: NumberFormatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Number format category
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberFormatType {
    Text,
    Number,
    Percent,
    Currency,
    Date,
    Time,
    DateTime,
    Scientific,
}

/// Values for one row of cells
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RowData {
    #[serde(default)]
    pub values: Vec<CellData>,
}

/// A single cell position on a sheet (0-indexed)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridCoordinate {
    pub sheet_id: SheetId,
    pub row_index: u32,
    pub column_index: u32,
}

impl GridCoordinate {
    pub fn new(sheet_id: SheetId, row_index: u32, column_index: u32) -> Self {
        Self {
            sheet_id,
            row_index,
            column_index,
        }
    }
}

/// A half-open rectangle on a sheet. Missing bounds mean unbounded.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    pub sheet_id: SheetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<u32>,
}

impl GridRange {
    /// Whole sheet.
    pub fn sheet(sheet_id: SheetId) -> Self {
        Self {
            sheet_id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rows_from(mut self, start: u32) -> Self {
        self.start_row_index = Some(start);
        self
    }

    #[must_use]
    pub fn columns(mut self, start: u32, end: Option<u32>) -> Self {
        self.start_column_index = Some(start);
        self.end_column_index = end;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_cell_wire_shape() {
        let cell = CellData::number(3.0).with_format(CellFormat {
            number_format: Some(NumberFormat {
                format_type: NumberFormatType::Number,
                pattern: Some("#,##0".to_string()),
            }),
            text_format: None,
        });
        assert_eq!(
            serde_json::to_value(&cell).unwrap(),
            json!({
                "userEnteredValue": {"numberValue": 3.0},
                "userEnteredFormat": {"numberFormat": {"type": "NUMBER", "pattern": "#,##0"}}
            })
        );
    }

    #[test]
    fn test_grid_range_omits_unbounded_edges() {
        let range = GridRange::sheet(4).rows_from(1).columns(2, None);
        assert_eq!(
            serde_json::to_value(range).unwrap(),
            json!({"sheetId": 4, "startRowIndex": 1, "startColumnIndex": 2})
        );
    }
}
