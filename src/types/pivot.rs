use serde::{Deserialize, Serialize};

use super::GridRange;

/// A pivot table anchored at a cell
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PivotTable {
    /// Source data range the pivot reads from
    pub source: GridRange,
    /// Row groupings (one per grouped column)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<PivotGroup>,
    /// Aggregated value columns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<PivotValue>,
}

/// Grouping of pivot rows by one source column
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PivotGroup {
    /// Column offset within the source range
    pub source_column_offset: u32,
    #[serde(default)]
    pub show_totals: bool,
    pub sort_order: SortOrder,
}

/// Sort direction of pivot groups
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// One aggregated value column of a pivot table.
///
/// Either `source_column_offset` or `formula` is set.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PivotValue {
    pub summarize_function: SummarizeFunction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_column_offset: Option<u32>,
    /// Display name of the value column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Calculated-field formula referencing source headers by name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

/// Aggregation applied to a pivot value column
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummarizeFunction {
    #[default]
    Sum,
    Counta,
    Count,
    Average,
    Max,
    Min,
}
