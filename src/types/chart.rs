use serde::{Deserialize, Serialize};

use super::{GridCoordinate, GridRange};

/// Type of basic chart
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BasicChartType {
    /// Horizontal bars
    #[default]
    Bar,
    /// Vertical bars
    Column,
    Line,
    Area,
    Scatter,
    Combo,
    SteppedArea,
}

/// Where the legend is drawn
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegendPosition {
    BottomLegend,
    LeftLegend,
    #[default]
    RightLegend,
    TopLegend,
    NoLegend,
}

/// A chart embedded in a sheet
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedChart {
    /// Assigned by the service on creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_id: Option<u32>,
    pub spec: ChartSpec,
    pub position: EmbeddedObjectPosition,
}

/// Chart title plus its type-specific specification
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub basic_chart: BasicChartSpec,
}

/// Bar, line, area, column or scatter chart specification
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BasicChartSpec {
    pub chart_type: BasicChartType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_position: Option<LegendPosition>,
    /// Category axis data (one entry for a single domain)
    #[serde(default)]
    pub domains: Vec<BasicChartDomain>,
    /// Value series plotted against the domain
    #[serde(default)]
    pub series: Vec<BasicChartSeries>,
}

/// Category axis data of a basic chart
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BasicChartDomain {
    pub domain: ChartData,
}

/// A value series of a basic chart
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BasicChartSeries {
    pub series: ChartData,
}

/// Reference to the cells a chart reads
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub source_range: ChartSourceRange,
}

impl ChartData {
    /// Chart data read from a single range.
    pub fn from_range(range: GridRange) -> Self {
        Self {
            source_range: ChartSourceRange {
                sources: vec![range],
            },
        }
    }
}

/// Ranges backing a chart domain or series
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChartSourceRange {
    pub sources: Vec<GridRange>,
}

/// Placement of an embedded chart
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedObjectPosition {
    pub overlay_position: OverlayPosition,
}

/// Chart floating over the grid, anchored at a cell
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPosition {
    pub anchor_cell: GridCoordinate,
    #[serde(default)]
    pub offset_x_pixels: u32,
    #[serde(default)]
    pub offset_y_pixels: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_pixels: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_pixels: Option<u32>,
}
