//! Revenue-per-product bar chart drawn over the pivot sheet.

use super::pivot::PIVOT_REVENUE_COLUMN;
use crate::types::{
    AddChartRequest, BasicChartDomain, BasicChartSeries, BasicChartSpec, BasicChartType,
    ChartData, ChartSpec, EmbeddedChart, EmbeddedObjectPosition, GridCoordinate, GridRange,
    LegendPosition, OverlayPosition, SheetId,
};

pub const CHART_TITLE: &str = "Revenue per Product";

const ANCHOR_COLUMN: u32 = 3;
const OFFSET_PIXELS: u32 = 50;
const WIDTH_PIXELS: u32 = 600;
const HEIGHT_PIXELS: u32 = 371;

/// One full column of the pivot sheet, from the header row down.
fn pivot_column(pivot_sheet_id: SheetId, column: u32) -> ChartData {
    ChartData::from_range(
        GridRange::sheet(pivot_sheet_id)
            .rows_from(0)
            .columns(column, Some(column + 1)),
    )
}

/// Build the bar chart: one bar per product code (pivot column A) with its
/// length taken from the revenue sum (pivot column C).
pub fn build_chart_request(pivot_sheet_id: SheetId) -> AddChartRequest {
    AddChartRequest {
        chart: EmbeddedChart {
            chart_id: None,
            spec: ChartSpec {
                title: Some(CHART_TITLE.to_string()),
                basic_chart: BasicChartSpec {
                    chart_type: BasicChartType::Bar,
                    legend_position: Some(LegendPosition::RightLegend),
                    domains: vec![BasicChartDomain {
                        domain: pivot_column(pivot_sheet_id, 0),
                    }],
                    series: vec![BasicChartSeries {
                        series: pivot_column(pivot_sheet_id, PIVOT_REVENUE_COLUMN),
                    }],
                },
            },
            position: EmbeddedObjectPosition {
                overlay_position: OverlayPosition {
                    anchor_cell: GridCoordinate::new(pivot_sheet_id, 0, ANCHOR_COLUMN),
                    offset_x_pixels: OFFSET_PIXELS,
                    offset_y_pixels: OFFSET_PIXELS,
                    width_pixels: Some(WIDTH_PIXELS),
                    height_pixels: Some(HEIGHT_PIXELS),
                },
            },
        },
    }
}
