//! Number formats applied to numeric order columns and the pivot revenue column.

use crate::types::{CellFormat, NumberFormat, NumberFormatType};

/// Thousands-separated integer pattern for unit counts
pub const NUMBER_PATTERN: &str = "#,##0";

/// Dollar amount with two decimals for prices and revenue
pub const CURRENCY_PATTERN: &str = "$#,##0.00";

/// Format for integer counts.
pub fn number_format() -> NumberFormat {
    NumberFormat {
        format_type: NumberFormatType::Number,
        pattern: Some(NUMBER_PATTERN.to_string()),
    }
}

/// Format for money amounts.
pub fn currency_format() -> NumberFormat {
    NumberFormat {
        format_type: NumberFormatType::Currency,
        pattern: Some(CURRENCY_PATTERN.to_string()),
    }
}

/// Wrap a number format in a cell format.
pub fn cell_format(number_format: NumberFormat) -> CellFormat {
    CellFormat {
        number_format: Some(number_format),
        text_format: None,
    }
}
