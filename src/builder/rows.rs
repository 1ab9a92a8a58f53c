//! Per-order row construction for the data sheet.

use std::borrow::Cow;

use crate::columns::{Column, ColumnKind, COLUMNS};
use crate::data_validation::status_validation;
use crate::error::{Result, SheetSyncError};
use crate::numfmt::{cell_format, currency_format, number_format};
use crate::types::{CellData, Order, RowData};

/// A raw field value read from an order.
#[derive(Debug, Clone, PartialEq)]
enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
}

impl FieldValue<'_> {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s.into_owned(),
            Self::Number(n) => n.to_string(),
        }
    }
}

/// Read the field named by a column of the order at `row`.
fn field_value<'a>(
    order: &'a Order,
    row: usize,
    field: &'static str,
) -> Result<FieldValue<'a>> {
    let value = match field {
        "id" => order.id.map(|id| FieldValue::Text(Cow::Owned(id.to_string()))),
        "customerName" => order
            .customer_name
            .as_deref()
            .map(|s| FieldValue::Text(Cow::Borrowed(s))),
        "productCode" => order
            .product_code
            .as_deref()
            .map(|s| FieldValue::Text(Cow::Borrowed(s))),
        "unitsOrdered" => order.units_ordered.map(|n| FieldValue::Number(f64::from(n))),
        "unitPrice" => order.unit_price.map(FieldValue::Number),
        "status" => order
            .status
            .as_ref()
            .map(|s| FieldValue::Text(Cow::Borrowed(s.as_str()))),
        _ => {
            return Err(SheetSyncError::InvalidField {
                row,
                field,
                reason: "not an order field",
            })
        }
    };
    value.ok_or(SheetSyncError::MissingField { row, field })
}

/// Numeric cells must hold a finite value; JSON has no NaN or infinity.
fn finite(row: usize, column: &Column, n: f64) -> Result<f64> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(SheetSyncError::InvalidField {
            row,
            field: column.field,
            reason: "not a finite number",
        })
    }
}

/// Build the cell for one column of one order.
fn build_cell(row: usize, order: &Order, column: &Column) -> Result<CellData> {
    let value = field_value(order, row, column.field)?;

    let cell = match (column.kind, value) {
        (ColumnKind::Number, FieldValue::Number(n)) => {
            let n = finite(row, column, n)?;
            CellData::number(n).with_format(cell_format(number_format()))
        }
        (ColumnKind::Currency, FieldValue::Number(n)) => {
            let n = finite(row, column, n)?;
            CellData::number(n).with_format(cell_format(currency_format()))
        }
        (ColumnKind::Number | ColumnKind::Currency, FieldValue::Text(_)) => {
            return Err(SheetSyncError::InvalidField {
                row,
                field: column.field,
                reason: "expected a number",
            })
        }
        (ColumnKind::Enumerated, value) => {
            CellData::string(value.into_text()).with_validation(status_validation())
        }
        (ColumnKind::Text, value) => CellData::string(value.into_text()),
    };
    Ok(cell)
}

/// Build one row per order, each with one cell per column in column order.
///
/// # Errors
/// Returns `MissingField` naming the first order (by index) and field that is
/// absent, or `InvalidField` for a price or count that is not a finite number.
pub fn build_rows(orders: &[Order]) -> Result<Vec<RowData>> {
    orders
        .iter()
        .enumerate()
        .map(|(row, order)| {
            let values = COLUMNS
                .iter()
                .map(|column| build_cell(row, order, column))
                .collect::<Result<Vec<_>>>()?;
            Ok(RowData { values })
        })
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::data_validation::list_values;
    use crate::types::{ExtendedValue, NumberFormatType, OrderStatus};
    use test_case::test_case;

    fn sample() -> Order {
        Order::new(1, "A", "X1", 3, 9.5, OrderStatus::Pending)
    }

    #[test]
    fn test_row_cells_in_column_order() {
        let rows = build_rows(&[sample()]).unwrap();
        assert_eq!(rows.len(), 1);
        let values: Vec<_> = rows[0]
            .values
            .iter()
            .map(|c| c.user_entered_value.clone().unwrap())
            .collect();
        assert_eq!(
            values,
            vec![
                ExtendedValue::StringValue("1".to_string()),
                ExtendedValue::StringValue("A".to_string()),
                ExtendedValue::StringValue("X1".to_string()),
                ExtendedValue::NumberValue(3.0),
                ExtendedValue::NumberValue(9.5),
                ExtendedValue::StringValue("PENDING".to_string()),
            ]
        );
    }

    #[test]
    fn test_numeric_cells_carry_patterns() {
        let rows = build_rows(&[sample()]).unwrap();
        let units = rows[0].values[3].user_entered_format.clone().unwrap();
        let units_fmt = units.number_format.unwrap();
        assert_eq!(units_fmt.format_type, NumberFormatType::Number);
        assert_eq!(units_fmt.pattern.as_deref(), Some("#,##0"));

        let price = rows[0].values[4].user_entered_format.clone().unwrap();
        let price_fmt = price.number_format.unwrap();
        assert_eq!(price_fmt.format_type, NumberFormatType::Currency);
        assert_eq!(price_fmt.pattern.as_deref(), Some("$#,##0.00"));
    }

    #[test]
    fn test_text_cells_have_no_format_or_validation() {
        let rows = build_rows(&[sample()]).unwrap();
        for cell in &rows[0].values[..3] {
            assert!(cell.user_entered_format.is_none());
            assert!(cell.data_validation.is_none());
        }
    }

    #[test_case(OrderStatus::Pending ; "pending")]
    #[test_case(OrderStatus::Delivered ; "delivered")]
    #[test_case(OrderStatus::Other("LOST".to_string()) ; "unknown status")]
    fn test_status_cell_always_validated(status: OrderStatus) {
        let mut order = sample();
        order.status = Some(status.clone());
        let rows = build_rows(&[order]).unwrap();
        let cell = &rows[0].values[5];
        assert_eq!(
            cell.user_entered_value,
            Some(ExtendedValue::StringValue(status.as_str().to_string()))
        );
        let rule = cell.data_validation.as_ref().unwrap();
        assert!(rule.strict);
        assert_eq!(list_values(rule), ["PENDING", "SHIPPED", "DELIVERED"]);
    }

    #[test_case("id")]
    #[test_case("customerName")]
    #[test_case("productCode")]
    #[test_case("unitsOrdered")]
    #[test_case("unitPrice")]
    #[test_case("status")]
    fn test_missing_field_is_reported(field: &str) {
        let mut order = sample();
        match field {
            "id" => order.id = None,
            "customerName" => order.customer_name = None,
            "productCode" => order.product_code = None,
            "unitsOrdered" => order.units_ordered = None,
            "unitPrice" => order.unit_price = None,
            _ => order.status = None,
        }
        let err = build_rows(&[sample(), sample(), order]).unwrap_err();
        match err {
            SheetSyncError::MissingField { row, field: f } => {
                assert_eq!(row, 2);
                assert_eq!(f, field);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_field_value_unknown_field() {
        assert!(matches!(
            field_value(&sample(), 4, "discount"),
            Err(SheetSyncError::InvalidField { row: 4, field: "discount", .. })
        ));
    }

    #[test]
    fn test_text_in_number_column_is_rejected() {
        let column = Column {
            kind: ColumnKind::Currency,
            ..crate::columns::CUSTOMER_NAME
        };
        let err = build_cell(0, &sample(), &column).unwrap_err();
        assert!(matches!(err, SheetSyncError::InvalidField { field: "customerName", .. }));
    }

    #[test_case(f64::NAN ; "nan")]
    #[test_case(f64::INFINITY ; "infinity")]
    #[test_case(f64::NEG_INFINITY ; "negative infinity")]
    fn test_non_finite_price_is_rejected(price: f64) {
        let mut order = sample();
        order.unit_price = Some(price);
        let err = build_rows(&[sample(), order]).unwrap_err();
        assert!(err.is_input_error());
        match err {
            SheetSyncError::InvalidField { row, field, .. } => {
                assert_eq!(row, 1);
                assert_eq!(field, "unitPrice");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
