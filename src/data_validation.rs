//! Data validation rules written alongside order cells.

use crate::types::{
    BooleanCondition, ConditionType, ConditionValue, DataValidationRule, OrderStatus,
};

/// Validation restricting a cell to one of `values`, shown as a dropdown.
///
/// With `strict` set the spreadsheet rejects any other input; otherwise it
/// only flags the cell.
pub fn one_of_list<I, S>(values: I, strict: bool) -> DataValidationRule
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DataValidationRule {
        condition: BooleanCondition {
            condition_type: ConditionType::OneOfList,
            values: values
                .into_iter()
                .map(|v| ConditionValue {
                    user_entered_value: v.into(),
                })
                .collect(),
        },
        strict,
        show_custom_ui: true,
        input_message: None,
    }
}

/// Strict validation for the status column: PENDING, SHIPPED or DELIVERED.
pub fn status_validation() -> DataValidationRule {
    one_of_list(OrderStatus::KNOWN.iter().map(OrderStatus::as_str), true)
}

/// Literal values of a list rule, in order.
pub fn list_values(rule: &DataValidationRule) -> Vec<&str> {
    rule.condition
        .values
        .iter()
        .map(|v| v.user_entered_value.as_str())
        .collect()
}
