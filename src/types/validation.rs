use serde::{Deserialize, Serialize};

/// Data validation rule attached to a cell
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataValidationRule {
    pub condition: BooleanCondition,
    /// Reject invalid input instead of only flagging it
    #[serde(default)]
    pub strict: bool,
    /// Show a dropdown for list conditions
    #[serde(default)]
    pub show_custom_ui: bool,
    /// Message shown when the cell is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message: Option<String>,
}

/// A condition that evaluates to true or false
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BooleanCondition {
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<ConditionValue>,
}

/// Condition kinds used by this crate's validations
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    OneOfList,
    OneOfRange,
    NumberGreater,
    NumberBetween,
    TextNotEq,
    NotBlank,
}

/// A literal operand of a condition
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionValue {
    pub user_entered_value: String,
}
