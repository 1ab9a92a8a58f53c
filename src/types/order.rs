use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfilment state of an order.
///
/// Serializes to the upper-case strings stored in the orders table
/// ("PENDING", "SHIPPED", "DELIVERED"). Any other value is kept verbatim in
/// `Other(String)`; the spreadsheet's list validation rejects it downstream.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    /// Catch-all for values written outside the known set.
    #[serde(untagged)]
    Other(String),
}

impl OrderStatus {
    /// The statuses accepted by the status column's validation, in display order.
    pub const KNOWN: [OrderStatus; 3] = [Self::Pending, Self::Shipped, Self::Delivered];

    /// Parse from a stored string value.
    pub fn from_str_val(s: &str) -> Self {
        match s {
            "PENDING" => Self::Pending,
            "SHIPPED" => Self::Shipped,
            "DELIVERED" => Self::Delivered,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer order as read from the orders store.
///
/// Fields are optional because records arrive from an external store that
/// does not guarantee completeness; the sync builder reports the first
/// missing field instead of substituting a default.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_ordered: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl Order {
    /// Build a complete order with every field present.
    pub fn new(
        id: u64,
        customer_name: impl Into<String>,
        product_code: impl Into<String>,
        units_ordered: u32,
        unit_price: f64,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: Some(id),
            customer_name: Some(customer_name.into()),
            product_code: Some(product_code.into()),
            units_ordered: Some(units_ordered),
            unit_price: Some(unit_price),
            status: Some(status),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_status_known_values_roundtrip() {
        for status in OrderStatus::KNOWN {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: OrderStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_status_unknown_value_is_kept() {
        let status: OrderStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, OrderStatus::Other("CANCELLED".to_string()));
        assert_eq!(status.to_string(), "CANCELLED");
        assert_eq!(OrderStatus::from_str_val("SHIPPED"), OrderStatus::Shipped);
    }

    #[test]
    fn test_order_deserializes_camel_case_with_missing_fields() {
        let order: Order = serde_json::from_str(
            r#"{"id": 7, "customerName": "Acme", "unitsOrdered": 12, "unitPrice": 2.5}"#,
        )
        .unwrap();
        assert_eq!(order.id, Some(7));
        assert_eq!(order.customer_name.as_deref(), Some("Acme"));
        assert_eq!(order.product_code, None);
        assert_eq!(order.units_ordered, Some(12));
        assert_eq!(order.unit_price, Some(2.5));
        assert_eq!(order.status, None);
    }
}
