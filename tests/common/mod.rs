//! Common test utilities: order fixtures and request accessors.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use order_sheets::{
    BatchUpdateRequest, Order, OrderStatus, Request, UpdateCellsRequest,
    UpdateSheetPropertiesRequest,
};

/// The single-order example used throughout the docs.
pub fn example_order() -> Order {
    Order::new(1, "A", "X1", 3, 9.5, OrderStatus::Pending)
}

/// `count` complete orders cycling through the known statuses.
pub fn orders(count: usize) -> Vec<Order> {
    (0..count)
        .map(|i| {
            let status = OrderStatus::KNOWN[i % OrderStatus::KNOWN.len()].clone();
            Order::new(
                i as u64 + 1,
                format!("Customer {i}"),
                format!("P{}", i % 4),
                (i % 50) as u32 + 1,
                1.25 * (i % 8) as f64,
                status,
            )
        })
        .collect()
}

/// The resize sub-request of a sync batch.
pub fn resize(batch: &BatchUpdateRequest) -> &UpdateSheetPropertiesRequest {
    match &batch.requests[0] {
        Request::UpdateSheetProperties(r) => r,
        other => panic!("expected updateSheetProperties first, got {}", other.kind()),
    }
}

/// The row-write sub-request of a sync batch.
pub fn row_write(batch: &BatchUpdateRequest) -> &UpdateCellsRequest {
    match &batch.requests[1] {
        Request::UpdateCells(r) => r,
        other => panic!("expected updateCells second, got {}", other.kind()),
    }
}
